//! Main logger implementation

use super::{
    appender::Appender,
    error::Result,
    fields::Fields,
    log_level::LogLevel,
    record::Record,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::RwLock;
use std::path::Path;

/// Synchronous leveled logger dispatching records to a set of appenders.
///
/// Dispatch is blocking: a call to [`Logger::log`] returns after every
/// appender has seen the record. Appender failures are isolated per
/// appender and reported on stderr, so a broken sink neither crashes the
/// caller nor silences the remaining sinks.
pub struct Logger {
    min_level: RwLock<LogLevel>,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: RwLock::new(LogLevel::Info),
            appenders: RwLock::new(Vec::new()),
        }
    }

    /// The zero-configuration production preset.
    ///
    /// JSON encoding, `Info` minimum level, console sink. Construction
    /// failures of any configured sink are surfaced rather than discarded.
    pub fn production() -> Result<Self> {
        Ok(Logger::builder()
            .min_level(LogLevel::Info)
            .appender(ConsoleAppender::production())
            .build())
    }

    /// Production preset writing JSONL to a file.
    ///
    /// Returns `Err` when the sink cannot be opened.
    pub fn production_to_file(path: impl AsRef<Path>) -> Result<Self> {
        let appender = FileAppender::json(path)?;
        Ok(Logger::builder()
            .min_level(LogLevel::Info)
            .appender(appender)
            .build())
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if level < *self.min_level.read() {
            return;
        }

        self.dispatch(Record::new(level, message.into()));
    }

    /// Log with structured fields attached to the record
    pub fn log_with_fields(&self, level: LogLevel, message: impl Into<String>, fields: Fields) {
        if level < *self.min_level.read() {
            return;
        }

        self.dispatch(Record::new(level, message.into()).with_fields(fields));
    }

    /// Log with the caller location attached to the record
    pub fn log_at(&self, level: LogLevel, message: impl Into<String>, file: &str, line: u32) {
        if level < *self.min_level.read() {
            return;
        }

        self.dispatch(Record::new(level, message.into()).with_location(file, line));
    }

    /// Dispatch a record to every appender with per-appender isolation.
    ///
    /// A panicking or failing appender is reported on stderr and the rest
    /// continue to receive the record.
    fn dispatch(&self, record: Record) {
        let mut appenders = self.appenders.write();

        for (idx, appender) in appenders.iter_mut().enumerate() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(&record)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Appender #{} failed: {}", idx, e);
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        idx, panic_msg
                    );
                }
            }
        }
    }

    /// Flush every appender, propagating the first failure
    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use prodlog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .appender(ConsoleAppender::new())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Last-chance flush of buffered sinks
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during drop: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use prodlog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .appender(ConsoleAppender::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    appenders: Vec<Box<dyn Appender>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            appenders: Vec::new(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::new();
        logger.set_min_level(self.min_level);
        for appender in self.appenders {
            logger.add_appender(appender);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

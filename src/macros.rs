//! Logging macros for ergonomic log message formatting.
//!
//! Two families are provided:
//!
//! - Logger-bound macros ([`log!`], [`info!`], ...) that format and dispatch
//!   through an explicit [`Logger`](crate::Logger) handle.
//! - Facade-bound macros ([`infof!`], [`errorf!`], ...) that format and
//!   dispatch through the process-global facade, attaching the caller
//!   location and returning the facade's `Result`.
//!
//! # Examples
//!
//! ```
//! use prodlog::prelude::*;
//! use prodlog::info;
//!
//! let logger = Logger::new();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message through a logger handle with automatic formatting.
///
/// # Examples
///
/// ```
/// # use prodlog::prelude::*;
/// # let logger = Logger::new();
/// use prodlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message through a logger handle.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message through a logger handle.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message through a logger handle.
///
/// # Examples
///
/// ```
/// # use prodlog::prelude::*;
/// # let logger = Logger::new();
/// use prodlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message through a logger handle.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message through a logger handle.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message through a logger handle.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Emit a formatted record through the global facade.
///
/// Expands to a call returning [`Result`](crate::Result); callers can
/// propagate with `?` or ignore the value for best-effort logging.
///
/// # Examples
///
/// ```no_run
/// use prodlog::{facade, logf, LogLevel};
///
/// facade::init_production().unwrap();
/// logf!(LogLevel::Info, "ready").unwrap();
/// ```
#[macro_export]
macro_rules! logf {
    ($level:expr, $($arg:tt)+) => {
        $crate::facade::emit_located($level, format_args!($($arg)+), file!(), line!())
    };
}

/// Emit a formatted info-level record through the global facade.
///
/// The `Infof`-style entry point: positional placeholders are consumed
/// left-to-right by the arguments.
///
/// # Examples
///
/// ```no_run
/// use prodlog::{facade, infof};
///
/// facade::init_production().unwrap();
/// infof!("GOOS: {}", std::env::consts::OS).unwrap();
/// ```
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::logf!($crate::LogLevel::Info, $($arg)+)
    };
}

/// Emit a formatted debug-level record through the global facade.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::logf!($crate::LogLevel::Debug, $($arg)+)
    };
}

/// Emit a formatted warning-level record through the global facade.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::logf!($crate::LogLevel::Warn, $($arg)+)
    };
}

/// Emit a formatted error-level record through the global facade.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::logf!($crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, LogLevel};

    #[test]
    fn test_log_macro() {
        let logger = Logger::new();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_trace_macro() {
        let mut logger = Logger::new();
        logger.set_min_level(LogLevel::Trace);
        trace!(logger, "Trace message");
        trace!(logger, "Value: {}", 10);
    }

    #[test]
    fn test_debug_macro() {
        let logger = Logger::new();
        debug!(logger, "Debug message");
        debug!(logger, "Count: {}", 5);
    }

    #[test]
    fn test_info_macro() {
        let logger = Logger::new();
        info!(logger, "Info message");
        info!(logger, "Items: {}", 100);
    }

    #[test]
    fn test_warn_macro() {
        let logger = Logger::new();
        warn!(logger, "Warning message");
        warn!(logger, "Retry {} of {}", 1, 3);
    }

    #[test]
    fn test_error_macro() {
        let logger = Logger::new();
        error!(logger, "Error message");
        error!(logger, "Code: {}", 500);
    }

    #[test]
    fn test_fatal_macro() {
        let logger = Logger::new();
        fatal!(logger, "Fatal message");
        fatal!(logger, "Critical failure: {}", "system");
    }

    #[test]
    fn test_facade_macros_surface_uninitialized() {
        // The global facade is not initialized inside unit tests that do
        // not own the lifecycle; the macros must surface that instead of
        // panicking. Tolerate an initialized facade in case test ordering
        // ran the lifecycle test first.
        let _ = infof!("value: {}", 1);
        let _ = errorf!("failed: {}", "reason");
    }
}

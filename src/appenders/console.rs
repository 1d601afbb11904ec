//! Console appender implementation

use crate::core::{Appender, Encoding, Record, Result, TimestampFormat};
#[cfg(feature = "console")]
use colored::Colorize;

/// Console sink routing severe records to stderr and the rest to stdout.
pub struct ConsoleAppender {
    use_colors: bool,
    encoding: Encoding,
    timestamp_format: TimestampFormat,
}

impl ConsoleAppender {
    /// Human-readable text output with colors
    pub fn new() -> Self {
        Self {
            use_colors: true,
            encoding: Encoding::Text,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// The production configuration: single-line JSON, no colors
    pub fn production() -> Self {
        Self {
            use_colors: false,
            encoding: Encoding::Json,
            timestamp_format: TimestampFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            encoding: Encoding::Text,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the output encoding for this appender
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the timestamp format used by the text encoding
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &Record) -> Result<()> {
        let output = match self.encoding {
            Encoding::Text => self.format_text(record),
            Encoding::Json => self.encoding.encode(record, &self.timestamp_format),
        };

        // Route Error and Fatal levels to stderr, others to stdout
        if record.level.is_severe() {
            eprintln!("{}", output);
        } else {
            println!("{}", output);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both streams since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

impl ConsoleAppender {
    /// Text encoding with the level colored when enabled
    fn format_text(&self, record: &Record) -> String {
        let line = Encoding::Text.encode(record, &self.timestamp_format);

        #[cfg(feature = "console")]
        if self.use_colors {
            let plain = format!("[{:5}]", record.level.upper_str());
            let painted = plain.color(record.level.color_code()).to_string();
            return line.replacen(&plain, &painted, 1);
        }

        let _ = self.use_colors;
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_append_does_not_fail() {
        let mut appender = ConsoleAppender::with_colors(false);
        let record = Record::new(LogLevel::Info, "console test".to_string());
        assert!(appender.append(&record).is_ok());
        assert!(appender.flush().is_ok());
    }

    #[test]
    fn test_production_uses_json() {
        let appender = ConsoleAppender::production();
        assert_eq!(appender.encoding, Encoding::Json);
        assert!(!appender.use_colors);
    }

    #[test]
    fn test_encoding_and_timestamp_overrides() {
        let mut appender = ConsoleAppender::with_colors(false)
            .with_encoding(Encoding::Json)
            .with_timestamp_format(TimestampFormat::UnixMillis);

        let record = Record::new(LogLevel::Warn, "override test".to_string());
        assert!(appender.append(&record).is_ok());
        assert_eq!(appender.encoding, Encoding::Json);
        assert_eq!(appender.timestamp_format, TimestampFormat::UnixMillis);
    }
}

//! Log record structure

use super::fields::Fields;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single log record.
///
/// Records are transient: constructed at emit time, dispatched once, and
/// discarded. The message is stored exactly as formatted by the caller;
/// control-character escaping happens in the line-oriented encoders, not
/// here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Fields>,
}

impl Record {
    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            message,
            timestamp: Utc::now(),
            file: None,
            line: None,
            fields: None,
        }
    }

    /// Attach the caller location
    pub fn with_location(mut self, file: &str, line: u32) -> Self {
        self.file = Some(file.to_string());
        self.line = Some(line);
        self
    }

    /// Attach structured fields
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = Some(fields);
        self
    }
}

//! Record encodings and timestamp formatting
//!
//! Two encodings are supported:
//! - `Json`: the production encoding, one object per line with `level`,
//!   `ts` (epoch milliseconds), `msg`, optional `caller`, and flattened
//!   fields
//! - `Text`: human-readable development format
//!
//! The text encoding escapes `\n`, `\r`, and `\t` in the message so one
//! record is always one line in a line-oriented sink. JSON needs no extra
//! escaping since the serializer already escapes control characters.

use super::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format used by the text encoding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// RFC 3339 with timezone offset: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Epoch milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format string
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

/// Output encoding for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Single-line JSON, the production encoding
    #[default]
    Json,

    /// Human-readable text
    Text,
}

impl Encoding {
    /// Encode a record as a single line, without a trailing newline
    pub fn encode(&self, record: &Record, timestamp_format: &TimestampFormat) -> String {
        match self {
            Encoding::Json => Self::encode_json(record),
            Encoding::Text => Self::encode_text(record, timestamp_format),
        }
    }

    /// Escape control characters so a record occupies exactly one line.
    ///
    /// Prevents injected newlines from forging additional records in
    /// line-oriented sinks.
    pub fn escape_line(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn encode_json(record: &Record) -> String {
        let mut obj = serde_json::Map::new();

        obj.insert(
            "level".to_string(),
            serde_json::Value::String(record.level.as_str().to_string()),
        );
        obj.insert(
            "ts".to_string(),
            serde_json::Value::Number(record.timestamp.timestamp_millis().into()),
        );
        obj.insert(
            "msg".to_string(),
            serde_json::Value::String(record.message.clone()),
        );

        if let (Some(file), Some(line)) = (&record.file, record.line) {
            obj.insert(
                "caller".to_string(),
                serde_json::Value::String(format!("{}:{}", file, line)),
            );
        }

        if let Some(ref fields) = record.fields {
            for (key, value) in fields.iter() {
                obj.insert(key.clone(), value.to_json_value());
            }
        }

        serde_json::to_string(&serde_json::Value::Object(obj)).unwrap_or_default()
    }

    fn encode_text(record: &Record, timestamp_format: &TimestampFormat) -> String {
        let timestamp_str = timestamp_format.format(&record.timestamp);

        let mut line = format!(
            "[{}] [{:5}] {}",
            timestamp_str,
            record.level.upper_str(),
            Self::escape_line(&record.message)
        );

        if let (Some(file), Some(line_no)) = (&record.file, record.line) {
            line.push_str(&format!(" ({}:{})", file, line_no));
        }

        if let Some(ref fields) = record.fields {
            if !fields.is_empty() {
                line.push(' ');
                line.push_str(&fields.format_pairs());
            }
        }

        line
    }
}

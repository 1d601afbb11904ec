//! File appender implementation

use crate::core::{Appender, Encoding, LogError, Record, Result, TimestampFormat};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Buffered append-mode file sink.
///
/// Construction opens the file immediately; an unreachable path is
/// surfaced as [`LogError::SinkUnavailable`] instead of deferring the
/// failure to the first write.
pub struct FileAppender {
    writer: BufWriter<File>,
    path: PathBuf,
    encoding: Encoding,
    timestamp_format: TimestampFormat,
}

impl FileAppender {
    /// Open a text-encoded file sink
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(path, Encoding::Text)
    }

    /// Open a JSONL file sink (one JSON object per record)
    pub fn json(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(path, Encoding::Json)
    }

    fn open(path: impl AsRef<Path>, encoding: Encoding) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::sink_unavailable(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
            encoding,
            timestamp_format: TimestampFormat::default(),
        })
    }

    /// Set the timestamp format used by the text encoding
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, record: &Record) -> Result<()> {
        let mut line = self.encoding.encode(record, &self.timestamp_format);
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the file
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use tempfile::TempDir;

    #[test]
    fn test_writes_one_line_per_record() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("out.log");

        let mut appender = FileAppender::new(&path).expect("open sink");
        appender
            .append(&Record::new(LogLevel::Info, "first".to_string()))
            .unwrap();
        appender
            .append(&Record::new(LogLevel::Info, "second".to_string()))
            .unwrap();
        appender.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_timestamp_format_override() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("millis.log");

        let mut appender = FileAppender::new(&path)
            .expect("open sink")
            .with_timestamp_format(TimestampFormat::UnixMillis);
        appender
            .append(&Record::new(LogLevel::Info, "stamped".to_string()))
            .unwrap();
        appender.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let stamp = content
            .trim_start_matches('[')
            .split(']')
            .next()
            .expect("bracketed timestamp");
        assert!(stamp.parse::<i64>().is_ok(), "not epoch millis: {}", stamp);
    }

    #[test]
    fn test_invalid_path_is_surfaced() {
        let result = FileAppender::new("/nonexistent-dir/deeper/out.log");
        match result {
            Err(LogError::SinkUnavailable { path, .. }) => {
                assert!(path.contains("nonexistent-dir"));
            }
            other => panic!("expected SinkUnavailable, got {:?}", other.map(|_| ())),
        }
    }
}

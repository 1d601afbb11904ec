//! Core logger types and traits

pub mod appender;
pub mod encoding;
pub mod error;
pub mod fields;
pub mod log_level;
pub mod logger;
pub mod record;

pub use appender::Appender;
pub use encoding::{Encoding, TimestampFormat};
pub use error::{LogError, Result};
pub use fields::{FieldValue, Fields};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use record::Record;

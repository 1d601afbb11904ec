//! # Prodlog
//!
//! A structured logging facade with a production preset and an explicit
//! lifecycle.
//!
//! ## Features
//!
//! - **Production Preset**: JSON-encoded records at informational level with
//!   zero configuration
//! - **Explicit Lifecycle**: the global logger is installed once and released
//!   by a single deterministic shutdown
//! - **Surfaced Errors**: sink construction and lifecycle failures are
//!   returned to the caller, never silently discarded
//! - **Thread Safe**: designed for concurrent call sites

pub mod actions;
pub mod appenders;
pub mod core;
pub mod facade;
pub mod macros;
pub mod platform;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, Encoding, FieldValue, Fields, LogError, Logger, LoggerBuilder, LogLevel,
        Record, Result, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    Appender, Encoding, FieldValue, Fields, LogError, Logger, LoggerBuilder, LogLevel, Record,
    Result, TimestampFormat,
};

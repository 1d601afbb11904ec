//! Process-global logging facade
//!
//! The facade owns a single process-wide [`Logger`], installed once through
//! [`init`] (or the [`init_production`] convenience) and released through an
//! explicit, deterministic [`shutdown`]. Construction and lifecycle failures
//! are surfaced as [`LogError`](crate::LogError) values; they are never
//! silently discarded.
//!
//! Emission helpers return `Result` so callers choose the policy: propagate
//! with `?`, or ignore the value for best-effort logging.
//!
//! # Example
//!
//! ```no_run
//! use prodlog::{facade, infof};
//!
//! fn main() -> prodlog::Result<()> {
//!     facade::init_production()?;
//!     infof!("listening on port {}", 8080)?;
//!     facade::shutdown()
//! }
//! ```

use crate::core::{Fields, LogError, Logger, LogLevel, Result};
use parking_lot::RwLock;
use std::fmt;
use std::path::Path;

static GLOBAL: RwLock<Option<Logger>> = RwLock::new(None);

/// Install a logger as the process-global instance.
///
/// Errors with [`LogError::AlreadyInitialized`] if a logger is already
/// installed; call [`shutdown`] first to replace it.
pub fn init(logger: Logger) -> Result<()> {
    let mut slot = GLOBAL.write();
    if slot.is_some() {
        return Err(LogError::AlreadyInitialized);
    }
    *slot = Some(logger);
    Ok(())
}

/// Install the production preset as the process-global logger.
pub fn init_production() -> Result<()> {
    init(Logger::production()?)
}

/// Install a production preset writing JSONL to `path`.
///
/// Surfaces sink-construction failure to the caller.
pub fn init_production_to_file(path: impl AsRef<Path>) -> Result<()> {
    init(Logger::production_to_file(path)?)
}

/// Whether a global logger is currently installed
pub fn is_initialized() -> bool {
    GLOBAL.read().is_some()
}

/// Emit one formatted record through the global logger.
///
/// Errors with [`LogError::NotInitialized`] when [`init`] has not run.
pub fn emit(level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
    let slot = GLOBAL.read();
    let logger = slot.as_ref().ok_or(LogError::NotInitialized)?;
    logger.log(level, args.to_string());
    Ok(())
}

/// Emit one formatted record with the caller location attached
pub fn emit_located(
    level: LogLevel,
    args: fmt::Arguments<'_>,
    file: &str,
    line: u32,
) -> Result<()> {
    let slot = GLOBAL.read();
    let logger = slot.as_ref().ok_or(LogError::NotInitialized)?;
    logger.log_at(level, args.to_string(), file, line);
    Ok(())
}

/// Emit one formatted record with structured fields attached
pub fn emit_with_fields(level: LogLevel, args: fmt::Arguments<'_>, fields: Fields) -> Result<()> {
    let slot = GLOBAL.read();
    let logger = slot.as_ref().ok_or(LogError::NotInitialized)?;
    logger.log_with_fields(level, args.to_string(), fields);
    Ok(())
}

/// Run a closure against the global logger
pub fn with_logger<F, R>(f: F) -> Result<R>
where
    F: FnOnce(&Logger) -> R,
{
    let slot = GLOBAL.read();
    let logger = slot.as_ref().ok_or(LogError::NotInitialized)?;
    Ok(f(logger))
}

/// Flush every sink of the global logger
pub fn flush() -> Result<()> {
    let slot = GLOBAL.read();
    let logger = slot.as_ref().ok_or(LogError::NotInitialized)?;
    logger.flush()
}

/// Flush and uninstall the global logger.
///
/// Shutdown is a single deterministic operation: after it returns, the
/// facade reports [`LogError::NotInitialized`] until [`init`] runs again.
pub fn shutdown() -> Result<()> {
    let mut slot = GLOBAL.write();
    let logger = slot.take().ok_or(LogError::NotInitialized)?;
    logger.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The facade is process-global state, so the whole lifecycle is
    // exercised in a single test to avoid cross-test interference.
    #[test]
    fn test_facade_lifecycle() {
        assert!(!is_initialized());
        assert!(matches!(
            emit(LogLevel::Info, format_args!("too early")),
            Err(LogError::NotInitialized)
        ));
        assert!(matches!(shutdown(), Err(LogError::NotInitialized)));

        init(Logger::builder().min_level(LogLevel::Info).build()).expect("first init");
        assert!(is_initialized());

        // Second init must surface the conflict
        assert!(matches!(
            init(Logger::new()),
            Err(LogError::AlreadyInitialized)
        ));

        emit(LogLevel::Info, format_args!("ready")).expect("emit after init");
        emit_with_fields(
            LogLevel::Info,
            format_args!("request done"),
            Fields::new().with("status", 200),
        )
        .expect("emit with fields");
        flush().expect("flush");

        with_logger(|logger| assert_eq!(logger.min_level(), LogLevel::Info))
            .expect("with_logger");

        shutdown().expect("shutdown");
        assert!(!is_initialized());

        // Re-initialization after shutdown is permitted
        init(Logger::new()).expect("re-init");
        shutdown().expect("second shutdown");
    }
}

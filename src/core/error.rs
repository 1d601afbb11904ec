//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configured sink could not be opened
    #[error("sink unavailable for '{path}': {message}")]
    SinkUnavailable { path: String, message: String },

    /// Invalid configuration with details
    #[error("invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// The global logger was already installed
    #[error("global logger already initialized")]
    AlreadyInitialized,

    /// The global logger has not been installed yet
    #[error("global logger not initialized; call facade::init first")]
    NotInitialized,

    /// Writer error (generic)
    #[error("writer error: {0}")]
    Writer(String),
}

impl LogError {
    /// Create a sink unavailable error with the offending path
    pub fn sink_unavailable(path: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::SinkUnavailable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LogError::Writer(msg.into())
    }
}

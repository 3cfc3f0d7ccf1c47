//! Error types for logger setup

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while wiring loggers into the process
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A global `tracing` subscriber was already installed
    #[error("Failed to install tracing bridge: {0}")]
    TracingInit(String),
}

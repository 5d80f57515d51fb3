//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup, the runs themselves, and report output.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ameba_core::config::ConfigError,
    },

    /// Initial placement failed.
    #[error("desk error: {source}")]
    Desk {
        /// The underlying desk error.
        #[from]
        source: ameba_desk::DeskError,
    },

    /// The engine refused to run because it was never initialized.
    #[error("run {run} was not initialized")]
    NotInitialized {
        /// Index of the affected run.
        run: u32,
    },

    /// A blocking run task panicked or was cancelled.
    #[error("run task failed: {message}")]
    Join {
        /// Description of the join failure.
        message: String,
    },

    /// Writing the report file failed.
    #[error("report I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Serializing the report failed.
    #[error("report serialization error: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}

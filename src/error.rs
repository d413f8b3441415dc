/// Error types for the meeting summarizer
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Meeting notes are empty")]
    EmptyNotes,

    #[error("Completion call failed: {0}")]
    Completion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

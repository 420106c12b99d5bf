//! Error types for greeting output

use thiserror::Error;

/// Errors raised while writing a greeting
#[derive(Error, Debug)]
pub enum GreetError {
    /// The output sink rejected a write
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for greeting operations
pub type Result<T> = std::result::Result<T, GreetError>;

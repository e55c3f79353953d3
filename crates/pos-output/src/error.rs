//! Error types for ShopKeep output.

use thiserror::Error;

/// Errors that can occur while writing a ShopKeep import.
#[derive(Debug, Error)]
pub enum OutputError {
    /// CSV encoding or the underlying write failed.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the output failed.
    #[error("failed to flush output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

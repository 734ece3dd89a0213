//! Error handling module for the asmt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application. Tokenizing itself cannot
//! fail; everything here comes from configuration, arguments or I/O.

use thiserror::Error;

/// Main error type for the asmt CLI application.
#[derive(Error, Debug)]
pub enum AsmtError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when argument validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using AsmtError.
pub type Result<T> = std::result::Result<T, AsmtError>;

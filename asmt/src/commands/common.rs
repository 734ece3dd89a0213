//! Common types and utilities for asmt commands.
//!
//! This module provides shared types and message constants used across
//! all command implementations to ensure consistency.

use crate::error::{AsmtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `type: <code>, data: "<text>"` line per token
    Plain,
    /// One line per input line, tokens written as `Kind(text)`
    Kinds,
    /// A JSON array with one record per input line
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat.
    ///
    /// # Arguments
    /// * `s` - The string to parse (case-insensitive)
    ///
    /// # Returns
    /// * `Option<OutputFormat>` - The parsed format or None if invalid
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Some(Self::Plain),
            "kinds" => Some(Self::Kinds),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Resolves the effective format: the flag if given, else the
    /// configured value.
    ///
    /// An unknown flag value is a validation error; an unknown configured
    /// value is a configuration error.
    pub fn resolve(flag: Option<&str>, configured: &str) -> Result<Self> {
        if let Some(format) = flag {
            return Self::parse(format).ok_or_else(|| {
                AsmtError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, format))
            });
        }

        Self::parse(configured).ok_or_else(|| {
            AsmtError::Config(format!(
                "{} {}",
                error_messages::INVALID_CONFIG_FORMAT,
                configured
            ))
        })
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when config has invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration:";

    /// Error when both positional lines and an input file are given.
    pub const CONFLICTING_INPUT: &str = "Give instruction lines or --file, not both";

    /// Error when the worker count is zero.
    pub const ZERO_JOBS: &str = "Number of jobs must be at least 1";

    /// Error when the input file does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when the worker pool cannot be started.
    pub const THREAD_POOL: &str = "Failed to start worker threads:";
}

//! Command modules for the asmt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod tokenize;
pub mod vocab;

// Re-export command types
pub use tokenize::{TokenizeArgs, TokenizeCommand};
pub use traits::Command;
pub use vocab::{VocabArgs, VocabCommand};

//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, options and dispatch
//! - `word` - Bare-word lexing and classification
//! - `punct` - Punctuation lexing

mod core;
mod punct;
mod word;

pub use self::core::{tokenize, tokenize_with, Lexer, LexerOptions};

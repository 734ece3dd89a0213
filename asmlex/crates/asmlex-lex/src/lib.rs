//! asmlex-lex - Lexical Analyzer for x86 Instruction Text
//!
//! This crate turns one line of disassembly text, such as
//! `lock repne mov eax, dword ptr ds:[ebx]`, into a flat stream of typed
//! tokens for later operand parsing and instruction-form matching.
//!
//! # Example Usage
//!
//! ```
//! use asmlex_lex::{tokenize, TokenKind};
//!
//! let stream = tokenize("lock repne mov eax, dword ptr ds:[ebx]");
//!
//! assert_eq!(stream[0].kind, TokenKind::Prefix);
//! assert_eq!(stream[2].kind, TokenKind::Mnemonic);
//! assert_eq!(stream[2].text(), "mov");
//!
//! for token in &stream {
//!     println!("{token}");
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token kind and token stream definitions
//! - [`lexer`] - Scanner: splits a line and drives classification
//! - [`classify`] - Bare-word classification
//! - [`vocab`] - Fixed vocabularies
//! - [`cursor`] - Character cursor for line traversal
//!
//! # Token Categories
//!
//! ## Words
//!
//! | Kind | Members |
//! |---|---|
//! | `Segment` | `fs ds gs es ss cs` |
//! | `MemSize` | `byte word dword qword` |
//! | `Register` | `eax ebx ecx edx ebp esp esi edi` |
//! | `Prefix` | `lock rep repne repe repz` |
//! | `Ptr` | `ptr` |
//! | `Mnemonic` | any other word first on the line or right after a prefix |
//! | `Unknown` | any other word |
//!
//! ## Punctuation
//!
//! `,` Comma, `:` Colon, `[` MemOpen, `]` MemClose, `+` Plus, `-` Minus,
//! `*` Mult.
//!
//! Spaces and tabs separate tokens and produce none. Lexing never fails.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;
pub mod vocab;

mod edge_cases;

// Re-export main types for convenience
pub use classify::{classify, is_mnemonic_position};
pub use cursor::Cursor;
pub use lexer::{tokenize, tokenize_with, Lexer, LexerOptions};
pub use token::{Token, TokenKind, TokenStream};
pub use vocab::{Vocabulary, VOCABULARY};

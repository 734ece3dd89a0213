//! Bare-word classification.
//!
//! A word is classified by, in order:
//! 1. vocabulary membership (segment, memory size, register, prefix, `ptr`)
//! 2. position: the first word of a line, or a word right after a prefix,
//!    is the mnemonic
//! 3. otherwise it is [`TokenKind::Unknown`]
//!
//! Position is passed in as the kind of the previous token rather than read
//! from the stream under construction.

use crate::token::TokenKind;
use crate::vocab::{Vocabulary, VOCABULARY};

/// Classifies a bare word using the process-wide vocabulary.
///
/// `previous` is the kind of the token immediately before `word`, or
/// `None` at the start of the line.
///
/// # Example
///
/// ```
/// use asmlex_lex::{classify, TokenKind};
///
/// assert_eq!(classify("mov", None), TokenKind::Mnemonic);
/// assert_eq!(classify("mov", Some(TokenKind::Prefix)), TokenKind::Mnemonic);
/// assert_eq!(classify("mov", Some(TokenKind::Register)), TokenKind::Unknown);
/// assert_eq!(classify("eax", None), TokenKind::Register);
/// ```
#[inline]
pub fn classify(word: &str, previous: Option<TokenKind>) -> TokenKind {
    VOCABULARY.classify(word, previous)
}

/// Returns true if a word following `previous` sits in mnemonic position.
#[inline]
pub fn is_mnemonic_position(previous: Option<TokenKind>) -> bool {
    matches!(previous, None | Some(TokenKind::Prefix))
}

impl Vocabulary {
    /// Classifies a bare word against this vocabulary.
    pub fn classify(&self, word: &str, previous: Option<TokenKind>) -> TokenKind {
        if let Some(kind) = self.lookup(word) {
            return kind;
        }

        if is_mnemonic_position(previous) {
            TokenKind::Mnemonic
        } else {
            TokenKind::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_beats_position() {
        assert_eq!(classify("lock", None), TokenKind::Prefix);
        assert_eq!(classify("eax", Some(TokenKind::Prefix)), TokenKind::Register);
        assert_eq!(classify("ptr", None), TokenKind::Ptr);
        assert_eq!(classify("fs", None), TokenKind::Segment);
        assert_eq!(classify("byte", Some(TokenKind::Prefix)), TokenKind::MemSize);
    }

    #[test]
    fn test_mnemonic_at_start() {
        assert_eq!(classify("nop", None), TokenKind::Mnemonic);
        assert_eq!(classify("GetProcAddress", None), TokenKind::Mnemonic);
    }

    #[test]
    fn test_mnemonic_after_prefix() {
        assert_eq!(classify("cmpsb", Some(TokenKind::Prefix)), TokenKind::Mnemonic);
    }

    #[test]
    fn test_unknown_after_anything_else() {
        for kind in TokenKind::ALL {
            if kind == TokenKind::Prefix {
                continue;
            }
            assert_eq!(classify("mov", Some(kind)), TokenKind::Unknown, "after {kind}");
        }
    }

    #[test]
    fn test_mnemonic_position_table() {
        assert!(is_mnemonic_position(None));
        assert!(is_mnemonic_position(Some(TokenKind::Prefix)));
        assert!(!is_mnemonic_position(Some(TokenKind::Mnemonic)));
        assert!(!is_mnemonic_position(Some(TokenKind::Comma)));
    }

    #[test]
    fn test_priority_order_with_overlapping_groups() {
        // A word listed as both register and prefix resolves to register.
        let vocab = Vocabulary::from_groups(&[
            (TokenKind::Segment, &["fs"]),
            (TokenKind::MemSize, &["dword"]),
            (TokenKind::Register, &["eax", "lock"]),
            (TokenKind::Prefix, &["lock"]),
            (TokenKind::Ptr, &["ptr"]),
        ]);
        assert_eq!(vocab.classify("lock", None), TokenKind::Register);
        assert_eq!(vocab.classify("mov", Some(TokenKind::Register)), TokenKind::Unknown);
    }

    #[test]
    fn test_case_sensitive_falls_back_to_position() {
        assert_eq!(classify("EAX", None), TokenKind::Mnemonic);
        assert_eq!(classify("EAX", Some(TokenKind::Comma)), TokenKind::Unknown);
    }
}

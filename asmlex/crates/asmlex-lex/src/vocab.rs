//! Fixed vocabularies of the instruction syntax.
//!
//! Every bare word is first looked up in a single text-to-kind table built
//! from the word groups below. The groups are listed in priority order; if
//! a word ever appears in two groups the earlier group wins.
//!
//! Lookup is exact and case-sensitive: `EAX` is not a register.

use std::sync::LazyLock;

use asmlex_util::FxIndexMap;

use crate::token::TokenKind;

/// Segment register names.
pub const SEGMENTS: &[&str] = &["fs", "ds", "gs", "es", "ss", "cs"];

/// Memory-size specifiers.
pub const MEM_SIZES: &[&str] = &["byte", "word", "dword", "qword"];

/// 32-bit general purpose registers.
pub const REGISTERS: &[&str] = &["eax", "ebx", "ecx", "edx", "ebp", "esp", "esi", "edi"];

/// Instruction prefixes.
pub const PREFIXES: &[&str] = &["lock", "rep", "repne", "repe", "repz"];

/// The pointer keyword of `dword ptr [...]`.
pub const PTR: &str = "ptr";

/// Word groups in classification priority order.
pub const GROUPS: &[(TokenKind, &[&str])] = &[
    (TokenKind::Segment, SEGMENTS),
    (TokenKind::MemSize, MEM_SIZES),
    (TokenKind::Register, REGISTERS),
    (TokenKind::Prefix, PREFIXES),
    (TokenKind::Ptr, &[PTR]),
];

/// The process-wide vocabulary, built on first use and never mutated.
pub static VOCABULARY: LazyLock<Vocabulary> = LazyLock::new(|| Vocabulary::from_groups(GROUPS));

/// An immutable word-to-kind table.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    table: FxIndexMap<&'static str, TokenKind>,
}

impl Vocabulary {
    /// Builds a table from word groups given in priority order.
    ///
    /// # Example
    ///
    /// ```
    /// use asmlex_lex::{TokenKind, Vocabulary};
    ///
    /// let vocab = Vocabulary::from_groups(&[
    ///     (TokenKind::Register, &["eax"]),
    ///     (TokenKind::Prefix, &["eax", "lock"]),
    /// ]);
    /// assert_eq!(vocab.lookup("eax"), Some(TokenKind::Register));
    /// assert_eq!(vocab.lookup("lock"), Some(TokenKind::Prefix));
    /// ```
    pub fn from_groups(groups: &[(TokenKind, &[&'static str])]) -> Self {
        let capacity = groups.iter().map(|(_, words)| words.len()).sum();
        let mut table = FxIndexMap::with_capacity_and_hasher(capacity, Default::default());

        for &(kind, words) in groups {
            for &word in words {
                table.entry(word).or_insert(kind);
            }
        }

        Self { table }
    }

    /// Returns the kind of `word`, if it belongs to the vocabulary.
    #[inline]
    pub fn lookup(&self, word: &str) -> Option<TokenKind> {
        self.table.get(word).copied()
    }

    /// Returns true if `word` belongs to the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.table.contains_key(word)
    }

    /// Iterates over all `(word, kind)` entries in priority order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.table.iter().map(|(&word, &kind)| (word, kind))
    }

    /// Iterates over the words that classify as `kind`.
    pub fn words(&self, kind: TokenKind) -> impl Iterator<Item = &'static str> + '_ {
        self.entries()
            .filter(move |&(_, k)| k == kind)
            .map(|(word, _)| word)
    }

    /// Returns the number of words in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Looks `word` up in the process-wide vocabulary.
#[inline]
pub fn lookup(word: &str) -> Option<TokenKind> {
    VOCABULARY.lookup(word)
}

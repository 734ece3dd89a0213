//! asmlex-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Small foundation types shared by the asmlex crates:
//!
//! - [`Span`]: byte range of a lexeme inside one instruction line, plus its
//!   1-based character column for human-readable output.
//! - Fast-hash collection aliases ([`FxHashMap`], [`FxHashSet`],
//!   [`FxIndexMap`]) used for the fixed lookup tables of the lexer.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. ZERO-COST ABSTRACTIONS
//!    Everything here is `Copy` or a type alias; nothing allocates on its own.
//!
//! 2. ORDERED LOOKUP TABLES
//!    Vocabulary tables need both O(1) exact-match lookup and a stable
//!    listing order. [`FxIndexMap`] gives both: insertion order is kept and
//!    hashing uses the Fx hasher, which is fast on the short ASCII keys an
//!    instruction line is made of.

#![warn(missing_docs)]

pub mod span;

pub use span::Span;

// Re-export commonly used types
pub use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};

/// An insertion-ordered hash map using the Fx hasher.
///
/// # Example
///
/// ```
/// use asmlex_util::FxIndexMap;
///
/// let mut map: FxIndexMap<&str, u8> = FxIndexMap::default();
/// map.insert("eax", 3);
/// map.insert("lock", 1);
///
/// assert_eq!(map.get("eax"), Some(&3));
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["eax", "lock"]);
/// ```
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

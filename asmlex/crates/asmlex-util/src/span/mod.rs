//! Span module - Source location tracking.
//!
//! An instruction line is lexed on its own, so a location is just a byte
//! range into that line plus the character column where it starts.
//!
//! # Examples
//!
//! ```
//! use asmlex_util::span::Span;
//!
//! let line = "mov eax, ebx";
//! let span = Span::new(4, 7, 5);
//! assert_eq!(span.source_text(line), Some("eax"));
//! ```

/// Source location span
///
/// A `Span` represents a range in one source line, identified by:
/// - Byte offsets (start, end), end exclusive
/// - Column number (1-based, in characters) of the first character
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in the line
    pub start: usize,
    /// End byte offset in the line (exclusive)
    pub end: usize,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use asmlex_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `column` - Column number (1-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use asmlex_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 11);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, column: u32) -> Self {
        Self { start, end, column }
    }

    /// Returns true if the span covers no bytes (start >= end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the length of the span in bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use asmlex_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 11);
    /// assert_eq!(span.len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use asmlex_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 11);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Join two adjacent spans into a single span
    ///
    /// Returns `None` if the spans are not adjacent (self.end != other.start).
    ///
    /// # Examples
    ///
    /// ```
    /// use asmlex_util::span::Span;
    ///
    /// let span1 = Span::new(0, 2, 1);
    /// let span2 = Span::new(2, 3, 3);
    /// assert_eq!(span1.join(span2), Some(Span::new(0, 3, 1)));
    /// ```
    #[inline]
    pub fn join(self, other: Span) -> Option<Span> {
        if self.end == other.start {
            Some(Span {
                start: self.start,
                end: other.end,
                column: self.column,
            })
        } else {
            None
        }
    }

    /// Returns the slice of `source` this span covers.
    ///
    /// Returns `None` if the range is out of bounds or does not fall on
    /// character boundaries.
    #[inline]
    pub fn source_text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

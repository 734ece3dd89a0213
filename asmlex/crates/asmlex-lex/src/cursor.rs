//! Character cursor for traversing an instruction line.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through the characters of one line. It handles UTF-8
//! encoding correctly and tracks the character column of the current
//! position for span reporting.
//!
//! A line has no line structure of its own: `\n` and `\r` are ordinary
//! characters here, and only space and tab count as blanks.

/// A cursor for traversing an instruction line character by character.
///
/// # Example
///
/// ```
/// use asmlex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("mov eax");
///
/// assert_eq!(cursor.current_char(), Some('m'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('o'));
/// ```
pub struct Cursor<'a> {
    /// The line being traversed.
    source: &'a str,

    /// Current byte position in the line.
    position: usize,

    /// Current column number (1-based, in characters).
    column: u32,
}

/// Returns true for the characters that separate lexemes without producing
/// a token of their own.
#[inline]
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given line.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            column: 1,
        }
    }

    /// Returns the character at the cursor position, or `None` at the end
    /// of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use asmlex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("[");
    /// assert_eq!(cursor.current_char(), Some('['));
    /// assert_eq!(Cursor::new("").current_char(), None);
    /// ```
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII (most common case)
        if b < 128 {
            return Some(b as char);
        }

        // Slow path for UTF-8
        self.source[self.position..].chars().next()
    }

    /// Advances the cursor to the next character.
    ///
    /// Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use asmlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("dword ptr");
    /// cursor.eat_while(|c| c != ' ');
    /// assert_eq!(cursor.remaining(), " ptr");
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current_char() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Skips spaces and tabs.
    ///
    /// Other whitespace such as `\n` is not skipped: it is part of a lexeme.
    ///
    /// # Example
    ///
    /// ```
    /// use asmlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t lock");
    /// cursor.skip_blanks();
    /// assert_eq!(cursor.current_char(), Some('l'));
    /// ```
    pub fn skip_blanks(&mut self) {
        self.eat_while(is_blank);
    }

    /// Returns true if the cursor is at the end of the line.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the line.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the line from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use asmlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("repne movsb");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c != ' ');
    /// assert_eq!(cursor.slice_from(start), "repne");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the line from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}

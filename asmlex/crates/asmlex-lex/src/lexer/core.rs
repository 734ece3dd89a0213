//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use asmlex_util::Span;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind, TokenStream};

/// Options that change how tokens are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerOptions {
    /// Give `Minus` tokens the text `"+"`.
    ///
    /// Older output of this tokenizer carried that text; turn this on only
    /// to compare against it. The kind is `Minus` either way.
    pub legacy_minus_text: bool,
}

/// Lexer for one line of x86 instruction text.
///
/// Splits the line at spaces, tabs and the punctuation `, : [ ] + - *`,
/// and classifies each word as soon as it is complete. The kind of the
/// last token produced is carried forward as context for the next word.
///
/// # Example
///
/// ```
/// use asmlex_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("rep stosd");
/// assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Prefix));
/// assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Mnemonic));
/// assert_eq!(lexer.next_token(), None);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for line traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Output options.
    pub(crate) options: LexerOptions,

    /// Kind of the last token produced, `None` before the first one.
    pub(crate) previous: Option<TokenKind>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Column where the current token starts (1-based).
    pub(crate) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given line with default options.
    pub fn new(line: &'a str) -> Self {
        Self::with_options(line, LexerOptions::default())
    }

    /// Creates a new lexer for the given line.
    pub fn with_options(line: &'a str, options: LexerOptions) -> Self {
        Self {
            cursor: Cursor::new(line),
            options,
            previous: None,
            token_start: 0,
            token_start_column: 1,
        }
    }

    /// Returns the next token of the line.
    ///
    /// Skips blanks, then dispatches on the current character: punctuation
    /// becomes a one-character token, anything else starts a word.
    ///
    /// # Returns
    /// The next token, or `None` at the end of the line.
    pub fn next_token(&mut self) -> Option<Token> {
        self.cursor.skip_blanks();

        self.token_start = self.cursor.position();
        self.token_start_column = self.cursor.column();

        let c = self.cursor.current_char()?;
        let token = match TokenKind::punctuation(c) {
            Some(kind) => self.lex_punct(kind),
            None => self.lex_word(),
        };

        self.previous = Some(token.kind);
        Some(token)
    }

    /// Lexes the rest of the line into a stream.
    pub fn scan(mut self) -> TokenStream {
        let mut stream = TokenStream::with_capacity(self.cursor.remaining().len() / 2);
        while let Some(token) = self.next_token() {
            stream.push(token);
        }
        stream
    }

    /// Returns the kind of the last token produced.
    pub fn previous_kind(&self) -> Option<TokenKind> {
        self.previous
    }

    /// Returns the options this lexer was created with.
    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// Returns the current byte position in the line.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Builds the span of the token that ends at the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_column,
        )
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Lexes one line with default options.
///
/// Accepts any input and never fails: unrecognized words become
/// [`TokenKind::Unknown`] tokens.
///
/// # Example
///
/// ```
/// use asmlex_lex::{tokenize, TokenKind};
///
/// let stream = tokenize("es:[eax*8+15]");
/// let kinds: Vec<_> = stream.kinds().collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Segment,
///         TokenKind::Colon,
///         TokenKind::MemOpen,
///         TokenKind::Register,
///         TokenKind::Mult,
///         TokenKind::Unknown,
///         TokenKind::Plus,
///         TokenKind::Unknown,
///         TokenKind::MemClose,
///     ]
/// );
/// ```
pub fn tokenize(line: &str) -> TokenStream {
    Lexer::new(line).scan()
}

/// Lexes one line with the given options.
pub fn tokenize_with(line: &str, options: LexerOptions) -> TokenStream {
    Lexer::with_options(line, options).scan()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<TokenKind> {
        tokenize(line).kinds().collect()
    }

    fn pairs(line: &str) -> Vec<(TokenKind, String)> {
        tokenize(line)
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_prefixed_memory_operand() {
        use TokenKind::*;
        let tokens = pairs("lock repne mov eax, dword ptr ds:[ebx]");
        let expected = [
            (Prefix, "lock"),
            (Prefix, "repne"),
            (Mnemonic, "mov"),
            (Register, "eax"),
            (Comma, ","),
            (MemSize, "dword"),
            (Ptr, "ptr"),
            (Segment, "ds"),
            (Colon, ":"),
            (MemOpen, "["),
            (Register, "ebx"),
            (MemClose, "]"),
        ];
        assert_eq!(tokens.len(), expected.len());
        for ((kind, text), (want_kind, want_text)) in tokens.iter().zip(expected) {
            assert_eq!(*kind, want_kind);
            assert_eq!(text, want_text);
        }
    }

    #[test]
    fn test_scaled_index() {
        use TokenKind::*;
        let tokens = pairs("es:[eax*8+15]");
        let texts: Vec<_> = tokens.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(texts, ["es", ":", "[", "eax", "*", "8", "+", "15", "]"]);
        assert_eq!(
            kinds("es:[eax*8+15]"),
            [Segment, Colon, MemOpen, Register, Mult, Unknown, Plus, Unknown, MemClose]
        );
    }

    #[test]
    fn test_empty_line() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_blank_line() {
        assert!(tokenize(" \t  \t").is_empty());
    }

    #[test]
    fn test_minus_text_is_minus() {
        let stream = tokenize("[ebp-4]");
        assert_eq!(stream[2].kind, TokenKind::Minus);
        assert_eq!(stream[2].text(), "-");
    }

    #[test]
    fn test_legacy_minus_text() {
        let options = LexerOptions {
            legacy_minus_text: true,
        };
        let stream = tokenize_with("[ebp-4]", options);
        assert_eq!(stream[2].kind, TokenKind::Minus);
        assert_eq!(stream[2].text(), "+");
        // Plus is unaffected.
        let stream = tokenize_with("[ebp+4]", options);
        assert_eq!(stream[2].kind, TokenKind::Plus);
        assert_eq!(stream[2].text(), "+");
    }

    #[test]
    fn test_mnemonic_context() {
        use TokenKind::*;
        assert_eq!(kinds("mov"), [Mnemonic]);
        assert_eq!(kinds("lock mov"), [Prefix, Mnemonic]);
        assert_eq!(kinds("eax mov"), [Register, Unknown]);
        assert_eq!(kinds("rep repe movsb"), [Prefix, Prefix, Mnemonic]);
    }

    #[test]
    fn test_word_after_punctuation_is_unknown() {
        use TokenKind::*;
        assert_eq!(kinds(", mov"), [Comma, Unknown]);
        assert_eq!(kinds("[mov]"), [MemOpen, Unknown, MemClose]);
    }

    #[test]
    fn test_spans() {
        let stream = tokenize("mov  eax,[ebx]");
        let spans: Vec<_> = stream.iter().map(|t| (t.span.start, t.span.end, t.span.column)).collect();
        assert_eq!(
            spans,
            [(0, 3, 1), (5, 8, 6), (8, 9, 9), (9, 10, 10), (10, 13, 11), (13, 14, 14)]
        );
    }

    #[test]
    fn test_iterator_matches_scan() {
        let line = "rep movs dword ptr es:[edi], dword ptr ds:[esi]";
        let collected: TokenStream = Lexer::new(line).collect();
        assert_eq!(collected, tokenize(line));
    }

    #[test]
    fn test_previous_kind_tracks_output() {
        let mut lexer = Lexer::new("lock xadd");
        assert_eq!(lexer.previous_kind(), None);
        lexer.next_token();
        assert_eq!(lexer.previous_kind(), Some(TokenKind::Prefix));
        lexer.next_token();
        assert_eq!(lexer.previous_kind(), Some(TokenKind::Mnemonic));
        assert_eq!(lexer.next_token(), None);
        assert_eq!(lexer.position(), 9);
    }
}

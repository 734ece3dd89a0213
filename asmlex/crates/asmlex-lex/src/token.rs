//! Token type definitions.
//!
//! A [`Token`] is a classified lexeme: a [`TokenKind`] plus a copy of the
//! lexeme text and its [`Span`] in the line. A [`TokenStream`] is the
//! ordered result of lexing one line.

use std::fmt;
use std::ops::Index;

use asmlex_util::Span;

/// The kind of a token.
///
/// The discriminants are stable and appear in rendered output, so new kinds
/// must only ever be appended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// A bare word that is neither in a vocabulary nor in mnemonic position.
    Unknown = 0,
    /// Instruction prefix: `lock`, `rep`, `repne`, `repe`, `repz`.
    Prefix = 1,
    /// The operation word of an instruction.
    Mnemonic = 2,
    /// A 32-bit general purpose register.
    Register = 3,
    /// `,`
    Comma = 4,
    /// Memory-size specifier: `byte`, `word`, `dword`, `qword`.
    MemSize = 5,
    /// The literal `ptr`.
    Ptr = 6,
    /// Segment register name.
    Segment = 7,
    /// `[`
    MemOpen = 8,
    /// `]`
    MemClose = 9,
    /// `:`
    Colon = 10,
    /// `+`
    Plus = 11,
    /// `-`
    Minus = 12,
    /// `*`
    Mult = 13,
}

impl TokenKind {
    /// All kinds, ordered by code.
    pub const ALL: [TokenKind; 14] = [
        TokenKind::Unknown,
        TokenKind::Prefix,
        TokenKind::Mnemonic,
        TokenKind::Register,
        TokenKind::Comma,
        TokenKind::MemSize,
        TokenKind::Ptr,
        TokenKind::Segment,
        TokenKind::MemOpen,
        TokenKind::MemClose,
        TokenKind::Colon,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Mult,
    ];

    /// Returns the stable numeric code of this kind.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Looks a kind up by its numeric code.
    ///
    /// # Example
    ///
    /// ```
    /// use asmlex_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_code(3), Some(TokenKind::Register));
    /// assert_eq!(TokenKind::from_code(14), None);
    /// ```
    pub fn from_code(code: u8) -> Option<TokenKind> {
        Self::ALL.get(code as usize).copied()
    }

    /// Returns the name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Unknown => "Unknown",
            TokenKind::Prefix => "Prefix",
            TokenKind::Mnemonic => "Mnemonic",
            TokenKind::Register => "Register",
            TokenKind::Comma => "Comma",
            TokenKind::MemSize => "MemSize",
            TokenKind::Ptr => "Ptr",
            TokenKind::Segment => "Segment",
            TokenKind::MemOpen => "MemOpen",
            TokenKind::MemClose => "MemClose",
            TokenKind::Colon => "Colon",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Mult => "Mult",
        }
    }

    /// Maps a punctuation character to its kind.
    ///
    /// Punctuation kind depends only on the character, never on context.
    ///
    /// # Example
    ///
    /// ```
    /// use asmlex_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::punctuation('['), Some(TokenKind::MemOpen));
    /// assert_eq!(TokenKind::punctuation('.'), None);
    /// ```
    #[inline]
    pub fn punctuation(c: char) -> Option<TokenKind> {
        match c {
            ',' => Some(TokenKind::Comma),
            ':' => Some(TokenKind::Colon),
            '[' => Some(TokenKind::MemOpen),
            ']' => Some(TokenKind::MemClose),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Mult),
            _ => None,
        }
    }

    /// Returns the character of a punctuation kind, `None` for word kinds.
    pub fn punctuation_char(self) -> Option<char> {
        match self {
            TokenKind::Comma => Some(','),
            TokenKind::Colon => Some(':'),
            TokenKind::MemOpen => Some('['),
            TokenKind::MemClose => Some(']'),
            TokenKind::Plus => Some('+'),
            TokenKind::Minus => Some('-'),
            TokenKind::Mult => Some('*'),
            _ => None,
        }
    }

    /// Returns true for kinds produced directly by the scanner.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        self.punctuation_char().is_some()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// The text is an owned copy, so a token outlives the line it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token classification.
    pub kind: TokenKind,
    /// Lexeme text, never empty.
    pub text: String,
    /// Location of the lexeme in the line.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns the token text as a `&str`.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Renders `Kind(text)` for words and `Kind` for punctuation.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_punctuation() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}({})", self.kind, self.text)
        }
    }
}

/// The tokens of one line, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Creates an empty stream with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Appends a token.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the stream has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Returns the kind of the last token, `None` for an empty stream.
    pub fn last_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|t| t.kind)
    }

    /// Iterates over the token kinds.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|t| t.kind)
    }

    /// Returns the tokens as a slice.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the stream, returning the tokens.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    /// Renders the stream back into instruction text.
    ///
    /// Words are separated by one space, a comma is followed by one space,
    /// and other punctuation is written adjacent to its neighbours.
    /// Punctuation is written as its kind's character. Lexing the result
    /// yields the same kinds again.
    ///
    /// # Example
    ///
    /// ```
    /// use asmlex_lex::tokenize;
    ///
    /// let stream = tokenize("lock  mov eax ,dword ptr ds : [ ebx ]");
    /// assert_eq!(stream.render(), "lock mov eax, dword ptr ds:[ebx]");
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut previous: Option<TokenKind> = None;

        for token in &self.tokens {
            let needs_space = match previous {
                Some(TokenKind::Comma) => true,
                Some(prev) => !prev.is_punctuation() && !token.kind.is_punctuation(),
                None => false,
            };
            if needs_space {
                out.push(' ');
            }
            match token.kind.punctuation_char() {
                Some(c) => out.push(c),
                None => out.push_str(&token.text),
            }
            previous = Some(token.kind);
        }

        out
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

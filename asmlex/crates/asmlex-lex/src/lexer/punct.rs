//! Punctuation lexing.
//!
//! Handles the single-character tokens `, : [ ] + - *`. Their kind comes
//! from the character alone and never goes through classification.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the punctuation character under the cursor as `kind`.
    pub(crate) fn lex_punct(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();

        let text = match kind {
            TokenKind::Minus if self.options.legacy_minus_text => "+",
            _ => self.cursor.slice_from(self.token_start),
        };

        Token::new(kind, text, self.token_span())
    }
}

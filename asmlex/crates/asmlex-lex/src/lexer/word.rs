//! Bare-word lexing.
//!
//! A word runs until a blank, a punctuation character or the end of the
//! line. Everything else, including digits, dots, `\n` and non-ASCII
//! characters, belongs to the word.

use crate::classify::classify;
use crate::cursor::is_blank;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Returns true if `c` ends a word.
#[inline]
fn ends_word(c: char) -> bool {
    is_blank(c) || TokenKind::punctuation(c).is_some()
}

impl<'a> Lexer<'a> {
    /// Lexes and classifies the word starting at the cursor.
    pub(crate) fn lex_word(&mut self) -> Token {
        self.cursor.eat_while(|c| !ends_word(c));

        let text = self.cursor.slice_from(self.token_start);
        let kind = classify(text, self.previous);

        Token::new(kind, text, self.token_span())
    }
}

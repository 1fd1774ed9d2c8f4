//! Number literal scanning.
//!
//! Only decimal literals are supported, with at most one embedded `.`; the
//! textual form is preserved verbatim so the emitter can pick `int` vs.
//! `double` by inspecting the text rather than re-deriving a numeric value.

use zenc_util::Symbol;

use crate::lexer::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number(&mut self) -> Token {
        let start = self.token_start();
        while self.cursor().current_char().is_ascii_digit() {
            self.cursor_mut().advance();
        }

        if self.cursor().current_char() == '.' && self.cursor().peek_char(1).is_ascii_digit() {
            self.cursor_mut().advance(); // consume '.'
            while self.cursor().current_char().is_ascii_digit() {
                self.cursor_mut().advance();
            }
        }

        let text = self.cursor().slice_from(start);
        self.make_token(TokenKind::Number(Symbol::intern(text)))
    }
}

/// True if a previously-scanned number literal's text denotes a floating
/// point value (contains a decimal point).
pub fn is_float_literal(text: &str) -> bool {
    text.contains('.')
}

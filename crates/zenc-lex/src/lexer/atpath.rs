//! Lexing of `@`-rooted module paths such as `@std.io.println`.

use zenc_util::Symbol;

use crate::lexer::core::Lexer;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_continue;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_at_path(&mut self) -> Token {
        self.cursor_mut().advance(); // '@'
        let start = self.cursor().position();

        loop {
            while is_ident_continue(self.cursor().current_char()) {
                self.cursor_mut().advance();
            }
            if self.cursor().current_char() == '.'
                && is_ident_continue(self.cursor().peek_char(1))
            {
                self.cursor_mut().advance();
            } else {
                break;
            }
        }

        let path = self.cursor().slice_from(start);
        self.make_token(TokenKind::AtPath(Symbol::intern(path)))
    }
}

//! Identifier and keyword scanning.

use zenc_util::Symbol;

use crate::lexer::core::Lexer;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_continue;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let start = self.token_start();
        while is_ident_continue(self.cursor().current_char()) {
            self.cursor_mut().advance();
        }
        let text = self.cursor().slice_from(start);
        let kind = TokenKind::keyword_from_ident(text)
            .unwrap_or_else(|| TokenKind::Ident(Symbol::intern(text)));
        self.make_token(kind)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::core::Lexer;
    use crate::token::TokenKind;
    use zenc_util::Handler;

    fn lex_one(source: &str) -> TokenKind {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        lexer.next_token().kind
    }

    #[test]
    fn plain_identifier() {
        assert!(matches!(lex_one("counter"), TokenKind::Ident(_)));
    }

    #[test]
    fn keyword_return() {
        assert_eq!(lex_one("return"), TokenKind::Return);
    }

    #[test]
    fn keyword_loop() {
        assert_eq!(lex_one("loop"), TokenKind::Loop);
    }

    #[test]
    fn constructor_some() {
        assert_eq!(lex_one("Some"), TokenKind::Some_);
    }

    #[test]
    fn constructor_ok_and_err() {
        assert_eq!(lex_one("Ok"), TokenKind::Ok_);
        assert_eq!(lex_one("Err"), TokenKind::Err_);
    }

    #[test]
    fn booleans() {
        assert_eq!(lex_one("true"), TokenKind::True);
        assert_eq!(lex_one("false"), TokenKind::False);
    }
}

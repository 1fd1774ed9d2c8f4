//! Pattern parsing for match arms: identifier, boolean literal, wildcard.

use zenc_lex::TokenKind;

use crate::ast::Pattern;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_pattern_primary(&mut self) -> Option<Pattern> {
        match self.current() {
            TokenKind::Underscore => {
                self.advance();
                Some(Pattern::Wildcard)
            }
            TokenKind::True => {
                self.advance();
                Some(Pattern::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Some(Pattern::Bool(false))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Some(Pattern::Ident(name))
            }
            _ => {
                self.error(format!("expected a pattern, found {:?}", self.current()));
                None
            }
        }
    }
}

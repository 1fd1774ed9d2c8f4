//! Character-level lexer for Zen source.
//!
//! Turns a source string into a finite token stream, skipping whitespace and
//! `//` line comments, and disambiguating multi-character operators by
//! longest match (`lexer::core` always tries the longer form before falling
//! back to the shorter one).

pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use zenc_util::Handler;

    proptest! {
        /// Property 1 (lexer round-trip): for source built only from
        /// whitespace-separated identifiers and integer literals, the
        /// concatenation of token payloads equals the input with whitespace
        /// removed.
        #[test]
        fn round_trips_identifiers_and_integers(
            words in prop::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,6}|[0-9]{1,6}", 1..8)
        ) {
            let source = words.join(" ");
            let handler = Handler::new();
            let mut lexer = Lexer::new(&source, &handler);
            let mut rebuilt = String::new();
            loop {
                let token = lexer.next_token();
                match token.kind {
                    TokenKind::Eof => break,
                    TokenKind::Ident(sym) => rebuilt.push_str(sym.as_str()),
                    TokenKind::Number(sym) => rebuilt.push_str(sym.as_str()),
                    TokenKind::True => rebuilt.push_str("true"),
                    TokenKind::False => rebuilt.push_str("false"),
                    TokenKind::Some_ => rebuilt.push_str("Some"),
                    TokenKind::None_ => rebuilt.push_str("None"),
                    TokenKind::Ok_ => rebuilt.push_str("Ok"),
                    TokenKind::Err_ => rebuilt.push_str("Err"),
                    TokenKind::Return => rebuilt.push_str("return"),
                    TokenKind::Break => rebuilt.push_str("break"),
                    TokenKind::Continue => rebuilt.push_str("continue"),
                    TokenKind::Loop => rebuilt.push_str("loop"),
                    other => panic!("unexpected token kind in round-trip input: {other:?}"),
                }
            }
            prop_assert_eq!(rebuilt, words.concat());
            prop_assert!(!handler.has_errors());
        }
    }
}

//! Main lexer dispatch loop.

use tracing::debug;
use zenc_util::diagnostic::DiagnosticBuilder;
use zenc_util::{Handler, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_start;

/// Scans a source string into a token stream, reporting lexical errors
/// through a [`Handler`] rather than failing outright.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    handler: &'a Handler,
    token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        debug!(bytes = source.len(), "lexing source");
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Produces the next token, skipping whitespace and line comments first.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '/' {
                self.skip_line_comment();
                continue;
            }
            break;
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.make(TokenKind::Eof);
        }

        let kind = match self.cursor.current_char() {
            '(' => { self.cursor.advance(); TokenKind::LParen }
            ')' => { self.cursor.advance(); TokenKind::RParen }
            '{' => { self.cursor.advance(); TokenKind::LBrace }
            '}' => { self.cursor.advance(); TokenKind::RBrace }
            '[' => { self.cursor.advance(); TokenKind::LBracket }
            ']' => { self.cursor.advance(); TokenKind::RBracket }
            ',' => { self.cursor.advance(); TokenKind::Comma }
            ';' => { self.cursor.advance(); TokenKind::Semicolon }
            '?' => { self.cursor.advance(); TokenKind::Question }
            '|' => { self.cursor.advance(); TokenKind::Pipe }
            '+' => { self.cursor.advance(); TokenKind::Plus }
            '*' => { self.cursor.advance(); TokenKind::Star }
            '/' => { self.cursor.advance(); TokenKind::Slash }
            '%' => { self.cursor.advance(); TokenKind::Percent }
            '-' => self.lex_minus(),
            '.' => self.lex_dot(),
            ':' => self.lex_colon(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '@' => return self.lex_at_path(),
            '"' => return self.lex_string(),
            '_' if !crate::unicode::is_ident_continue(self.cursor.peek_char(1)) => {
                self.cursor.advance();
                TokenKind::Underscore
            }
            c if is_ident_start(c) => return self.lex_identifier(),
            c if c.is_ascii_digit() => return self.lex_number(),
            c => {
                self.cursor.advance();
                self.report_error(format!("unexpected character '{c}'"));
                TokenKind::Invalid(c)
            }
        };

        self.make(kind)
    }

    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    fn lex_minus(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('>') {
            TokenKind::Arrow
        } else {
            TokenKind::Minus
        }
    }

    fn lex_dot(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('.') {
            TokenKind::DotDot
        } else {
            TokenKind::Dot
        }
    }

    fn lex_colon(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char(':') {
            if self.cursor.match_char('=') {
                TokenKind::ColonColonEq
            } else {
                TokenKind::ColonColon
            }
        } else {
            TokenKind::Colon
        }
    }

    fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::EqEq
        } else {
            TokenKind::Eq
        }
    }

    fn lex_bang(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::NotEq
        } else {
            self.report_error("'!' is only valid as part of '!='".to_string());
            TokenKind::Invalid('!')
        }
    }

    fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::LtEq
        } else {
            TokenKind::Lt
        }
    }

    fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::GtEq
        } else {
            TokenKind::Gt
        }
    }

    fn make(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_start_line, self.token_start_column)
    }

    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        self.make(kind)
    }

    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    pub(crate) fn report_error(&mut self, message: String) {
        DiagnosticBuilder::error(message)
            .span(self.token_span())
            .emit(self.handler);
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub(crate) fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    pub(crate) fn token_start(&self) -> usize {
        self.token_start
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        let mut kinds = Vec::new();
        loop {
            let tok = lexer.next_token();
            if tok.kind == TokenKind::Eof {
                break;
            }
            kinds.push(tok.kind);
        }
        kinds
    }

    #[test]
    fn skips_whitespace_and_line_comments() {
        let kinds = lex_all("  // a comment\n  (  )  ");
        assert_eq!(kinds, vec![TokenKind::LParen, TokenKind::RParen]);
    }

    #[test]
    fn longest_match_colon_colon_eq() {
        let kinds = lex_all("::=");
        assert_eq!(kinds, vec![TokenKind::ColonColonEq]);
    }

    #[test]
    fn longest_match_does_not_split_eq_eq() {
        let kinds = lex_all("==");
        assert_eq!(kinds, vec![TokenKind::EqEq]);
    }

    #[test]
    fn arrow_is_one_token() {
        let kinds = lex_all("->");
        assert_eq!(kinds, vec![TokenKind::Arrow]);
    }

    #[test]
    fn unknown_character_reports_and_continues() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("$ x", &handler);
        let first = lexer.next_token();
        assert!(matches!(first.kind, TokenKind::Invalid('$')));
        assert!(handler.has_errors());
        let second = lexer.next_token();
        assert!(matches!(second.kind, TokenKind::Ident(_)));
    }
}

//! Token kinds produced by the lexer.

use zenc_util::Symbol;

/// A lexical token together with its source position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }
}

/// The closed set of lexical categories. See the data model section of the
/// design notes for the grammar these are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    Eof,

    Ident(Symbol),
    /// Textual form of a number literal, preserved verbatim so the emitter
    /// can tell `10` from `10.0` by inspecting the text for a `.`.
    Number(Symbol),
    /// Decoded string contents (escapes already resolved).
    String(Symbol),
    True,
    False,

    Some_,
    None_,
    Ok_,
    Err_,

    Return,
    Break,
    Continue,
    Loop,

    Underscore,

    /// `@path.to.thing`, payload is the path without the leading `@`.
    AtPath(Symbol),

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Dot,
    Colon,
    Question,
    Pipe,

    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    ColonColon,
    ColonColonEq,
    DotDot,
    Arrow,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    /// A single unrecognized character, reported through the diagnostic
    /// handler and otherwise skipped.
    Invalid(char),
}

impl TokenKind {
    /// Resolve identifier text to a specialized keyword/constructor kind,
    /// or `None` if it is an ordinary identifier.
    pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
        Some(match text {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "Some" => TokenKind::Some_,
            "None" => TokenKind::None_,
            "Ok" => TokenKind::Ok_,
            "Err" => TokenKind::Err_,
            "return" => TokenKind::Return,
            "break" => TokenKind::Break,
            "continue" => TokenKind::Continue,
            "loop" => TokenKind::Loop,
            _ => return None,
        })
    }
}

//! Parser core: token cursor, scope tracking, and error recovery.

use rustc_hash::FxHashSet;
use zenc_lex::{Token, TokenKind};
use zenc_util::diagnostic::DiagnosticBuilder;
use zenc_util::{Handler, Span};

/// Statements a single block may contain before parsing gives up and closes
/// it, so a pathological or malformed input cannot hang the parser.
pub const MAX_STATEMENTS_PER_BLOCK: usize = 10_000;

/// Recursive-descent parser over a fully-materialized token vector.
///
/// Tokens are collected up front (the lexer has already run to completion)
/// rather than pulled lazily, since the pipeline is single-pass and
/// sequential end to end (see the concurrency notes) and a materialized
/// vector makes lookahead and error-position bookkeeping simpler.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    handler: &'a Handler,
    /// One symbol set per lexically enclosing block, innermost last. Used to
    /// resolve the `name = value` declaration/assignment ambiguity.
    scopes: Vec<FxHashSet<zenc_util::Symbol>>,
    /// Suppresses treating `ident {` as a struct literal while parsing a
    /// position where `{` instead opens a block (e.g. a `loop` condition).
    forbid_struct_lit: bool,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, handler: &'a Handler) -> Self {
        Self {
            tokens,
            pos: 0,
            handler,
            scopes: vec![FxHashSet::default()],
            forbid_struct_lit: false,
        }
    }

    pub(crate) fn current(&self) -> TokenKind {
        self.tokens
            .get(self.pos)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    pub(crate) fn peek_kind(&self, ahead: usize) -> TokenKind {
        self.tokens
            .get(self.pos + ahead)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    pub(crate) fn current_span(&self) -> Span {
        match self.tokens.get(self.pos) {
            Some(t) => Span::point(t.line, t.column),
            None => Span::point(0, 0),
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.current(), TokenKind::Eof)
    }

    pub(crate) fn advance(&mut self) -> TokenKind {
        let kind = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        kind
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current()) == std::mem::discriminant(kind)
    }

    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the expected token kind or reports an error and leaves the
    /// cursor in place so the caller can attempt recovery.
    pub(crate) fn expect(&mut self, kind: TokenKind, what: &str) -> bool {
        if self.check(&kind) {
            self.advance();
            true
        } else {
            self.error(format!("expected {what}, found {:?}", self.current()));
            false
        }
    }

    pub(crate) fn error(&mut self, message: String) {
        DiagnosticBuilder::error(message)
            .span(self.current_span())
            .emit(self.handler);
    }

    /// Advances past the current token to guarantee forward progress after
    /// an error, unless already at end of input.
    pub(crate) fn recover_one(&mut self) {
        if !self.is_at_end() {
            self.advance();
        }
    }

    pub(crate) fn push_scope(&mut self) {
        self.scopes.push(FxHashSet::default());
    }

    pub(crate) fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    pub(crate) fn bind(&mut self, name: zenc_util::Symbol) {
        if let Some(top) = self.scopes.last_mut() {
            top.insert(name);
        }
    }

    pub(crate) fn is_bound(&self, name: zenc_util::Symbol) -> bool {
        self.scopes.iter().rev().any(|scope| scope.contains(&name))
    }

    /// `true` only when parsing is inside a tracked block (i.e. not at the
    /// implicit outermost program scope), matching the fallback condition
    /// described in the design notes for the declaration/assignment
    /// ambiguity.
    pub(crate) fn scopes_available(&self) -> bool {
        !self.scopes.is_empty()
    }

    pub(crate) fn struct_lit_allowed(&self) -> bool {
        !self.forbid_struct_lit
    }

    /// Runs `f` with struct-literal parsing suppressed, restoring the prior
    /// setting afterward even if `f` returns `None` early.
    pub(crate) fn without_struct_lit<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let prev = self.forbid_struct_lit;
        self.forbid_struct_lit = true;
        let result = f(self);
        self.forbid_struct_lit = prev;
        result
    }
}

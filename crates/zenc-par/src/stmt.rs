//! Statement dispatch, block parsing, and the top-level program entry.
//!
//! The declaration/assignment ambiguity (`name = value`) is resolved by
//! threading lexical scope through statement parsing: a name already bound
//! in an enclosing scope makes `name = value` an assignment, otherwise it is
//! a declaration that binds `name`. See the design notes for why this
//! replaces the source language's original "does the RHS mention the name"
//! heuristic as the primary mechanism.

use zenc_lex::TokenKind;
use zenc_util::Symbol;

use crate::ast::{Block, Expr, FieldDecl, Param, Program, Stmt};
use crate::parser::MAX_STATEMENTS_PER_BLOCK;
use crate::Parser;

impl<'a> Parser<'a> {
    pub fn parse_program(mut self) -> Program {
        let mut items = Vec::new();
        while !self.is_at_end() {
            match self.parse_stmt() {
                Some(stmt) => items.push(stmt),
                None => self.recover_one(),
            }
        }
        Program { items }
    }

    /// Consumes a `;` if one is present. The source language is
    /// expression-oriented and, like most of that family, treats the
    /// semicolon as a statement *separator* rather than a terminator: the
    /// last statement in a block may omit it before the closing `}` (and
    /// likewise at end of input for a top-level statement).
    fn expect_semicolon(&mut self) -> bool {
        if self.match_token(&TokenKind::Semicolon) {
            true
        } else if self.check(&TokenKind::RBrace) || self.is_at_end() {
            true
        } else {
            self.error("expected ';'".to_string());
            self.recover_one();
            false
        }
    }

    pub(crate) fn parse_block(&mut self) -> Option<Block> {
        self.push_scope();
        let stmts = self.parse_block_stmts();
        self.pop_scope();
        stmts.map(|stmts| Block { stmts })
    }

    /// Parses `{ stmt* }` without touching scope — the caller owns the
    /// scope (used by function bodies so parameters and the body share one).
    fn parse_block_stmts(&mut self) -> Option<Vec<Stmt>> {
        self.expect(TokenKind::LBrace, "'{'");
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            if stmts.len() >= MAX_STATEMENTS_PER_BLOCK {
                self.error(format!(
                    "block exceeds the {MAX_STATEMENTS_PER_BLOCK}-statement limit"
                ));
                break;
            }
            match self.parse_stmt() {
                Some(stmt) => stmts.push(stmt),
                None => self.recover_one(),
            }
        }
        self.expect(TokenKind::RBrace, "'}'");
        Some(stmts)
    }

    fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.current() {
            TokenKind::Return => {
                self.advance();
                let expr = if self.check(&TokenKind::Semicolon) || self.check(&TokenKind::RBrace) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.expect_semicolon();
                Some(Stmt::Return(expr))
            }
            TokenKind::Break => {
                self.advance();
                self.expect_semicolon();
                Some(Stmt::Break)
            }
            TokenKind::Continue => {
                self.advance();
                self.expect_semicolon();
                Some(Stmt::Continue)
            }
            TokenKind::LBrace => self.parse_import_stmt(),
            TokenKind::Ident(_) => self.parse_ident_stmt(),
            _ => {
                let expr = self.parse_expr()?;
                self.finish_expr_stmt(expr)
            }
        }
    }

    /// `{ a, b } = @module;` — destructuring import.
    fn parse_import_stmt(&mut self) -> Option<Stmt> {
        self.expect(TokenKind::LBrace, "'{'");
        let mut names = Vec::new();
        if !self.check(&TokenKind::RBrace) {
            loop {
                match self.current() {
                    TokenKind::Ident(name) => {
                        self.advance();
                        names.push(name);
                    }
                    _ => {
                        self.error("expected an import name".to_string());
                        return None;
                    }
                }
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RBrace, "'}'");
        self.expect(TokenKind::Eq, "'='");
        let source = match self.current() {
            TokenKind::AtPath(sym) => {
                self.advance();
                sym
            }
            _ => {
                self.error("expected an '@module' import source".to_string());
                return None;
            }
        };
        self.expect_semicolon();
        Some(Stmt::Import { names, source })
    }

    fn finish_expr_stmt(&mut self, expr: Expr) -> Option<Stmt> {
        let stmt = if let Expr::Call { callee, mut args } = expr {
            let is_defer = matches!(callee.as_ref(), Expr::AtPath(sym) if sym.as_str() == "this.defer")
                && args.len() == 1;
            if is_defer {
                Stmt::Defer(args.pop().unwrap())
            } else {
                Stmt::Expr(Expr::Call { callee, args })
            }
        } else {
            Stmt::Expr(expr)
        };
        self.expect_semicolon();
        Some(stmt)
    }

    /// Dispatches on the token following a leading identifier, per the five
    /// statement forms an identifier can start.
    fn parse_ident_stmt(&mut self) -> Option<Stmt> {
        let name = match self.current() {
            TokenKind::Ident(name) => name,
            _ => unreachable!("parse_ident_stmt called without a leading identifier"),
        };

        match self.peek_kind(1) {
            TokenKind::Colon => {
                self.advance();
                self.advance();
                self.parse_colon_decl(name)
            }
            TokenKind::ColonColon => {
                self.advance();
                self.advance();
                self.parse_colon_colon_decl(name)
            }
            TokenKind::ColonColonEq => {
                self.advance();
                self.advance();
                self.parse_inferred_mut_decl(name)
            }
            TokenKind::Eq if matches!(self.peek_kind(2), TokenKind::LParen) => {
                self.advance();
                self.advance();
                self.parse_fn_decl(name)
            }
            TokenKind::Eq => {
                self.advance();
                self.parse_eq_decl_or_assign(name)
            }
            _ => {
                let expr = self.parse_expr()?;
                self.finish_expr_stmt(expr)
            }
        }
    }

    /// `name : type` — struct definition, enum definition, or a typed
    /// variable declaration, disambiguated by what follows the colon.
    ///
    /// A bare `{` right after the colon (`Point: { x: f64, y: f64 }`) is a
    /// struct definition with no type word to read first. Otherwise an
    /// identifier is read as either the first enum variant (`|` follows it)
    /// or the declared type.
    fn parse_colon_decl(&mut self, name: Symbol) -> Option<Stmt> {
        if self.check(&TokenKind::LBrace) {
            return self.parse_struct_decl(name);
        }

        let type_word = match self.current() {
            TokenKind::Ident(word) => {
                self.advance();
                word
            }
            _ => {
                self.error("expected a type or '{' after ':'".to_string());
                return None;
            }
        };

        match self.current() {
            TokenKind::LBrace => self.parse_struct_decl(name),
            TokenKind::Pipe => self.parse_enum_decl(name, type_word),
            _ => {
                let init = if self.match_token(&TokenKind::Eq) {
                    Some(self.parse_expr()?)
                } else {
                    None
                };
                let forward_decl = init.is_none();
                self.bind(name);
                self.expect_semicolon();
                Some(Stmt::VarDecl {
                    name,
                    ty: Some(type_word),
                    init,
                    mutable: false,
                    forward_decl,
                })
            }
        }
    }

    fn parse_struct_decl(&mut self, name: Symbol) -> Option<Stmt> {
        self.expect(TokenKind::LBrace, "'{'");
        let mut fields = Vec::new();
        if !self.check(&TokenKind::RBrace) {
            loop {
                let field_name = match self.current() {
                    TokenKind::Ident(field_name) => {
                        self.advance();
                        field_name
                    }
                    _ => {
                        self.error("expected a field name".to_string());
                        return None;
                    }
                };
                self.expect(TokenKind::Colon, "':'");
                let ty = match self.current() {
                    TokenKind::Ident(ty) => {
                        self.advance();
                        ty
                    }
                    _ => {
                        self.error("expected a field type".to_string());
                        return None;
                    }
                };
                let default = if self.match_token(&TokenKind::Eq) {
                    Some(self.parse_expr()?)
                } else {
                    None
                };
                fields.push(FieldDecl {
                    name: field_name,
                    ty,
                    mutable: false,
                    default,
                });
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RBrace, "'}'");
        self.bind(name);
        Some(Stmt::StructDecl { name, fields })
    }

    fn parse_enum_decl(&mut self, name: Symbol, first_variant: Symbol) -> Option<Stmt> {
        let mut variants = vec![first_variant];
        while self.match_token(&TokenKind::Pipe) {
            match self.current() {
                TokenKind::Ident(variant) => {
                    self.advance();
                    variants.push(variant);
                }
                _ => {
                    self.error("expected an enum variant name after '|'".to_string());
                    return None;
                }
            }
        }
        self.bind(name);
        Some(Stmt::EnumDecl { name, variants })
    }

    /// `name :: [type] [= value]` — mutable declaration.
    fn parse_colon_colon_decl(&mut self, name: Symbol) -> Option<Stmt> {
        let ty = match self.current() {
            TokenKind::Ident(ty) => {
                self.advance();
                Some(ty)
            }
            _ => None,
        };
        let init = if self.match_token(&TokenKind::Eq) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let forward_decl = init.is_none();
        self.bind(name);
        self.expect_semicolon();
        Some(Stmt::VarDecl {
            name,
            ty,
            init,
            mutable: true,
            forward_decl,
        })
    }

    /// `name ::= value` — mutable declaration with an inferred type.
    fn parse_inferred_mut_decl(&mut self, name: Symbol) -> Option<Stmt> {
        let init = self.parse_expr()?;
        self.bind(name);
        self.expect_semicolon();
        Some(Stmt::VarDecl {
            name,
            ty: None,
            init: Some(init),
            mutable: true,
            forward_decl: false,
        })
    }

    /// `name = (...)` — function declaration. The `(` has already been
    /// confirmed by lookahead; `name` and `=` have just been consumed.
    fn parse_fn_decl(&mut self, name: Symbol) -> Option<Stmt> {
        self.expect(TokenKind::LParen, "'('");
        let mut params = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                let param_name = match self.current() {
                    TokenKind::Ident(param_name) => {
                        self.advance();
                        param_name
                    }
                    _ => {
                        self.error("expected a parameter name".to_string());
                        return None;
                    }
                };
                self.expect(TokenKind::Colon, "':'");
                let ty = match self.current() {
                    TokenKind::Ident(ty) => {
                        self.advance();
                        Some(ty)
                    }
                    _ => {
                        self.error("expected a parameter type".to_string());
                        None
                    }
                };
                params.push(Param {
                    name: param_name,
                    ty,
                    mutable: false,
                });
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "')'");

        // The return type follows either an explicit `->` or, in the
        // source language's own style, sits bare between `)` and the body
        // (`main = () void { ... }`). Accept both spellings.
        let ret_type = if self.match_token(&TokenKind::Arrow) {
            match self.current() {
                TokenKind::Ident(ty) => {
                    self.advance();
                    Some(ty)
                }
                _ => {
                    self.error("expected a return type after '->'".to_string());
                    None
                }
            }
        } else if let TokenKind::Ident(ty) = self.current() {
            self.advance();
            Some(ty)
        } else {
            None
        };

        self.bind(name);
        self.push_scope();
        for param in &params {
            self.bind(param.name);
        }
        let stmts = self.parse_block_stmts();
        self.pop_scope();

        Some(Stmt::FnDecl {
            name,
            params,
            ret_type,
            body: Block {
                stmts: stmts?,
            },
        })
    }

    /// `name = value` — ambiguous between an immutable declaration and an
    /// assignment to an existing binding, resolved by scope lookup. `name`
    /// has been consumed and `=` is current.
    fn parse_eq_decl_or_assign(&mut self, name: Symbol) -> Option<Stmt> {
        self.expect(TokenKind::Eq, "'='");
        let value = self.parse_expr()?;

        // Scope tracking is always populated (`Parser::new` seeds the
        // program-level scope), so this is the sole code path in practice;
        // `legacy_looks_like_assignment` documents the fallback the source
        // language originally used, kept only for completeness.
        let is_assignment = if self.scopes_available() {
            self.is_bound(name)
        } else {
            legacy_looks_like_assignment(name, &value)
        };

        self.expect_semicolon();

        if is_assignment {
            Some(Stmt::Assign { name, value })
        } else {
            self.bind(name);
            Some(Stmt::VarDecl {
                name,
                ty: None,
                init: Some(value),
                mutable: false,
                forward_decl: false,
            })
        }
    }
}

/// The source language's original heuristic: treat `name = value` as an
/// assignment only if `value` is a binary expression mentioning `name` on
/// either side. Superseded by scope tracking (see [`Parser::parse_eq_decl_or_assign`]);
/// retained as a fallback for the hypothetical case where no scope is
/// being tracked at all.
fn legacy_looks_like_assignment(name: Symbol, value: &Expr) -> bool {
    fn mentions(name: Symbol, expr: &Expr) -> bool {
        matches!(expr, Expr::Ident(n) if *n == name)
    }
    matches!(value, Expr::Binary { lhs, rhs, .. } if mentions(name, lhs) || mentions(name, rhs))
}

//! Expression parsing: Pratt binding powers for the binary levels, a
//! postfix chain for member/method/call access, and the primary forms.
//!
//! # Precedence (weakest first)
//!
//! | Level | Forms | Associativity |
//! |---|---|---|
//! | pattern match | postfix `?` after a comparison expression | n/a |
//! | equality/ordering | `==`, `!=`, `<`, `<=`, `>`, `>=` | left |
//! | additive | `+`, `-` | left |
//! | multiplicative | `*`, `/`, `%` | left |
//! | postfix | `.name`, `.name(args)`, `ident(args)` | left |
//! | primary | literals, identifiers, parens, ranges, `loop`, constructors | n/a |

use zenc_lex::TokenKind;

use crate::ast::{BinOp, Expr, MatchArm, StructFieldInit};
use crate::Parser;

/// Binding powers; higher binds tighter. Each left-associative level uses
/// `rbp = lbp + 1` so a chain like `a - b - c` associates left.
#[doc(hidden)]
pub mod bp {
    pub const MIN: u8 = 0;
    pub const EQUALITY: u8 = 2;
    pub const ADDITIVE: u8 = 4;
    pub const MULTIPLICATIVE: u8 = 6;
}

impl<'a> Parser<'a> {
    /// Entry point: a comparison expression optionally followed by a
    /// pattern match.
    pub fn parse_expr(&mut self) -> Option<Expr> {
        let scrutinee = self.parse_expr_bp(bp::MIN)?;
        if self.match_token(&TokenKind::Question) {
            self.parse_match_tail(scrutinee)
        } else {
            Some(scrutinee)
        }
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> Option<Expr> {
        let mut lhs = self.parse_postfix()?;

        loop {
            let (lbp, rbp, op) = match self.binop() {
                Some(triple) if triple.0 >= min_bp => triple,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_expr_bp(rbp)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Some(lhs)
    }

    fn binop(&self) -> Option<(u8, u8, BinOp)> {
        let op = match self.current() {
            TokenKind::EqEq => BinOp::Eq,
            TokenKind::NotEq => BinOp::Ne,
            TokenKind::Lt => BinOp::Lt,
            TokenKind::LtEq => BinOp::Le,
            TokenKind::Gt => BinOp::Gt,
            TokenKind::GtEq => BinOp::Ge,
            TokenKind::Plus => BinOp::Add,
            TokenKind::Minus => BinOp::Sub,
            TokenKind::Star => BinOp::Mul,
            TokenKind::Slash => BinOp::Div,
            TokenKind::Percent => BinOp::Mod,
            _ => return None,
        };
        let lbp = match op {
            BinOp::Eq | BinOp::Ne | BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => bp::EQUALITY,
            BinOp::Add | BinOp::Sub => bp::ADDITIVE,
            BinOp::Mul | BinOp::Div | BinOp::Mod => bp::MULTIPLICATIVE,
        };
        Some((lbp, lbp + 1, op))
    }

    fn parse_match_tail(&mut self, scrutinee: Expr) -> Option<Expr> {
        if self.check(&TokenKind::LBrace) {
            let body = self.parse_block()?;
            return Some(Expr::Match {
                scrutinee: Box::new(scrutinee),
                arms: vec![MatchArm {
                    pattern: None,
                    body,
                }],
            });
        }

        let mut arms = Vec::new();
        while self.match_token(&TokenKind::Pipe) {
            let pattern = self.parse_pattern_primary()?;
            let body = self.parse_block()?;
            arms.push(MatchArm {
                pattern: Some(pattern),
                body,
            });
        }
        if arms.is_empty() {
            self.error("expected '{' or '|' after pattern match scrutinee".to_string());
            return None;
        }
        Some(Expr::Match {
            scrutinee: Box::new(scrutinee),
            arms,
        })
    }

    fn parse_postfix(&mut self) -> Option<Expr> {
        let mut expr = self.parse_primary()?;

        loop {
            match self.current() {
                TokenKind::Dot => {
                    self.advance();
                    let name = match self.current() {
                        TokenKind::Ident(name) => {
                            self.advance();
                            name
                        }
                        _ => {
                            self.error("expected a member or method name after '.'".to_string());
                            return None;
                        }
                    };
                    if self.match_token(&TokenKind::LParen) {
                        let args = self.parse_call_args()?;
                        expr = Expr::MethodCall {
                            object: Box::new(expr),
                            name,
                            args,
                        };
                    } else {
                        expr = Expr::Member {
                            object: Box::new(expr),
                            name,
                        };
                    }
                }
                TokenKind::LParen => {
                    self.advance();
                    let args = self.parse_call_args()?;
                    expr = Expr::Call {
                        callee: Box::new(expr),
                        args,
                    };
                }
                _ => break,
            }
        }

        Some(expr)
    }

    /// Parses a comma-separated argument list; the opening paren has
    /// already been consumed.
    fn parse_call_args(&mut self) -> Option<Vec<Expr>> {
        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "')'");
        Some(args)
    }

    fn parse_primary(&mut self) -> Option<Expr> {
        match self.current() {
            TokenKind::Number(sym) => {
                self.advance();
                Some(Expr::Number(sym))
            }
            TokenKind::String(sym) => {
                self.advance();
                Some(Expr::Str(sym))
            }
            TokenKind::True => {
                self.advance();
                Some(Expr::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Some(Expr::Bool(false))
            }
            TokenKind::None_ => {
                self.advance();
                Some(Expr::NoneLit)
            }
            TokenKind::Some_ => {
                self.advance();
                self.expect(TokenKind::LParen, "'(' after 'Some'");
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'");
                Some(Expr::Some(Box::new(inner)))
            }
            TokenKind::Ok_ => {
                self.advance();
                self.expect(TokenKind::LParen, "'(' after 'Ok'");
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'");
                Some(Expr::Ok(Box::new(inner)))
            }
            TokenKind::Err_ => {
                self.advance();
                self.expect(TokenKind::LParen, "'(' after 'Err'");
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'");
                Some(Expr::Err(Box::new(inner)))
            }
            TokenKind::AtPath(sym) => {
                self.advance();
                Some(Expr::AtPath(sym))
            }
            TokenKind::Ident(name) => {
                self.advance();
                if self.struct_lit_allowed() && self.check(&TokenKind::LBrace) {
                    self.parse_struct_lit(name)
                } else {
                    Some(Expr::Ident(name))
                }
            }
            TokenKind::LParen => self.parse_paren_or_range(),
            TokenKind::Loop => self.parse_loop(),
            other => {
                self.error(format!("expected an expression, found {other:?}"));
                None
            }
        }
    }

    fn parse_struct_lit(&mut self, ty: zenc_util::Symbol) -> Option<Expr> {
        self.expect(TokenKind::LBrace, "'{'");
        let mut fields = Vec::new();
        if !self.check(&TokenKind::RBrace) {
            loop {
                let name = match self.current() {
                    TokenKind::Ident(name) => {
                        self.advance();
                        name
                    }
                    _ => {
                        self.error("expected a field name".to_string());
                        return None;
                    }
                };
                self.expect(TokenKind::Colon, "':'");
                let value = self.parse_expr()?;
                fields.push(StructFieldInit { name, value });
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RBrace, "'}'");
        Some(Expr::StructLit { ty, fields })
    }

    /// Parses a parenthesized expression, which may turn out to be a range
    /// `(a..b)` with an optional `.step(n)` suffix.
    fn parse_paren_or_range(&mut self) -> Option<Expr> {
        self.expect(TokenKind::LParen, "'('");
        let start = self.parse_expr()?;

        if self.match_token(&TokenKind::DotDot) {
            let end = self.parse_expr()?;
            self.expect(TokenKind::RParen, "')'");

            let step = if self.check(&TokenKind::Dot) && self.peek_is_step() {
                self.advance();
                self.advance();
                self.expect(TokenKind::LParen, "'(' after 'step'");
                let step_expr = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'");
                Some(Box::new(step_expr))
            } else {
                None
            };

            return Some(Expr::Range {
                start: Box::new(start),
                end: Box::new(end),
                step,
            });
        }

        self.expect(TokenKind::RParen, "')'");
        Some(start)
    }

    fn peek_is_step(&self) -> bool {
        matches!(self.peek_kind(1), TokenKind::Ident(name) if name.as_str() == "step")
    }

    fn parse_loop(&mut self) -> Option<Expr> {
        self.expect(TokenKind::Loop, "'loop'");
        let condition = if self.check(&TokenKind::LBrace) {
            None
        } else {
            Some(Box::new(
                self.without_struct_lit(|p| p.parse_expr_bp(bp::MIN))?,
            ))
        };
        let body = self.parse_block()?;
        Some(Expr::Loop { condition, body })
    }
}

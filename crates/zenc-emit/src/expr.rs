//! Expression-to-C-text translation. Pure and recursive: every `Expr`
//! maps to a self-contained C expression string, fully parenthesized so
//! nesting never needs the caller to reason about precedence.
//!
//! `Expr::Match` is deliberately absent here — a pattern match has no
//! single C expression equivalent (it expands to an if/else-if chain), so
//! it is handled at the statement level (see [`crate::stmt`]) rather than
//! through this function.

use zenc_par::{Block, Expr, Stmt, StructFieldInit};
use zenc_util::Symbol;

use crate::intrinsics::AliasTable;

/// Escapes `s` for placement inside a C string literal's quotes: backslash
/// and doubled quotes first (so the subsequent control-character escaping
/// doesn't double-escape them), then the common control characters.
pub fn escape_c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

pub struct ExprEmitter<'a> {
    pub aliases: &'a AliasTable,
}

impl<'a> ExprEmitter<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self { aliases }
    }

    pub fn emit(&self, expr: &Expr) -> String {
        match expr {
            Expr::Number(sym) => sym.as_str().to_string(),
            Expr::Str(sym) => format!("\"{}\"", escape_c_string(sym.as_str())),
            Expr::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            Expr::Some(inner) => format!(
                "(ZenOption){{ .is_some = true, .value = (long)({}) }}",
                self.emit(inner)
            ),
            Expr::NoneLit => "(ZenOption){ .is_some = false, .value = 0 }".to_string(),
            Expr::Ok(inner) => format!(
                "(ZenResult){{ .is_ok = true, .value = (long)({}) }}",
                self.emit(inner)
            ),
            Expr::Err(inner) => format!(
                "(ZenResult){{ .is_ok = false, .value = (long)({}) }}",
                self.emit(inner)
            ),
            Expr::Ident(sym) => sym.as_str().to_string(),
            Expr::AtPath(sym) => sym.as_str().replace('.', "_"),
            Expr::Binary { op, lhs, rhs } => {
                format!("({} {} {})", self.emit(lhs), op.as_c_str(), self.emit(rhs))
            }
            Expr::Member { object, name } => format!("{}.{}", self.emit(object), name.as_str()),
            Expr::Call { callee, args } => self.emit_call(callee, args),
            Expr::MethodCall { object, name, args } => self.emit_method_call(object, *name, args),
            Expr::StructLit { ty, fields } => self.emit_struct_lit(*ty, fields),
            Expr::Range { .. } => {
                // Only meaningful as the condition of a `loop`; reaching
                // here means a range was used as a plain value, which the
                // source language doesn't otherwise give meaning to.
                "/* unsupported: range used as a value */ 0".to_string()
            }
            Expr::Match { .. } => {
                unreachable!("Expr::Match is lowered at the statement level, not via emit()")
            }
            Expr::Loop { .. } => {
                unreachable!("Expr::Loop is lowered at the statement level, not via emit()")
            }
            Expr::Block(block) => self.emit_statement_expr(block),
        }
    }

    fn emit_call(&self, callee: &Expr, args: &[Expr]) -> String {
        if let Some(intrinsic) = crate::intrinsics::resolve_call_intrinsic(callee, self.aliases) {
            return self.emit_print_call(intrinsic, args);
        }
        match callee {
            Expr::AtPath(sym) if sym.as_str().starts_with("std.") => {
                let mangled = sym.as_str().replace('.', "_");
                format!(
                    "/* unresolved intrinsic: @{} */ {}({})",
                    sym.as_str(),
                    mangled,
                    self.emit_args(args)
                )
            }
            _ => format!("{}({})", self.emit(callee), self.emit_args(args)),
        }
    }

    fn emit_method_call(&self, object: &Expr, name: Symbol, args: &[Expr]) -> String {
        if let Some(intrinsic) =
            crate::intrinsics::resolve_method_intrinsic(object, name, self.aliases)
        {
            return self.emit_print_call(intrinsic, args);
        }
        // No user-defined method dispatch exists in the source language
        // (see the non-goals on generics/trait resolution); a method call
        // that isn't a std intrinsic is lowered UFCS-style, object first.
        let mut all_args = vec![self.emit(object)];
        all_args.extend(args.iter().map(|a| self.emit(a)));
        format!(
            "/* unresolved method call */ {}({})",
            name.as_str(),
            all_args.join(", ")
        )
    }

    fn emit_args(&self, args: &[Expr]) -> String {
        args.iter()
            .map(|a| self.emit(a))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn emit_struct_lit(&self, ty: Symbol, fields: &[StructFieldInit]) -> String {
        let body = fields
            .iter()
            .map(|f| format!(".{} = {}", f.name.as_str(), self.emit(&f.value)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("(struct {}){{{}}}", ty.as_str(), body)
    }

    /// `print`/`println` lowering: a format string assembled from the
    /// argument shapes, with literal string arguments folded directly into
    /// it and everything else passed positionally as `%d`/`%f`.
    fn emit_print_call(&self, intrinsic: crate::intrinsics::Intrinsic, args: &[Expr]) -> String {
        let mut format = String::new();
        let mut positional = Vec::new();

        for arg in args {
            match arg {
                Expr::Str(sym) => {
                    format.push_str(&escape_c_string(sym.as_str()).replace('%', "%%"));
                }
                Expr::Number(sym) if sym.as_str().contains('.') => {
                    format.push_str("%f");
                    positional.push(sym.as_str().to_string());
                }
                Expr::Number(sym) => {
                    format.push_str("%d");
                    positional.push(sym.as_str().to_string());
                }
                Expr::Ident(sym) => {
                    format.push_str("%d");
                    positional.push(sym.as_str().to_string());
                }
                other => {
                    format.push_str("%d");
                    positional.push(self.emit(other));
                }
            }
        }

        if matches!(intrinsic, crate::intrinsics::Intrinsic::Println) {
            format.push_str("\\n");
        }

        if positional.is_empty() {
            format!("printf(\"{format}\")")
        } else {
            format!("printf(\"{format}\", {})", positional.join(", "))
        }
    }

    /// A GNU statement-expression for the `Expr::Block` variant, which the
    /// parser never actually constructs (reserved for a future block
    /// expression form) but which the emitter still handles exhaustively.
    fn emit_statement_expr(&self, block: &Block) -> String {
        let inner = block
            .stmts
            .iter()
            .filter_map(|stmt| match stmt {
                Stmt::Expr(e) => Some(format!("{};", self.emit(e))),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" ");
        format!("({{ {inner} }})")
    }
}

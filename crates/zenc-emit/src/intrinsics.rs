//! Resolution of `@std` intrinsic calls.
//!
//! `std.io.println`/`std.io.print` can be reached three ways in source:
//! directly through an at-path (`@std.io.println(...)`), through an
//! imported module alias (`{ io } = @std;` then `io.println(...)`), or
//! through the common shorthand that imports the function name directly
//! (`{ println } = @std;` then `println(...)`). `@std` is the only
//! supported import source (see the design notes on intrinsic
//! resolution), so every alias this collects is implicitly rooted there.

use rustc_hash::FxHashMap;

use zenc_par::{Expr, Stmt};
use zenc_util::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intrinsic {
    Println,
    Print,
}

pub type AliasTable = FxHashMap<Symbol, String>;

/// Walks the whole program up front, before any emission, so a call can be
/// resolved against an import that appears later in the same block as well
/// as earlier — the alias table is fully built before it is ever queried.
pub fn collect_import_aliases(items: &[Stmt]) -> AliasTable {
    let mut aliases = AliasTable::default();
    collect_from_stmts(items, &mut aliases);
    aliases
}

fn collect_from_stmts(stmts: &[Stmt], aliases: &mut AliasTable) {
    for stmt in stmts {
        match stmt {
            Stmt::Import { names, source } => {
                for name in names {
                    let path = match name.as_str() {
                        "println" | "print" => {
                            format!("{}.io.{}", source.as_str(), name.as_str())
                        }
                        other => format!("{}.{}", source.as_str(), other),
                    };
                    aliases.insert(*name, path);
                }
            }
            Stmt::FnDecl { body, .. } => collect_from_stmts(&body.stmts, aliases),
            Stmt::VarDecl { init: Some(expr), .. } => collect_from_expr(expr, aliases),
            Stmt::Assign { value, .. } => collect_from_expr(value, aliases),
            Stmt::Return(Some(expr)) | Stmt::Defer(expr) | Stmt::Expr(expr) => {
                collect_from_expr(expr, aliases)
            }
            _ => {}
        }
    }
}

fn collect_from_expr(expr: &Expr, aliases: &mut AliasTable) {
    match expr {
        Expr::Loop { body, .. } => collect_from_stmts(&body.stmts, aliases),
        Expr::Block(block) => collect_from_stmts(&block.stmts, aliases),
        Expr::Match { arms, .. } => {
            for arm in arms {
                collect_from_stmts(&arm.body.stmts, aliases);
            }
        }
        _ => {}
    }
}

/// Resolves a direct call's callee (`println(...)`, `@std.io.println(...)`)
/// to a known intrinsic. `None` means an ordinary user-defined call.
pub fn resolve_call_intrinsic(callee: &Expr, aliases: &AliasTable) -> Option<Intrinsic> {
    match callee {
        Expr::AtPath(sym) => path_to_intrinsic(sym.as_str()),
        Expr::Ident(name) => aliases.get(name).and_then(|path| path_to_intrinsic(path)),
        _ => None,
    }
}

/// Resolves a method call (`object.name(args)`) to a known intrinsic when
/// `object` is (or aliases) the `std.io` module.
pub fn resolve_method_intrinsic(
    object: &Expr,
    name: Symbol,
    aliases: &AliasTable,
) -> Option<Intrinsic> {
    let object_path: String = match object {
        Expr::AtPath(sym) => sym.as_str().to_string(),
        Expr::Ident(sym) => aliases.get(sym)?.clone(),
        _ => return None,
    };
    path_to_intrinsic(&format!("{object_path}.{}", name.as_str()))
}

fn path_to_intrinsic(path: &str) -> Option<Intrinsic> {
    match path {
        "std.io.println" => Some(Intrinsic::Println),
        "std.io.print" => Some(Intrinsic::Print),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_direct_at_path() {
        let callee = Expr::AtPath(Symbol::intern("std.io.println"));
        let aliases = AliasTable::default();
        assert_eq!(
            resolve_call_intrinsic(&callee, &aliases),
            Some(Intrinsic::Println)
        );
    }

    #[test]
    fn resolves_imported_println_shorthand() {
        let import = Stmt::Import {
            names: vec![Symbol::intern("println")],
            source: Symbol::intern("std"),
        };
        let aliases = collect_import_aliases(std::slice::from_ref(&import));
        let callee = Expr::Ident(Symbol::intern("println"));
        assert_eq!(
            resolve_call_intrinsic(&callee, &aliases),
            Some(Intrinsic::Println)
        );
    }

    #[test]
    fn resolves_imported_module_alias_method_call() {
        let import = Stmt::Import {
            names: vec![Symbol::intern("io")],
            source: Symbol::intern("std"),
        };
        let aliases = collect_import_aliases(std::slice::from_ref(&import));
        let object = Expr::Ident(Symbol::intern("io"));
        assert_eq!(
            resolve_method_intrinsic(&object, Symbol::intern("println"), &aliases),
            Some(Intrinsic::Println)
        );
    }

    #[test]
    fn unrelated_call_does_not_resolve() {
        let callee = Expr::Ident(Symbol::intern("add"));
        let aliases = AliasTable::default();
        assert_eq!(resolve_call_intrinsic(&callee, &aliases), None);
    }
}

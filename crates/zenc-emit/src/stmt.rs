//! Statement-level emission: declarations, assignments, control flow, and
//! the two constructs that don't reduce to a single C expression —
//! `defer` and pattern match — handled here instead of in [`crate::expr`].

use zenc_par::{Block, Expr, FieldDecl, MatchArm, Param, Pattern, Program, Stmt};
use zenc_util::Symbol;

use crate::expr::ExprEmitter;
use crate::intrinsics::AliasTable;
use crate::types::{c_type_name, infer_type};
use crate::writer::Writer;

pub struct Emitter<'a> {
    out: Writer,
    aliases: &'a AliasTable,
    /// Disambiguates the internal counter of nested range loops, none of
    /// which are ever visible as a source-level binding (see the control
    /// flow design notes on range iteration).
    loop_depth: usize,
}

impl<'a> Emitter<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self {
            out: Writer::new(),
            aliases,
            loop_depth: 0,
        }
    }

    pub fn finish(self) -> String {
        self.out.finish()
    }

    fn expr(&self) -> ExprEmitter<'_> {
        ExprEmitter::new(self.aliases)
    }

    pub fn emit_program(&mut self, program: &Program) {
        self.emit_stmts_with_defer(&program.items);
    }

    /// Runs `stmts` as one lexical block, flushing whatever `defer`
    /// expressions have been registered so far immediately before every
    /// `return`/`break`/`continue` found directly in this list, and again
    /// for the implicit fall-through at the end. A `return`/`break`/
    /// `continue` nested in a deeper block has already flushed that
    /// block's own deferred list on its own way out, so it is not
    /// re-flushed here.
    fn emit_stmts_with_defer(&mut self, stmts: &[Stmt]) {
        let mut pending: Vec<&Expr> = Vec::new();
        for stmt in stmts {
            match stmt {
                Stmt::Defer(expr) => pending.push(expr),
                Stmt::Return(_) | Stmt::Break | Stmt::Continue => {
                    self.flush_defers(&pending);
                    pending.clear();
                    self.emit_stmt(stmt);
                }
                other => self.emit_stmt(other),
            }
        }
        self.flush_defers(&pending);
    }

    fn flush_defers(&mut self, pending: &[&Expr]) {
        for expr in pending.iter().rev() {
            let code = self.expr().emit(expr);
            self.out.line(format!("{code};"));
        }
    }

    fn emit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl {
                name,
                ty,
                init,
                mutable,
                forward_decl,
            } => self.emit_var_decl(*name, *ty, init.as_ref(), *mutable, *forward_decl),
            Stmt::Assign { name, value } => self.emit_assign(*name, value),
            Stmt::FnDecl {
                name,
                params,
                ret_type,
                body,
            } => self.emit_fn_decl(*name, params, *ret_type, body),
            Stmt::StructDecl { name, fields } => self.emit_struct_decl(*name, fields),
            Stmt::EnumDecl { name, variants } => self.emit_enum_decl(*name, variants),
            Stmt::Import { .. } => {
                // Compile-time only: resolved into the alias table up
                // front (see `crate::intrinsics::collect_import_aliases`)
                // and has no runtime representation in C.
            }
            Stmt::Return(value) => {
                let line = match value {
                    Some(expr) => format!("return {};", self.expr().emit(expr)),
                    None => "return;".to_string(),
                };
                self.out.line(line);
            }
            Stmt::Break => self.out.line("break;"),
            Stmt::Continue => self.out.line("continue;"),
            Stmt::Defer(_) => unreachable!("Stmt::Defer is intercepted by emit_stmts_with_defer"),
            Stmt::Expr(expr) => self.emit_expr_stmt(expr),
        }
    }

    fn emit_expr_stmt(&mut self, expr: &Expr) {
        match expr {
            Expr::Match { scrutinee, arms } => self.emit_match_discarding_value(scrutinee, arms),
            Expr::Loop { condition, body } => self.emit_loop(condition.as_deref(), body),
            other => {
                let code = self.expr().emit(other);
                self.out.line(format!("{code};"));
            }
        }
    }

    fn emit_var_decl(
        &mut self,
        name: Symbol,
        ty: Option<Symbol>,
        init: Option<&Expr>,
        mutable: bool,
        forward_decl: bool,
    ) {
        if forward_decl {
            let c_ty = ty.map(c_type_name).unwrap_or_else(|| "int".to_string());
            self.out.line(format!("{c_ty} {};", name.as_str()));
            return;
        }
        let init = init.expect("a non-forward-declaration always carries an initializer");

        if let Expr::Match { scrutinee, arms } = init {
            let c_ty = ty
                .map(c_type_name)
                .unwrap_or_else(|| infer_match_result_type(arms));
            self.out.line(format!("{c_ty} {};", name.as_str()));
            self.emit_match_into(scrutinee, arms, name);
            return;
        }

        let c_ty = ty.map(c_type_name).unwrap_or_else(|| infer_type(init));
        let prefix = if !mutable && c_ty != "const char*" {
            "const "
        } else {
            ""
        };
        let init_code = self.expr().emit(init);
        self.out
            .line(format!("{prefix}{c_ty} {} = {init_code};", name.as_str()));
    }

    fn emit_assign(&mut self, name: Symbol, value: &Expr) {
        if let Expr::Match { scrutinee, arms } = value {
            self.emit_match_into(scrutinee, arms, name);
            return;
        }
        let code = self.expr().emit(value);
        self.out.line(format!("{} = {code};", name.as_str()));
    }

    fn emit_fn_decl(
        &mut self,
        name: Symbol,
        params: &[Param],
        ret_type: Option<Symbol>,
        body: &Block,
    ) {
        let is_main = name.as_str() == "main";
        if is_main {
            self.out.line("int main(void) {");
        } else {
            let ret_c = ret_type.map(c_type_name).unwrap_or_else(|| "void".to_string());
            let params_c = if params.is_empty() {
                "void".to_string()
            } else {
                params
                    .iter()
                    .map(|p| {
                        let ty = p.ty.map(c_type_name).unwrap_or_else(|| "int".to_string());
                        format!("{ty} {}", p.name.as_str())
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            self.out.line(format!("{ret_c} {}({params_c}) {{", name.as_str()));
        }

        self.out.indent();
        let ends_with_return = matches!(body.stmts.last(), Some(Stmt::Return(_)));
        self.emit_stmts_with_defer(&body.stmts);
        if is_main && !ends_with_return {
            self.out.line("return 0;");
        }
        self.out.dedent();
        self.out.line("}");
    }

    fn emit_struct_decl(&mut self, name: Symbol, fields: &[FieldDecl]) {
        self.out.line(format!("typedef struct {} {{", name.as_str()));
        self.out.indent();
        for field in fields {
            let ty = c_type_name(field.ty);
            let mut line = format!("{ty} {};", field.name.as_str());
            if let Some(default) = &field.default {
                line.push_str(&format!(" // default: {}", self.expr().emit(default)));
            }
            self.out.line(line);
        }
        self.out.dedent();
        self.out.line(format!("}} {};", name.as_str()));
    }

    fn emit_enum_decl(&mut self, name: Symbol, variants: &[Symbol]) {
        self.out.line(format!("typedef enum {} {{", name.as_str()));
        self.out.indent();
        for variant in variants {
            self.out
                .line(format!("{}_{},", name.as_str(), variant.as_str()));
        }
        self.out.dedent();
        self.out.line(format!("}} {};", name.as_str()));
    }

    fn emit_loop(&mut self, condition: Option<&Expr>, body: &Block) {
        match condition {
            None => {
                self.out.line("while (1) {");
                self.emit_loop_body(body);
            }
            Some(Expr::Range { start, end, step }) => {
                self.emit_range_loop(start, end, step.as_deref(), body);
                return;
            }
            Some(cond) => {
                let code = self.expr().emit(cond);
                self.out.line(format!("while ({code}) {{"));
                self.emit_loop_body(body);
            }
        }
    }

    fn emit_loop_body(&mut self, body: &Block) {
        self.out.indent();
        self.emit_stmts_with_defer(&body.stmts);
        self.out.dedent();
        self.out.line("}");
    }

    /// `loop (start..end)` / `loop (start..end).step(n)` — a classical
    /// indexed `for` with an exclusive upper bound and an internal counter
    /// that the source language never exposes as a binding.
    fn emit_range_loop(&mut self, start: &Expr, end: &Expr, step: Option<&Expr>, body: &Block) {
        let counter = format!("__zen_i{}", self.loop_depth);
        self.loop_depth += 1;

        let start_code = self.expr().emit(start);
        let end_code = self.expr().emit(end);
        let advance = match step {
            Some(step_expr) => format!("{counter} += {}", self.expr().emit(step_expr)),
            None => format!("{counter}++"),
        };
        self.out.line(format!(
            "for (int {counter} = {start_code}; {counter} < {end_code}; {advance}) {{"
        ));
        self.emit_loop_body(body);

        self.loop_depth -= 1;
    }

    /// The truthy shorthand or a full pattern match used as a bare
    /// statement — its value, if any, is discarded.
    fn emit_match_discarding_value(&mut self, scrutinee: &Expr, arms: &[MatchArm]) {
        let scrutinee_code = self.expr().emit(scrutinee);
        for (i, arm) in arms.iter().enumerate() {
            self.emit_match_arm_header(i, &scrutinee_code, arm);
            self.out.indent();
            self.emit_stmts_with_defer(&arm.body.stmts);
            self.out.dedent();
            self.out.line("}");
        }
    }

    /// A pattern match used as the value of a declaration or assignment:
    /// each arm's trailing expression statement becomes an assignment to
    /// `target` instead of a discarded expression statement.
    fn emit_match_into(&mut self, scrutinee: &Expr, arms: &[MatchArm], target: Symbol) {
        let scrutinee_code = self.expr().emit(scrutinee);
        for (i, arm) in arms.iter().enumerate() {
            self.emit_match_arm_header(i, &scrutinee_code, arm);
            self.out.indent();
            self.emit_arm_body_as_value(&arm.body, target);
            self.out.dedent();
            self.out.line("}");
        }
    }

    fn emit_match_arm_header(&mut self, index: usize, scrutinee_code: &str, arm: &MatchArm) {
        let condition = match &arm.pattern {
            None => scrutinee_code.to_string(),
            Some(Pattern::Wildcard) => "true".to_string(),
            Some(Pattern::Bool(b)) => format!("{scrutinee_code} == {}", if *b { "true" } else { "false" }),
            Some(Pattern::Ident(sym)) => format!("{scrutinee_code} == {}", sym.as_str()),
        };
        let keyword = if index == 0 { "if" } else { "else if" };
        self.out.line(format!("{keyword} ({condition}) {{"));
    }

    fn emit_arm_body_as_value(&mut self, body: &Block, target: Symbol) {
        let mut pending: Vec<&Expr> = Vec::new();
        let last_index = body.stmts.len().checked_sub(1);
        for (i, stmt) in body.stmts.iter().enumerate() {
            match stmt {
                Stmt::Defer(expr) => pending.push(expr),
                Stmt::Return(_) | Stmt::Break | Stmt::Continue => {
                    self.flush_defers(&pending);
                    pending.clear();
                    self.emit_stmt(stmt);
                }
                Stmt::Expr(expr) if Some(i) == last_index => {
                    self.flush_defers(&pending);
                    pending.clear();
                    let code = self.expr().emit(expr);
                    self.out.line(format!("{} = {code};", target.as_str()));
                }
                other => self.emit_stmt(other),
            }
        }
        self.flush_defers(&pending);
    }
}

/// A match used as a value needs a declared type before its arms are
/// known; inferred from the first arm's trailing expression, mirroring
/// the declaration-omits-a-type rule used elsewhere.
fn infer_match_result_type(arms: &[MatchArm]) -> String {
    for arm in arms {
        if let Some(Stmt::Expr(expr)) = arm.body.stmts.last() {
            return infer_type(expr);
        }
    }
    "int".to_string()
}

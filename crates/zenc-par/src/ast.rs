//! The Zen abstract syntax tree.
//!
//! A tagged sum type per node family, owned strictly as a tree (`Box` where
//! recursion needs indirection) — no arena, no reference counting. See the
//! design notes on tree ownership for why: a program is acyclic by
//! construction, so plain ownership is sufficient and simplest.

use zenc_util::Symbol;

/// A whole compilation unit: a flat sequence of top-level declarations.
#[derive(Debug, Clone)]
pub struct Program {
    pub items: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinOp {
    /// The C operator spelling; identical to the source spelling for every
    /// operator Zen has.
    pub fn as_c_str(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Pattern {
    Wildcard,
    Ident(Symbol),
    Bool(bool),
}

#[derive(Debug, Clone)]
pub struct MatchArm {
    /// Absent only for the single-arm `expr ? { body }` shorthand.
    pub pattern: Option<Pattern>,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct StructFieldInit {
    pub name: Symbol,
    pub value: Expr,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Number(Symbol),
    Str(Symbol),
    Bool(bool),
    Some(Box<Expr>),
    NoneLit,
    Ok(Box<Expr>),
    Err(Box<Expr>),

    Ident(Symbol),
    /// `@std.io.println`-style path, already joined by the lexer.
    AtPath(Symbol),

    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Member {
        object: Box<Expr>,
        name: Symbol,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    MethodCall {
        object: Box<Expr>,
        name: Symbol,
        args: Vec<Expr>,
    },
    StructLit {
        ty: Symbol,
        fields: Vec<StructFieldInit>,
    },
    Range {
        start: Box<Expr>,
        end: Box<Expr>,
        step: Option<Box<Expr>>,
    },
    Match {
        scrutinee: Box<Expr>,
        arms: Vec<MatchArm>,
    },
    Loop {
        condition: Option<Box<Expr>>,
        body: Block,
    },
    Block(Block),
}

#[derive(Debug, Clone)]
pub struct Param {
    pub name: Symbol,
    pub ty: Option<Symbol>,
    pub mutable: bool,
}

#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub name: Symbol,
    pub ty: Symbol,
    pub mutable: bool,
    pub default: Option<Expr>,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    VarDecl {
        name: Symbol,
        ty: Option<Symbol>,
        init: Option<Expr>,
        mutable: bool,
        /// `true` for a declaration with no initializer (`x :: i32;`).
        forward_decl: bool,
    },
    Assign {
        name: Symbol,
        value: Expr,
    },
    FnDecl {
        name: Symbol,
        params: Vec<Param>,
        ret_type: Option<Symbol>,
        body: Block,
    },
    StructDecl {
        name: Symbol,
        fields: Vec<FieldDecl>,
    },
    EnumDecl {
        name: Symbol,
        variants: Vec<Symbol>,
    },
    Import {
        names: Vec<Symbol>,
        source: Symbol,
    },
    Return(Option<Expr>),
    Break,
    Continue,
    Defer(Expr),
    Expr(Expr),
}

//! Recursive-descent parser for Zen source, building the AST defined in
//! [`ast`] from a [`zenc_lex::Lexer`] token stream. Expression precedence is
//! handled with Pratt binding powers (see [`expr::bp`]); statement dispatch
//! resolves the `name = value` declaration/assignment ambiguity by tracking
//! lexical scope (see [`stmt`]).

pub mod ast;
mod expr;
mod parser;
mod pattern;
mod stmt;

pub use ast::*;
pub use parser::Parser;

use tracing::debug;
use zenc_lex::{Lexer, TokenKind};
use zenc_util::Handler;

/// Lexes `source` to completion and parses the resulting tokens into a
/// [`Program`]. Lexical and syntactic errors are reported through `handler`
/// rather than returned — see the error handling design notes.
pub fn parse_program(source: &str, handler: &Handler) -> Program {
    let mut lexer = Lexer::new(source, handler);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_eof = matches!(token.kind, TokenKind::Eof);
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    debug!(tokens = tokens.len(), "lexed token stream");

    let program = Parser::new(tokens, handler).parse_program();
    debug!(items = program.items.len(), "parsed program");
    program
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> (Program, Handler) {
        let handler = Handler::new();
        let program = parse_program(source, &handler);
        (program, handler)
    }

    #[test]
    fn parses_immutable_declaration() {
        let (program, handler) = parse("x = 5;");
        assert!(!handler.has_errors());
        assert_eq!(program.items.len(), 1);
        assert!(matches!(
            &program.items[0],
            Stmt::VarDecl { mutable: false, forward_decl: false, .. }
        ));
    }

    #[test]
    fn second_assignment_to_same_name_is_an_assignment() {
        let (program, handler) = parse("x = 5; x = 6;");
        assert!(!handler.has_errors());
        assert_eq!(program.items.len(), 2);
        assert!(matches!(program.items[0], Stmt::VarDecl { .. }));
        assert!(matches!(program.items[1], Stmt::Assign { .. }));
    }

    #[test]
    fn parses_mutable_inferred_declaration() {
        let (program, handler) = parse("count ::= 0;");
        assert!(!handler.has_errors());
        assert!(matches!(
            &program.items[0],
            Stmt::VarDecl { mutable: true, ty: None, .. }
        ));
    }

    #[test]
    fn parses_typed_forward_declaration() {
        let (program, handler) = parse("x: i32;");
        assert!(!handler.has_errors());
        assert!(matches!(
            &program.items[0],
            Stmt::VarDecl { forward_decl: true, init: None, .. }
        ));
    }

    #[test]
    fn parses_struct_declaration() {
        let (program, handler) = parse("Point: { x: f64, y: f64 }");
        assert!(!handler.has_errors());
        match &program.items[0] {
            Stmt::StructDecl { fields, .. } => assert_eq!(fields.len(), 2),
            other => panic!("expected a struct declaration, got {other:?}"),
        }
    }

    #[test]
    fn parses_struct_declaration_with_a_type_word_before_the_brace() {
        let (program, handler) = parse("Point: struct { x: f64, y: f64 }");
        assert!(!handler.has_errors());
        match &program.items[0] {
            Stmt::StructDecl { fields, .. } => assert_eq!(fields.len(), 2),
            other => panic!("expected a struct declaration, got {other:?}"),
        }
    }

    #[test]
    fn parses_enum_declaration() {
        let (program, handler) = parse("Color: Red | Green | Blue");
        assert!(!handler.has_errors());
        match &program.items[0] {
            Stmt::EnumDecl { variants, .. } => assert_eq!(variants.len(), 3),
            other => panic!("expected an enum declaration, got {other:?}"),
        }
    }

    #[test]
    fn parses_function_declaration() {
        let (program, handler) = parse("add = (a: i32, b: i32) -> i32 { return a + b; }");
        assert!(!handler.has_errors());
        match &program.items[0] {
            Stmt::FnDecl { params, ret_type, body, .. } => {
                assert_eq!(params.len(), 2);
                assert!(ret_type.is_some());
                assert_eq!(body.stmts.len(), 1);
            }
            other => panic!("expected a function declaration, got {other:?}"),
        }
    }

    #[test]
    fn operator_precedence_multiplies_before_adding() {
        let (program, handler) = parse("x ::= 2 + 3 * 4;");
        assert!(!handler.has_errors());
        match &program.items[0] {
            Stmt::VarDecl { init: Some(Expr::Binary { op: BinOp::Add, rhs, .. }), .. } => {
                assert!(matches!(rhs.as_ref(), Expr::Binary { op: BinOp::Mul, .. }));
            }
            other => panic!("expected additive root, got {other:?}"),
        }
    }

    #[test]
    fn parses_pattern_match_with_arms() {
        let source = "x ::= 0; y ::= x ? | true { 1 } | _ { 2 };";
        let (program, handler) = parse(source);
        assert!(!handler.has_errors());
        match &program.items[1] {
            Stmt::VarDecl { init: Some(Expr::Match { arms, .. }), .. } => {
                assert_eq!(arms.len(), 2);
            }
            other => panic!("expected a match expression, got {other:?}"),
        }
    }

    #[test]
    fn parses_truthy_match_shorthand() {
        let (program, handler) = parse("flag ::= true; flag ? { return; };");
        assert!(!handler.has_errors());
        match &program.items[1] {
            Stmt::Expr(Expr::Match { arms, .. }) => {
                assert_eq!(arms.len(), 1);
                assert!(arms[0].pattern.is_none());
            }
            other => panic!("expected a truthy match, got {other:?}"),
        }
    }

    #[test]
    fn parses_range_with_step() {
        let (program, handler) = parse("r ::= (0..10).step(2);");
        assert!(!handler.has_errors());
        assert!(matches!(
            &program.items[0],
            Stmt::VarDecl { init: Some(Expr::Range { step: Some(_), .. }), .. }
        ));
    }

    #[test]
    fn parses_bare_loop() {
        let (program, handler) = parse("loop { break; }");
        assert!(!handler.has_errors());
        assert!(matches!(
            &program.items[0],
            Stmt::Expr(Expr::Loop { condition: None, .. })
        ));
    }

    #[test]
    fn parses_conditional_loop_without_struct_literal_ambiguity() {
        let (program, handler) = parse("running ::= true; loop running { break; }");
        assert!(!handler.has_errors());
        assert!(matches!(
            &program.items[1],
            Stmt::Expr(Expr::Loop { condition: Some(_), .. })
        ));
    }

    #[test]
    fn parses_struct_literal() {
        let (program, handler) = parse("p ::= Point { x: 1, y: 2 };");
        assert!(!handler.has_errors());
        match &program.items[0] {
            Stmt::VarDecl { init: Some(Expr::StructLit { fields, .. }), .. } => {
                assert_eq!(fields.len(), 2);
            }
            other => panic!("expected a struct literal, got {other:?}"),
        }
    }

    #[test]
    fn parses_destructuring_import() {
        let (program, handler) = parse("{ println } = @std;");
        assert!(!handler.has_errors());
        assert!(matches!(&program.items[0], Stmt::Import { .. }));
    }

    #[test]
    fn parses_defer_statement() {
        let (program, handler) = parse("@this.defer(close());");
        assert!(!handler.has_errors());
        assert!(matches!(&program.items[0], Stmt::Defer(_)));
    }

    #[test]
    fn unexpected_token_is_reported_and_recovered() {
        let (program, handler) = parse("x ::= 1; $ y ::= 2;");
        assert!(handler.has_errors());
        assert_eq!(program.items.len(), 2);
    }

    #[test]
    fn method_call_chain_parses_left_to_right() {
        let (program, handler) = parse("v ::= a.b().c();");
        assert!(!handler.has_errors());
        match &program.items[0] {
            Stmt::VarDecl { init: Some(Expr::MethodCall { name, .. }), .. } => {
                assert_eq!(name.as_str(), "c");
            }
            other => panic!("expected a chained method call, got {other:?}"),
        }
    }
}

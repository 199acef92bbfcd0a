//! Property-based tests for the elma compiler
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use elma::ast::{Block, Declaration, Expr, FuncDecl, Package, Program, SourceFile, Stmt};
use elma::backend::ForeignDirective;
use elma::JsCodegen;
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,8}"
}

fn program(name: &str, calls: &[(String, Vec<String>)]) -> Program {
    let stmts = calls
        .iter()
        .map(|(callee, args)| {
            Stmt::Expr(Expr::call(
                Expr::ident(callee.as_str()),
                args.iter().map(|a| Expr::ident(a.as_str())).collect(),
            ))
        })
        .collect();
    Program {
        packages: vec![Package {
            path: "main".into(),
            name: "main".into(),
            files: vec![SourceFile {
                name: "main.go".into(),
                declarations: vec![Declaration::Function(FuncDecl {
                    name: name.to_string(),
                    doc: vec![],
                    params: vec![],
                    results: vec![],
                    body: Some(Block::new(stmts)),
                })],
            }],
        }],
    }
}

// =============================================================================
// Codegen Properties
// =============================================================================

proptest! {
    /// Property: the same tree always produces byte-identical output.
    #[test]
    fn codegen_is_deterministic(
        name in identifier(),
        calls in prop::collection::vec((identifier(), prop::collection::vec(identifier(), 0..4)), 0..6),
    ) {
        let program = program(&name, &calls);
        let first = JsCodegen::new().try_generate(&program).unwrap();
        let second = JsCodegen::new().try_generate(&program).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: every statement-level call ends with exactly one terminator.
    #[test]
    fn statement_calls_are_terminated_once(
        calls in prop::collection::vec((identifier(), prop::collection::vec(identifier(), 0..4)), 1..6),
    ) {
        let js = JsCodegen::new().try_generate(&program("main", &calls)).unwrap();
        prop_assert_eq!(js.matches(';').count(), calls.len());
        prop_assert!(!js.contains(";;"));
    }
}

// =============================================================================
// Foreign Expansion Properties
// =============================================================================

proptest! {
    /// Property: `%args%` expands to the comma-joined arguments.
    #[test]
    fn all_args_expand_to_joined_arguments(args in prop::collection::vec(identifier(), 0..6)) {
        let directive = ForeignDirective::new("f(%args%)");
        prop_assert_eq!(directive.expand(&args, ""), format!("f({})", args.join(",")));
    }

    /// Property: each positional token expands to its own argument, even past index 9.
    #[test]
    fn positional_tokens_pick_their_argument(
        args in prop::collection::vec(identifier(), 1..14),
        pick in any::<prop::sample::Index>(),
    ) {
        let index = pick.index(args.len());
        let directive = ForeignDirective::new(format!("[%arg{}%]", index));
        prop_assert_eq!(directive.expand(&args, "r"), format!("[{}]", args[index]));
    }

    /// Property: positional tokens past the supplied arguments stay verbatim.
    #[test]
    fn out_of_range_positional_is_left_verbatim(args in prop::collection::vec(identifier(), 0..4), extra in 0usize..3) {
        let token = format!("%arg{}%", args.len() + extra);
        let directive = ForeignDirective::new(format!("g({})", token));
        prop_assert_eq!(directive.expand(&args, ""), format!("g({})", token));
    }
}

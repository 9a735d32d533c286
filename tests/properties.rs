//! Property tests: printing any tree and parsing it back yields the same tree

mod common;

use kay::ast::*;
use kay::lexer::is_keyword;
use proptest::prelude::*;

use common::assertions::assert_parses;

const BINARY_OPS: &[&str] = &[
    "||", "&&", "<", "<=", ">", ">=", "==", "!=", "+", "-", "*", "/",
];

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}".prop_filter("keywords are not identifiers", |name| !is_keyword(name))
}

fn expression() -> impl Strategy<Value = Expression> {
    let leaf = prop_oneof![
        identifier().prop_map(Expression::var),
        (0..=i32::MAX).prop_map(Expression::int),
        any::<bool>().prop_map(Expression::boolean),
    ];

    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| Expression::unary("!", e)),
            (prop::sample::select(BINARY_OPS), inner.clone(), inner)
                .prop_map(|(op, l, r)| Expression::binary(op, l, r)),
        ]
    })
}

fn statement() -> impl Strategy<Value = Statement> {
    let leaf = prop_oneof![
        Just(Statement::Skip),
        (identifier(), expression()).prop_map(|(name, e)| Statement::assign(name, e)),
    ];

    // Then-branches are always blocks so an `else` can only bind one way.
    leaf.prop_recursive(3, 24, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Statement::block),
            (expression(), inner.clone()).prop_map(|(t, body)| Statement::while_loop(t, body)),
            (
                expression(),
                prop::collection::vec(inner.clone(), 0..3),
                prop::option::of(inner)
            )
                .prop_map(|(t, then, els)| Statement::conditional(t, Statement::block(then), els)),
        ]
    })
}

fn program() -> impl Strategy<Value = Program> {
    let ty = prop_oneof![Just(Type::Integer), Just(Type::Boolean)];
    (
        prop::collection::vec((ty, identifier()), 0..4),
        prop::collection::vec(statement(), 0..4),
    )
        .prop_map(|(decls, stmts)| {
            Program::new(
                decls
                    .into_iter()
                    .map(|(ty, name)| Declaration::new(ty, name))
                    .collect(),
                Block::new(stmts),
            )
        })
}

proptest! {
    #[test]
    fn prop_expression_round_trip(expr in expression()) {
        let source = format!("main {{ x := {}; }}", expr.to_kay(0));
        let program = assert_parses(&source);
        prop_assert_eq!(
            &program.body.members[0],
            &Statement::assign("x", expr)
        );
    }

    #[test]
    fn prop_program_round_trip(program in program()) {
        let printed = program.to_kay(0);
        let reparsed = assert_parses(&printed);
        prop_assert_eq!(reparsed, program);
    }

    #[test]
    fn prop_parse_never_panics(source in "\\PC{0,80}") {
        let _ = kay::parse(&source);
    }
}

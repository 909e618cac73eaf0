use adder_lang::ast::{BinOp, Expr, Message, Stmt, Target};

fn body_of(source: &str) -> Vec<Stmt> {
    adder_lang::parse(source).unwrap().functions[0].body.clone()
}

#[test]
fn allocate_statement() {
    let body = body_of("def f():\n    x: uint256 = 1\n");
    assert_eq!(
        body[0],
        Stmt::Allocate {
            name: "x".to_string(),
            ty: adder_lang::ast::Type::Base("uint256".to_string()),
            init: Expr::IntLit(1),
        }
    );
}

#[test]
fn plain_assignment() {
    let body = body_of("def f():\n    x = 1\n");
    assert_eq!(
        body[0],
        Stmt::Assign {
            target: Target::Name("x".to_string()),
            expr: Expr::IntLit(1),
        }
    );
}

#[test]
fn tuple_assignment_swap() {
    let body = body_of("def f():\n    a, b = b, a\n");
    match &body[0] {
        Stmt::Assign { target, expr } => {
            assert_eq!(
                *target,
                Target::Tuple(vec![Target::Name("a".to_string()), Target::Name("b".to_string())])
            );
            assert_eq!(*expr, Expr::TupleLit(vec![Expr::Name("b".to_string()), Expr::Name("a".to_string())]));
        }
        other => panic!("expected Assign, got {other:?}"),
    }
}

#[test]
fn augmented_assignment_desugars_to_assign() {
    let body = body_of("def f():\n    total += 1\n");
    assert_eq!(
        body[0],
        Stmt::Assign {
            target: Target::Name("total".to_string()),
            expr: Expr::Binary {
                op: BinOp::Add,
                lhs: Box::new(Expr::Name("total".to_string())),
                rhs: Box::new(Expr::IntLit(1)),
            },
        }
    );
}

#[test]
fn skip_target_on_underscore() {
    let body = body_of("def f():\n    _ = compute()\n");
    match &body[0] {
        Stmt::Assign { target, .. } => assert_eq!(*target, Target::Skip),
        other => panic!("expected Assign, got {other:?}"),
    }
}

#[test]
fn bare_expression_statement() {
    let body = body_of("def f():\n    do_thing()\n");
    assert!(matches!(&body[0], Stmt::ExprStmt(Expr::Call { .. })));
}

#[test]
fn if_elif_else_chain() {
    let source = "def f():\n    if a:\n        pass\n    elif b:\n        pass\n    else:\n        pass\n";
    let body = body_of(source);
    match &body[0] {
        Stmt::If { branches } => {
            assert_eq!(branches.len(), 3);
            assert!(branches[0].0.is_some());
            assert!(branches[1].0.is_some());
            assert!(branches[2].0.is_none());
        }
        other => panic!("expected If, got {other:?}"),
    }
}

#[test]
fn for_loop() {
    let source = "def f():\n    for x in items:\n        pass\n";
    let body = body_of(source);
    match &body[0] {
        Stmt::For { var, iter, .. } => {
            assert_eq!(var, "x");
            assert_eq!(*iter, Expr::Name("items".to_string()));
        }
        other => panic!("expected For, got {other:?}"),
    }
}

#[test]
fn raise_with_string_message() {
    let body = body_of("def f():\n    raise \"nope\"\n");
    assert_eq!(body[0], Stmt::Raise(Some(Message::Str("nope".to_string()))));
}

#[test]
fn bare_raise_has_no_message() {
    let body = body_of("def f():\n    raise\n");
    assert_eq!(body[0], Stmt::Raise(None));
}

#[test]
fn assert_with_unreachable_message() {
    let body = body_of("def f():\n    assert x, UNREACHABLE\n");
    assert_eq!(
        body[0],
        Stmt::Assert {
            cond: Expr::Name("x".to_string()),
            message: Some(Message::Unreachable),
        }
    );
}

#[test]
fn log_statement() {
    let body = body_of("def f():\n    log Transfer({amount: 1})\n");
    match &body[0] {
        Stmt::Log { name, fields } => {
            assert_eq!(name, "Transfer");
            assert_eq!(fields, &vec![("amount".to_string(), Expr::IntLit(1))]);
        }
        other => panic!("expected Log, got {other:?}"),
    }
}

#[test]
fn break_and_continue() {
    let source = "def f():\n    for x in items:\n        break\n        continue\n";
    let body = body_of(source);
    match &body[0] {
        Stmt::For { body, .. } => {
            assert_eq!(body, &vec![Stmt::Break, Stmt::Continue]);
        }
        other => panic!("expected For, got {other:?}"),
    }
}

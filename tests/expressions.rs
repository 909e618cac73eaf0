use adder_lang::ast::{BinOp, Expr, UnaryOp};

fn expr_of(source: &str) -> Expr {
    let body = adder_lang::parse(&format!("def f():\n    x: uint256 = {source}\n")).unwrap().functions[0]
        .body
        .clone();
    match body.into_iter().next().unwrap() {
        adder_lang::ast::Stmt::Allocate { init, .. } => init,
        other => panic!("expected Allocate, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        expr_of("1 + 2 * 3"),
        Expr::Binary {
            op: BinOp::Add,
            lhs: Box::new(Expr::IntLit(1)),
            rhs: Box::new(Expr::Binary {
                op: BinOp::Mul,
                lhs: Box::new(Expr::IntLit(2)),
                rhs: Box::new(Expr::IntLit(3)),
            }),
        }
    );
}

#[test]
fn addition_is_left_associative() {
    assert_eq!(
        expr_of("1 - 2 - 3"),
        Expr::Binary {
            op: BinOp::Sub,
            lhs: Box::new(Expr::Binary {
                op: BinOp::Sub,
                lhs: Box::new(Expr::IntLit(1)),
                rhs: Box::new(Expr::IntLit(2)),
            }),
            rhs: Box::new(Expr::IntLit(3)),
        }
    );
}

#[test]
fn not_binds_tighter_than_and() {
    assert_eq!(
        expr_of("not a and b"),
        Expr::Binary {
            op: BinOp::And,
            lhs: Box::new(Expr::Unary { op: UnaryOp::Not, expr: Box::new(Expr::Name("a".to_string())) }),
            rhs: Box::new(Expr::Name("b".to_string())),
        }
    );
}

#[test]
fn unary_minus_binds_looser_than_power() {
    assert_eq!(
        expr_of("-a ** b"),
        Expr::Unary {
            op: UnaryOp::Neg,
            expr: Box::new(Expr::Binary {
                op: BinOp::Pow,
                lhs: Box::new(Expr::Name("a".to_string())),
                rhs: Box::new(Expr::Name("b".to_string())),
            }),
        }
    );
}

#[test]
fn unary_minus_binds_tighter_than_addition() {
    assert_eq!(
        expr_of("-a + b"),
        Expr::Binary {
            op: BinOp::Add,
            lhs: Box::new(Expr::Unary { op: UnaryOp::Neg, expr: Box::new(Expr::Name("a".to_string())) }),
            rhs: Box::new(Expr::Name("b".to_string())),
        }
    );
}

#[test]
fn call_attribute_and_index_chain() {
    assert_eq!(
        expr_of("registry.tokens[owner].balance"),
        Expr::GetAttr {
            base: Box::new(Expr::GetItem {
                base: Box::new(Expr::GetAttr {
                    base: Box::new(Expr::Name("registry".to_string())),
                    attr: "tokens".to_string(),
                }),
                index: Box::new(Expr::Name("owner".to_string())),
            }),
            attr: "balance".to_string(),
        }
    );
}

#[test]
fn hex_oct_bin_literals() {
    assert_eq!(expr_of("0xff"), Expr::IntLit(255));
    assert_eq!(expr_of("0o17"), Expr::IntLit(15));
    assert_eq!(expr_of("0b101"), Expr::IntLit(5));
}

#[test]
fn parens_collapse_but_trailing_comma_makes_a_tuple() {
    assert_eq!(expr_of("(1 + 2)"), Expr::Binary {
        op: BinOp::Add,
        lhs: Box::new(Expr::IntLit(1)),
        rhs: Box::new(Expr::IntLit(2)),
    });
    assert_eq!(expr_of("(1,)"), Expr::TupleLit(vec![Expr::IntLit(1)]));
    assert_eq!(expr_of("(,)"), Expr::TupleLit(vec![]));
}

#[test]
fn list_and_dict_literals() {
    assert_eq!(expr_of("[1, 2, 3]"), Expr::ListLit(vec![Expr::IntLit(1), Expr::IntLit(2), Expr::IntLit(3)]));
    assert_eq!(
        expr_of("{amount: 1, sender: owner}"),
        Expr::DictLit(vec![
            ("amount".to_string(), Expr::IntLit(1)),
            ("sender".to_string(), Expr::Name("owner".to_string())),
        ])
    );
}

#[test]
fn keyword_and_positional_call_arguments() {
    assert_eq!(
        expr_of("transfer(to, amount=5)"),
        Expr::Call {
            callee: Box::new(Expr::Name("transfer".to_string())),
            args: vec![
                adder_lang::ast::Argument { name: None, value: Expr::Name("to".to_string()) },
                adder_lang::ast::Argument { name: Some("amount".to_string()), value: Expr::IntLit(5) },
            ],
        }
    );
}

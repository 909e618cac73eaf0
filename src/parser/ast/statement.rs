//! Statements (spec §3: `Stmt` variants).

use super::expression::{BinOp, Expr, Message, Target};
use super::type_name::Type;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Stmt {
    /// `name : T = initializer`
    Allocate { name: String, ty: Type, init: Expr },
    Assign { target: Target, expr: Expr },
    ExprStmt(Expr),
    Break,
    Continue,
    Pass,
    Return(Option<Expr>),
    Raise(Option<Message>),
    Assert { cond: Expr, message: Option<Message> },
    /// `log NAME ( dict )`
    Log { name: String, fields: Vec<(String, Expr)> },
    For { var: String, iter: Expr, body: Vec<Stmt> },
    /// Each element is `(condition, body)`; the last branch's condition is
    /// `None` exactly when it is an unconditional `else`.
    If { branches: Vec<(Option<Expr>, Vec<Stmt>)> },
}

impl Stmt {
    /// Builds the desugared form of `target OP= rhs` (spec §9, GLOSSARY
    /// "Augmented assignment"): `Assign{target, BinOp(op, target, rhs)}`.
    /// There is no separate `AugAssign` AST node — see DESIGN.md.
    pub fn aug_assign(target: Target, op: BinOp, rhs: Expr) -> Stmt {
        let target_as_expr = target_to_expr(&target);
        Stmt::Assign {
            target,
            expr: Expr::Binary {
                op,
                lhs: Box::new(target_as_expr),
                rhs: Box::new(rhs),
            },
        }
    }
}

fn target_to_expr(target: &Target) -> Expr {
    match target {
        Target::Name(name) => Expr::Name(name.clone()),
        Target::Getattr { base, attr } => Expr::GetAttr {
            base: Box::new(target_to_expr(base)),
            attr: attr.clone(),
        },
        Target::Getitem { base, index } => Expr::GetItem {
            base: Box::new(target_to_expr(base)),
            index: index.clone(),
        },
        Target::Tuple(targets) => Expr::TupleLit(targets.iter().map(target_to_expr).collect()),
        Target::Skip => Expr::Name("_".to_string()),
    }
}

//! Expressions, call arguments, and assignment targets (spec §3).

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Shl,
    Shr,
    And,
    Or,
    Xor,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    In,
}

impl BinOp {
    /// The augmented-assign operator this `BinOp` desugars from, used by
    /// the statement parser to build `Assign{target, BinOp(op, target, rhs)}`
    /// (spec §9, "Augmented assignment").
    pub fn from_aug(kind: crate::lexer::TokenKind) -> Option<Self> {
        use crate::lexer::TokenKind::*;
        Some(match kind {
            AugAdd => BinOp::Add,
            AugSub => BinOp::Sub,
            AugMul => BinOp::Mul,
            AugDiv => BinOp::Div,
            AugPow => BinOp::Pow,
            AugMod => BinOp::Mod,
            _ => return None,
        })
    }
}

/// A value shared by `raise`/`assert`'s message slot: either a string
/// literal or the `UNREACHABLE` sentinel (spec §9).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Message {
    Str(String),
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Expr {
    IntLit(i128),
    FloatLit(f64),
    StrLit(String),
    BoolLit(bool),
    Name(String),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Argument>,
    },
    GetAttr {
        base: Box<Expr>,
        attr: String,
    },
    GetItem {
        base: Box<Expr>,
        index: Box<Expr>,
    },
    TupleLit(Vec<Expr>),
    ListLit(Vec<Expr>),
    /// `{NAME: expr, ...}` — keys are always plain names, per the grammar's
    /// dict-literal shape (spec §4.3 "Statements").
    DictLit(Vec<(String, Expr)>),
}

/// `[NAME =] expr` — positional when `name` is absent (spec §3).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Argument {
    pub name: Option<String>,
    pub value: Expr,
}

/// The left-hand side of an assignment (spec §3: `Name | Getattr | Getitem
/// | Tuple(targets) | Skip`).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Target {
    Name(String),
    Getattr { base: Box<Target>, attr: String },
    Getitem { base: Box<Target>, index: Box<Expr> },
    Tuple(Vec<Target>),
    Skip,
}

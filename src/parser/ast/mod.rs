//! The AST (spec §3). Laid out the way the teacher splits its own AST
//! (`crates/why_lib/src/parser/ast/mod.rs`): one file per syntactic
//! category, re-exported from here. Unlike the teacher's nodes, which carry
//! a generic `<T>` info slot for its typechecker, these are plain data —
//! there is no typecheck phase in scope (spec §1 Non-goals).

mod definitions;
mod expression;
mod statement;
mod type_name;

pub use definitions::{
    ConstantDef, Decorator, EventDef, EventMember, FunctionDef, Import, InterfaceDef, InterfaceFunction, Module,
    Parameter, StorageDef, StructDef, StructMember,
};
pub use expression::{Argument, BinOp, Expr, Message, Target, UnaryOp};
pub use statement::Stmt;
pub use type_name::{ArraySize, Type};

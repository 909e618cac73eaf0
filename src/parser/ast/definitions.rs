//! Module-level declarations (spec §3): imports, storage, constants,
//! structs, events, interfaces, and functions.

use super::expression::{Argument, Expr};
use super::statement::Stmt;
use super::type_name::Type;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Import {
    /// Path segments: `.`/`..` for each leading relative dot, then dotted
    /// identifiers. A bare `import a.b.c` is `["a", "b", "c"]`; `from ..a
    /// import b` is `["..", "a", "b"]` (spec §4.3 "Imports").
    pub path: Vec<String>,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StorageDef {
    pub name: String,
    pub ty: Type,
    /// The decorator identifier in `name: decorator(T)`, e.g. `public`.
    pub decorator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConstantDef {
    pub name: String,
    pub ty: Type,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StructMember {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StructDef {
    pub name: String,
    pub members: Vec<StructMember>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventMember {
    pub name: String,
    pub ty: Type,
    pub indexed: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventDef {
    pub name: String,
    pub members: Vec<EventMember>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterfaceFunction {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub returns: Option<Type>,
    /// One of `pure`, `view`, `nonpayable`, `payable` by convention, kept
    /// as a bare identifier rather than a closed keyword set (DESIGN.md).
    pub mutability: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterfaceDef {
    pub name: String,
    pub functions: Vec<InterfaceFunction>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: Type,
    pub default: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Decorator {
    pub name: String,
    pub arguments: Option<Vec<Argument>>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FunctionDef {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub returns: Option<Type>,
    pub decorators: Vec<Decorator>,
    pub doc: Option<String>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Module {
    pub doc: Option<String>,
    pub imports: Vec<Import>,
    pub interfaces: Vec<InterfaceDef>,
    pub structs: Vec<StructDef>,
    pub events: Vec<EventDef>,
    pub storage: Vec<StorageDef>,
    pub constants: Vec<ConstantDef>,
    pub functions: Vec<FunctionDef>,
}

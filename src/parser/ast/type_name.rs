//! Type expressions (spec §3: `Type` variants).

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ArraySize {
    Literal(u64),
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Type {
    Base(String),
    Array { elem: Box<Type>, size: ArraySize },
    Tuple { elems: Vec<Type> },
    /// `HashMap[key, val]` — the key is restricted to a base type by the
    /// grammar (spec §4.3 "Types").
    Mapping { key: String, val: Box<Type> },
}

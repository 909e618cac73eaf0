//! The reserved-word table (spec §4.1: "Matched names are re-tagged as the
//! reserved keyword they equal from this closed set").
//!
//! Grounded in the teacher's `LexMap` (`crates/why_lib/src/lexer/lexmap.rs`):
//! a plain `HashMap` populated once and consulted on every scanned NAME.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::token::TokenKind;

pub static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("def", TokenKind::Def);
    m.insert("if", TokenKind::If);
    m.insert("elif", TokenKind::Elif);
    m.insert("else", TokenKind::Else);
    m.insert("import", TokenKind::Import);
    m.insert("from", TokenKind::From);
    m.insert("as", TokenKind::As);
    m.insert("for", TokenKind::For);
    m.insert("in", TokenKind::In);
    m.insert("pass", TokenKind::Pass);
    m.insert("break", TokenKind::Break);
    m.insert("continue", TokenKind::Continue);
    m.insert("log", TokenKind::Log);
    m.insert("return", TokenKind::Return);
    m.insert("raise", TokenKind::Raise);
    m.insert("assert", TokenKind::Assert);
    m.insert("and", TokenKind::And);
    m.insert("or", TokenKind::Or);
    m.insert("not", TokenKind::Not);
    m.insert("xor", TokenKind::Xor);
    m.insert("struct", TokenKind::Struct);
    m.insert("event", TokenKind::Event);
    m.insert("interface", TokenKind::Interface);
    m.insert("True", TokenKind::Bool);
    m.insert("False", TokenKind::Bool);
    m.insert("UNREACHABLE", TokenKind::Unreachable);
    m.insert("_", TokenKind::Skip);
    m
});

pub fn lookup(name: &str) -> Option<TokenKind> {
    KEYWORDS.get(name).copied()
}

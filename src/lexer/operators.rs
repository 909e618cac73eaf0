//! Operator and punctuation table, matched longest-first.
//!
//! Grounded in the teacher's `LexMap` (`crates/why_lib/src/lexer/lexmap.rs`):
//! a map from literal lexeme to [`TokenKind`], plus a `can_match` query used
//! by the scanner to decide whether reading one more character could still
//! extend the current match.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::token::TokenKind;

pub static OPERATORS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Multi-char operators, listed before the single-char ones they share a
    // prefix with so longest-match is unambiguous.
    m.insert("->", TokenKind::Arrow);
    m.insert("**=", TokenKind::AugPow);
    m.insert("**", TokenKind::Pow);
    m.insert("<<", TokenKind::Shl);
    m.insert(">>", TokenKind::Shr);
    m.insert("==", TokenKind::Eq);
    m.insert("!=", TokenKind::Ne);
    m.insert("<=", TokenKind::Le);
    m.insert(">=", TokenKind::Ge);
    m.insert("+=", TokenKind::AugAdd);
    m.insert("-=", TokenKind::AugSub);
    m.insert("*=", TokenKind::AugMul);
    m.insert("/=", TokenKind::AugDiv);
    m.insert("%=", TokenKind::AugMod);

    // Single-char operators.
    m.insert("+", TokenKind::Add);
    m.insert("-", TokenKind::Sub);
    m.insert("*", TokenKind::Mul);
    m.insert("/", TokenKind::Div);
    m.insert("%", TokenKind::Mod);
    m.insert("<", TokenKind::Lt);
    m.insert(">", TokenKind::Gt);
    m.insert(".", TokenKind::Dot);
    m.insert(";", TokenKind::Semicolon);

    // Literal punctuation.
    m.insert("=", TokenKind::Assign);
    m.insert(",", TokenKind::Comma);
    m.insert(":", TokenKind::Colon);
    m.insert("@", TokenKind::At);
    m.insert("(", TokenKind::LParen);
    m.insert(")", TokenKind::RParen);
    m.insert("[", TokenKind::LBracket);
    m.insert("]", TokenKind::RBracket);
    m.insert("{", TokenKind::LBrace);
    m.insert("}", TokenKind::RBrace);

    m
});

/// Whether some key in the table starts with `prefix` — i.e. whether reading
/// one more character could still grow the match.
pub fn can_extend(prefix: &str) -> bool {
    OPERATORS.keys().any(|key| key.starts_with(prefix))
}

pub fn get(lexeme: &str) -> Option<TokenKind> {
    OPERATORS.get(lexeme).copied()
}

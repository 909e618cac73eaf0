//! Adder's lexer and parser: turns source text into the AST described in
//! `parser::ast`, or a [`SyntaxError`] pinpointing the first thing that
//! didn't fit the grammar.
//!
//! The front end is deliberately small: two entry points, [`tokenize`] and
//! [`parse`], with everything else (type checking, codegen) left to crates
//! further down the pipeline.

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{SyntaxError, SyntaxErrorKind};
pub use lexer::{tokenize, Position, Token, TokenKind};
pub use parser::ast;
pub use parser::parse;

//! The front end's lexical layer: scanner, whitespace pipeline, and the
//! token cursor the parser consumes.

mod keywords;
mod operators;
mod pipeline;
mod scanner;
mod stream;
mod token;

pub use stream::TokenStream;
pub use token::{Position, Token, TokenKind};

use crate::error::SyntaxError;

/// Scan and structure `source`, returning the token stream the parser walks.
///
/// Runs the scanner (spec §4.1) followed by the ten-stage whitespace
/// pipeline (spec §4.2). Any failure at either layer is reported without
/// an attached excerpt — callers that have the original source text on hand
/// should attach one with [`SyntaxError::with_excerpt`].
pub fn tokenize(source: &str) -> Result<TokenStream, SyntaxError> {
    let raw = scanner::Scanner::new(source).scan()?;
    let structured = pipeline::run(raw)?;
    Ok(TokenStream::new(structured))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().map(|t| t.kind).collect()
    }

    #[test]
    fn simple_block_produces_indent_and_dedent() {
        let source = "def f():\n    pass\nx = 1\n";
        let kinds = kinds(source);
        assert!(kinds.contains(&TokenKind::Indent));
        assert!(kinds.contains(&TokenKind::Dedent));
        assert!(kinds.contains(&TokenKind::Endstmt));
    }

    #[test]
    fn blank_indented_line_does_not_change_indent_level() {
        let source = "def f():\n    pass\n    \n    pass\n";
        let kinds = kinds(source);
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Indent).count(), 1);
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Dedent).count(), 1);
    }

    #[test]
    fn two_level_jump_is_too_much_indenting() {
        let source = "def f():\n        x = 1\n";
        let err = tokenize(source).unwrap_err();
        assert_eq!(err.kind, crate::error::SyntaxErrorKind::TooMuchIndenting);
    }

    #[test]
    fn trailing_newline_is_not_required() {
        let source = "x = 1";
        assert!(tokenize(source).is_ok());
    }

    #[test]
    fn semicolon_is_folded_into_endstmt() {
        let source = "x = 1; y = 2\n";
        let kinds = kinds(source);
        assert!(!kinds.contains(&TokenKind::Semicolon));
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Endstmt).count(), 2);
    }

    #[test]
    fn comment_only_line_leaves_no_token() {
        let source = "x = 1 # trailing comment\ny = 2\n";
        let kinds = kinds(source);
        assert!(!kinds.contains(&TokenKind::Comment));
    }
}

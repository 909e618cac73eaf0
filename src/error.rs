//! The single error type surfaced by [`crate::tokenize`] and [`crate::parse`].
//!
//! Every failure in the front end — scanner, whitespace pipeline, or parser —
//! is fatal and is reported through [`SyntaxError`]. There is no recovery and
//! no partial AST; the caller gets one error with a line/column and (when the
//! source text is available) a three-line excerpt with a caret.

use std::fmt::{self, Display};

/// The closed set of ways the front end can fail, per spec §7.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SyntaxErrorKind {
    /// The scanner found a byte that starts no recognized atom.
    IllegalCharacter { found: char },
    /// Both tab characters and 4-space sequences were used as indentation.
    MixedIndent,
    /// A run of 1–3 spaces followed a TAB while scanning an indent.
    MisalignedIndent,
    /// The indent level jumped by more than one level in a single step.
    TooMuchIndenting,
    /// Input ended with outstanding INDENTs, or a DEDENT had no matching INDENT.
    UnbalancedIndent,
    /// An INDENT did not follow `:` and no bracket context could absorb it.
    SpuriousIndent,
    /// The parser saw a token the grammar does not allow in the current state.
    UnexpectedToken { found: String },
    /// The parser needed another token but the stream had already ended.
    UnexpectedEOF { expected: String },
}

impl Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::IllegalCharacter { found } => {
                write!(f, "illegal character '{found}'")
            }
            SyntaxErrorKind::MixedIndent => {
                write!(f, "mixed tabs and spaces in indentation")
            }
            SyntaxErrorKind::MisalignedIndent => {
                write!(f, "misaligned indent (spaces following a tab)")
            }
            SyntaxErrorKind::TooMuchIndenting => {
                write!(f, "indentation increased by more than one level")
            }
            SyntaxErrorKind::UnbalancedIndent => {
                write!(f, "unbalanced indentation at end of input")
            }
            SyntaxErrorKind::SpuriousIndent => {
                write!(f, "unexpected indent not following ':'")
            }
            SyntaxErrorKind::UnexpectedToken { found } => {
                write!(f, "unexpected token '{found}'")
            }
            SyntaxErrorKind::UnexpectedEOF { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
        }
    }
}

/// A fatal error from the front end, carrying where it happened and, when
/// the source text was on hand, a rendered excerpt pointing at the column.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub line: usize,
    pub column: usize,
    pub excerpt: Option<String>,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            excerpt: None,
        }
    }

    /// Attach a three-line source excerpt (the offending line, one line of
    /// context above it when present, and a caret row) to this error.
    pub fn with_excerpt(mut self, source: &str) -> Self {
        self.excerpt = Some(render_excerpt(source, self.line, self.column));
        self
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at line {}, column {}", self.kind, self.line, self.column)?;
        if let Some(excerpt) = &self.excerpt {
            write!(f, "{excerpt}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

/// Render the line/column as a gutter-prefixed excerpt with a caret, in the
/// style of the teacher's `ParseError` formatter.
fn render_excerpt(source: &str, line: usize, column: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    if line == 0 || line > lines.len() {
        return String::new();
    }

    let current = lines[line - 1];
    let previous = if line > 1 { Some(lines[line - 2]) } else { None };

    let gutter_width = format!("{line}").len();
    let gutter_fill = " ".repeat(gutter_width);
    let caret_padding = " ".repeat(column.saturating_sub(1));

    let mut out = String::new();
    if let Some(previous) = previous {
        out.push_str(&format!("{gutter_fill} | {previous}\n"));
    }
    out.push_str(&format!("{line} | {current}\n"));
    out.push_str(&format!("{gutter_fill} | {caret_padding}^\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_points_at_column() {
        let source = "def f():\n\t x = 1\n";
        let err = SyntaxError::new(SyntaxErrorKind::MisalignedIndent, 2, 2).with_excerpt(source);
        let excerpt = err.excerpt.unwrap();
        assert!(excerpt.contains("def f():"));
        assert!(excerpt.contains('^'));
    }

    #[test]
    fn locality_bounds_hold() {
        let source = "a: uint256\n";
        let err = SyntaxError::new(SyntaxErrorKind::IllegalCharacter { found: '$' }, 1, 3);
        assert!(err.line <= source.lines().count());
        assert!(err.column <= source.lines().next().unwrap().len() + 1);
    }
}

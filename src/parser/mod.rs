//! The operator-precedence parser (spec §4.3): consumes the pipeline's
//! token stream and builds the AST described in `ast`.
//!
//! Organized the way the teacher splits its own parser across
//! `expression.rs`/`statement.rs`/`type_name.rs` modules, each a set of
//! methods on one `Parser` cursor rather than free functions — grounded in
//! the teacher's `ParseState<T>` (`crates/why_lib/src/parser/parse_state.rs`),
//! which plays the same role of "the thing every grammar-rule method takes
//! `&mut self` on".

pub mod ast;
mod definitions;
mod expression;
mod statement;
mod type_name;

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::lexer::{Token, TokenKind, TokenStream};

use ast::Module;

/// Eagerly drive `tokenize` to completion and build a [`Module`] AST, per
/// spec §6.
pub fn parse(source: &str) -> Result<Module, SyntaxError> {
    let stream = crate::lexer::tokenize(source)?;
    Parser::new(stream).parse_module()
}

pub struct Parser {
    stream: TokenStream,
}

impl Parser {
    fn new(stream: TokenStream) -> Self {
        Self { stream }
    }

    fn peek(&self) -> Option<&Token> {
        self.stream.peek()
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.stream.peek().map(|t| t.kind)
    }

    fn peek2_kind(&self) -> Option<TokenKind> {
        self.stream.peek2().map(|t| t.kind)
    }

    fn bump(&mut self) -> Option<Token> {
        self.stream.next()
    }

    fn is_eof(&self) -> bool {
        self.stream.is_empty()
    }

    /// Where the next token (or, at EOF, the position just past the last
    /// token) sits — used to anchor error positions.
    fn here(&self) -> (usize, usize) {
        match self.peek() {
            Some(tok) => tok.position(),
            None => self.stream.last_position().unwrap_or((1, 1)),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        match self.peek_kind() {
            Some(k) if k == kind => Ok(self.bump().expect("peeked token kind matched")),
            _ => Err(self.unexpected(&format!("{kind:?}"))),
        }
    }

    fn expect_name(&mut self) -> Result<String, SyntaxError> {
        Ok(self.expect(TokenKind::Name)?.text)
    }

    /// Builds `UnexpectedEOF` if the stream is already empty, otherwise
    /// `UnexpectedToken` naming what was actually found.
    fn unexpected(&self, expected: &str) -> SyntaxError {
        let (line, column) = self.here();
        match self.peek() {
            Some(tok) => SyntaxError::new(
                SyntaxErrorKind::UnexpectedToken {
                    found: format!("{:?}", tok.kind),
                },
                line,
                column,
            ),
            None => SyntaxError::new(
                SyntaxErrorKind::UnexpectedEOF {
                    expected: expected.to_string(),
                },
                line,
                column,
            ),
        }
    }

    fn parse_module(&mut self) -> Result<Module, SyntaxError> {
        let mut module = Module::default();

        if self.peek_kind() == Some(TokenKind::Docstr) {
            let text = self.bump().expect("peeked DOCSTR").text;
            module.doc = Some(strip_quotes(&text));
        }

        while !self.is_eof() {
            match self.peek_kind() {
                Some(TokenKind::Import) | Some(TokenKind::From) => {
                    module.imports.extend(self.parse_import_stmt()?);
                }
                Some(TokenKind::At) | Some(TokenKind::Def) => {
                    module.functions.push(self.parse_function()?);
                }
                Some(TokenKind::Struct) => module.structs.push(self.parse_struct()?),
                Some(TokenKind::Event) => module.events.push(self.parse_event()?),
                Some(TokenKind::Interface) => module.interfaces.push(self.parse_interface()?),
                Some(TokenKind::Name) => match self.parse_storage_or_constant()? {
                    StorageOrConstant::Storage(def) => module.storage.push(def),
                    StorageOrConstant::Constant(def) => module.constants.push(def),
                },
                _ => return Err(self.unexpected("a module-level declaration")),
            }
        }

        Ok(module)
    }
}

enum StorageOrConstant {
    Storage(ast::StorageDef),
    Constant(ast::ConstantDef),
}

/// Strip the enclosing `"""`/`'''` (or `"`/`'`) quotes from a scanned
/// STRING/DOCSTR lexeme. Contents are passed through uninterpreted (spec
/// §6: "string/docstring contents are passed through without interpretation").
fn strip_quotes(text: &str) -> String {
    if text.len() >= 6 && (text.starts_with("\"\"\"") || text.starts_with("'''")) {
        text[3..text.len() - 3].to_string()
    } else if text.len() >= 2 {
        text[1..text.len() - 1].to_string()
    } else {
        text.to_string()
    }
}

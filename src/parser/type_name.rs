//! Type grammar (spec §4.3 "Types").

use crate::error::SyntaxError;
use crate::lexer::TokenKind;

use super::ast::{ArraySize, Type};
use super::Parser;

impl Parser {
    /// `Base(NAME)`; `T [DEC_NUM|NAME]` for arrays; tuple forms `(,)`,
    /// `(T,)`, `(T, T {, T} [,])`; `HashMap[BaseKey, ValType]` for mappings.
    pub(super) fn parse_type(&mut self) -> Result<Type, SyntaxError> {
        let mut ty = self.parse_type_atom()?;

        while self.peek_kind() == Some(TokenKind::LBracket) {
            self.bump();
            let size = match self.peek_kind() {
                Some(TokenKind::DecNum) => ArraySize::Literal(
                    self.bump().expect("peeked DEC_NUM").text.parse().unwrap_or(0),
                ),
                Some(TokenKind::Name) => ArraySize::Named(self.expect_name()?),
                _ => return Err(self.unexpected("an array size")),
            };
            self.expect(TokenKind::RBracket)?;
            ty = Type::Array { elem: Box::new(ty), size };
        }

        Ok(ty)
    }

    fn parse_type_atom(&mut self) -> Result<Type, SyntaxError> {
        match self.peek_kind() {
            Some(TokenKind::LParen) => self.parse_tuple_type(),
            Some(TokenKind::Name) => {
                let name = self.expect_name()?;
                if name == "HashMap" && self.peek_kind() == Some(TokenKind::LBracket) {
                    self.parse_mapping_type()
                } else {
                    Ok(Type::Base(name))
                }
            }
            _ => Err(self.unexpected("a type")),
        }
    }

    fn parse_mapping_type(&mut self) -> Result<Type, SyntaxError> {
        self.expect(TokenKind::LBracket)?;
        let key = self.expect_name()?;
        self.expect(TokenKind::Comma)?;
        let val = self.parse_type()?;
        self.expect(TokenKind::RBracket)?;
        Ok(Type::Mapping { key, val: Box::new(val) })
    }

    fn parse_tuple_type(&mut self) -> Result<Type, SyntaxError> {
        self.expect(TokenKind::LParen)?;

        if self.peek_kind() == Some(TokenKind::Comma) {
            // `(,)` — the empty tuple type.
            self.bump();
            self.expect(TokenKind::RParen)?;
            return Ok(Type::Tuple { elems: Vec::new() });
        }

        let mut elems = vec![self.parse_type()?];
        while self.peek_kind() == Some(TokenKind::Comma) {
            self.bump();
            if self.peek_kind() == Some(TokenKind::RParen) {
                break;
            }
            elems.push(self.parse_type()?);
        }
        self.expect(TokenKind::RParen)?;
        Ok(Type::Tuple { elems })
    }
}

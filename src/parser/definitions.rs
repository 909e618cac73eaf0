//! Module-level declarations (spec §4.3): imports, storage/constants,
//! structs, events, interfaces, and functions.

use crate::error::SyntaxError;
use crate::lexer::TokenKind;

use super::ast::{
    ConstantDef, Decorator, EventDef, EventMember, FunctionDef, Import, InterfaceDef, InterfaceFunction, Parameter,
    StorageDef, StructDef, StructMember,
};
use super::{Parser, StorageOrConstant};

impl Parser {
    /// A dotted path, coalescing a leading run of `.`/`..` into one segment
    /// (e.g. `..a.b` is `["..", "a", "b"]`) before the usual `NAME (DOT
    /// NAME)*` tail.
    fn parse_path(&mut self) -> Result<Vec<String>, SyntaxError> {
        let mut path = Vec::new();

        if self.peek_kind() == Some(TokenKind::Dot) {
            let mut dots = String::new();
            while self.peek_kind() == Some(TokenKind::Dot) {
                self.bump();
                dots.push('.');
            }
            path.push(dots);
        }

        if self.peek_kind() == Some(TokenKind::Name) {
            path.push(self.expect_name()?);
            while self.peek_kind() == Some(TokenKind::Dot) {
                self.bump();
                path.push(self.expect_name()?);
            }
        }

        if path.is_empty() {
            return Err(self.unexpected("an import path"));
        }

        Ok(path)
    }

    /// `import a.b.c`; `from .a import *`; `from a import b [as c]`; `from a
    /// import (b [as c], ...)`.
    pub(super) fn parse_import_stmt(&mut self) -> Result<Vec<Import>, SyntaxError> {
        if self.peek_kind() == Some(TokenKind::Import) {
            self.bump();
            let path = self.parse_path()?;
            let alias = self.parse_optional_as()?;
            self.expect(TokenKind::Endstmt)?;
            return Ok(vec![Import { path, alias }]);
        }

        self.expect(TokenKind::From)?;
        let base = self.parse_path()?;
        self.expect(TokenKind::Import)?;

        if self.peek_kind() == Some(TokenKind::Mul) {
            self.bump();
            self.expect(TokenKind::Endstmt)?;
            let mut path = base;
            path.push("*".to_string());
            return Ok(vec![Import { path, alias: None }]);
        }

        if self.peek_kind() == Some(TokenKind::LParen) {
            self.bump();
            let mut imports = Vec::new();
            loop {
                let name = self.expect_name()?;
                let alias = self.parse_optional_as()?;
                let mut path = base.clone();
                path.push(name);
                imports.push(Import { path, alias });

                if self.peek_kind() == Some(TokenKind::Comma) {
                    self.bump();
                    if self.peek_kind() == Some(TokenKind::RParen) {
                        break;
                    }
                } else {
                    break;
                }
            }
            self.expect(TokenKind::RParen)?;
            self.expect(TokenKind::Endstmt)?;
            return Ok(imports);
        }

        let name = self.expect_name()?;
        let alias = self.parse_optional_as()?;
        self.expect(TokenKind::Endstmt)?;
        let mut path = base;
        path.push(name);
        Ok(vec![Import { path, alias }])
    }

    fn parse_optional_as(&mut self) -> Result<Option<String>, SyntaxError> {
        if self.peek_kind() == Some(TokenKind::As) {
            self.bump();
            Ok(Some(self.expect_name()?))
        } else {
            Ok(None)
        }
    }

    /// `NAME : decorator(T) = ...` (storage, with an optional decorator
    /// applied to its type) or `NAME : T = expr` (a constant, §4.3 "Storage
    /// and constants").
    pub(super) fn parse_storage_or_constant(&mut self) -> Result<StorageOrConstant, SyntaxError> {
        let name = self.expect_name()?;
        self.expect(TokenKind::Colon)?;

        let decorator = if self.peek_kind() == Some(TokenKind::Name) && self.peek2_kind() == Some(TokenKind::LParen) {
            Some(self.expect_name()?)
        } else {
            None
        };

        if let Some(decorator) = decorator {
            self.expect(TokenKind::LParen)?;
            let ty = self.parse_type()?;
            self.expect(TokenKind::RParen)?;

            if decorator == "constant" {
                self.expect(TokenKind::Assign)?;
                let value = self.parse_expr()?;
                self.expect(TokenKind::Endstmt)?;
                return Ok(StorageOrConstant::Constant(ConstantDef { name, ty, value }));
            }

            self.expect(TokenKind::Endstmt)?;
            return Ok(StorageOrConstant::Storage(StorageDef {
                name,
                ty,
                decorator: Some(decorator),
            }));
        }

        let ty = self.parse_type()?;

        if self.peek_kind() == Some(TokenKind::Assign) {
            self.bump();
            let value = self.parse_expr()?;
            self.expect(TokenKind::Endstmt)?;
            return Ok(StorageOrConstant::Constant(ConstantDef { name, ty, value }));
        }

        self.expect(TokenKind::Endstmt)?;
        Ok(StorageOrConstant::Storage(StorageDef { name, ty, decorator: None }))
    }

    /// `struct Name: INDENT (pass | member+) DEDENT`.
    pub(super) fn parse_struct(&mut self) -> Result<StructDef, SyntaxError> {
        self.expect(TokenKind::Struct)?;
        let name = self.expect_name()?;
        self.expect(TokenKind::Colon)?;
        self.expect(TokenKind::Indent)?;

        let mut members = Vec::new();
        if self.peek_kind() == Some(TokenKind::Pass) {
            self.bump();
            self.expect(TokenKind::Endstmt)?;
        } else {
            while self.peek_kind() != Some(TokenKind::Dedent) {
                let name = self.expect_name()?;
                self.expect(TokenKind::Colon)?;
                let ty = self.parse_type()?;
                self.expect(TokenKind::Endstmt)?;
                members.push(StructMember { name, ty });
            }
        }

        self.expect(TokenKind::Dedent)?;
        Ok(StructDef { name, members })
    }

    /// `event Name: INDENT (pass | member+) DEDENT`, each member optionally
    /// wrapped in `indexed(T)` (spec §4.3, the uniform struct/event shape).
    pub(super) fn parse_event(&mut self) -> Result<EventDef, SyntaxError> {
        self.expect(TokenKind::Event)?;
        let name = self.expect_name()?;
        self.expect(TokenKind::Colon)?;
        self.expect(TokenKind::Indent)?;

        let mut members = Vec::new();
        if self.peek_kind() == Some(TokenKind::Pass) {
            self.bump();
            self.expect(TokenKind::Endstmt)?;
        } else {
            while self.peek_kind() != Some(TokenKind::Dedent) {
                let member_name = self.expect_name()?;
                self.expect(TokenKind::Colon)?;

                let (ty, indexed) =
                    if self.peek_kind() == Some(TokenKind::Name) && self.peek2_kind() == Some(TokenKind::LParen) {
                        let decorator = self.expect_name()?;
                        self.expect(TokenKind::LParen)?;
                        let ty = self.parse_type()?;
                        self.expect(TokenKind::RParen)?;
                        (ty, decorator == "indexed")
                    } else {
                        (self.parse_type()?, false)
                    };

                self.expect(TokenKind::Endstmt)?;
                members.push(EventMember { name: member_name, ty, indexed });
            }
        }

        self.expect(TokenKind::Dedent)?;
        Ok(EventDef { name, members })
    }

    /// `interface Name: INDENT (pass | function+) DEDENT`, each function
    /// `NAME(params) [-> T] : mutability`.
    pub(super) fn parse_interface(&mut self) -> Result<InterfaceDef, SyntaxError> {
        self.expect(TokenKind::Interface)?;
        let name = self.expect_name()?;
        self.expect(TokenKind::Colon)?;
        self.expect(TokenKind::Indent)?;

        let mut functions = Vec::new();
        if self.peek_kind() == Some(TokenKind::Pass) {
            self.bump();
            self.expect(TokenKind::Endstmt)?;
        } else {
            while self.peek_kind() != Some(TokenKind::Dedent) {
                let fn_name = self.expect_name()?;
                self.expect(TokenKind::LParen)?;
                let parameters = self.parse_parameters()?;
                self.expect(TokenKind::RParen)?;
                let returns = if self.peek_kind() == Some(TokenKind::Arrow) {
                    self.bump();
                    Some(self.parse_type()?)
                } else {
                    None
                };
                self.expect(TokenKind::Colon)?;
                let mutability = self.expect_name()?;
                self.expect(TokenKind::Endstmt)?;
                functions.push(InterfaceFunction {
                    name: fn_name,
                    parameters,
                    returns,
                    mutability,
                });
            }
        }

        self.expect(TokenKind::Dedent)?;
        Ok(InterfaceDef { name, functions })
    }

    /// `@decorator [(args)] ENDSTMT`, zero or more, preceding a `def`.
    fn parse_decorators(&mut self) -> Result<Vec<Decorator>, SyntaxError> {
        let mut decorators = Vec::new();
        while self.peek_kind() == Some(TokenKind::At) {
            self.bump();
            let name = self.expect_name()?;
            let arguments = if self.peek_kind() == Some(TokenKind::LParen) {
                self.bump();
                let args = self.parse_arguments()?;
                self.expect(TokenKind::RParen)?;
                Some(args)
            } else {
                None
            };
            self.expect(TokenKind::Endstmt)?;
            decorators.push(Decorator { name, arguments });
        }
        Ok(decorators)
    }

    pub(super) fn parse_parameters(&mut self) -> Result<Vec<Parameter>, SyntaxError> {
        let mut params = Vec::new();
        if self.peek_kind() == Some(TokenKind::RParen) {
            return Ok(params);
        }

        loop {
            let name = self.expect_name()?;
            self.expect(TokenKind::Colon)?;
            let ty = self.parse_type()?;
            let default = if self.peek_kind() == Some(TokenKind::Assign) {
                self.bump();
                Some(self.parse_expr()?)
            } else {
                None
            };
            params.push(Parameter { name, ty, default });

            if self.peek_kind() == Some(TokenKind::Comma) {
                self.bump();
                if self.peek_kind() == Some(TokenKind::RParen) {
                    break;
                }
            } else {
                break;
            }
        }

        Ok(params)
    }

    /// `@decorator(...)`/`def NAME(params) [-> T]: body` (spec §4.3
    /// "Functions").
    pub(super) fn parse_function(&mut self) -> Result<FunctionDef, SyntaxError> {
        let decorators = self.parse_decorators()?;
        self.expect(TokenKind::Def)?;
        let name = self.expect_name()?;
        self.expect(TokenKind::LParen)?;
        let parameters = self.parse_parameters()?;
        self.expect(TokenKind::RParen)?;
        let returns = if self.peek_kind() == Some(TokenKind::Arrow) {
            self.bump();
            Some(self.parse_type()?)
        } else {
            None
        };
        self.expect(TokenKind::Colon)?;
        let (doc, body) = self.parse_function_body()?;
        Ok(FunctionDef {
            name,
            parameters,
            returns,
            decorators,
            doc,
            body,
        })
    }
}

//! Statement grammar (spec §4.3 "Statements").

use crate::error::SyntaxError;
use crate::lexer::TokenKind;

use super::ast::{BinOp, Expr, Message, Stmt, Target};
use super::{strip_quotes, Parser};

impl Parser {
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        match self.peek_kind() {
            Some(TokenKind::Pass) => {
                self.bump();
                self.expect(TokenKind::Endstmt)?;
                Ok(Stmt::Pass)
            }
            Some(TokenKind::Break) => {
                self.bump();
                self.expect(TokenKind::Endstmt)?;
                Ok(Stmt::Break)
            }
            Some(TokenKind::Continue) => {
                self.bump();
                self.expect(TokenKind::Endstmt)?;
                Ok(Stmt::Continue)
            }
            Some(TokenKind::Return) => {
                self.bump();
                let expr = if self.peek_kind() == Some(TokenKind::Endstmt) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.expect(TokenKind::Endstmt)?;
                Ok(Stmt::Return(expr))
            }
            Some(TokenKind::Raise) => {
                self.bump();
                let message = self.parse_optional_message()?;
                self.expect(TokenKind::Endstmt)?;
                Ok(Stmt::Raise(message))
            }
            Some(TokenKind::Assert) => {
                self.bump();
                let cond = self.parse_expr()?;
                let message = if self.peek_kind() == Some(TokenKind::Comma) {
                    self.bump();
                    Some(self.parse_message()?)
                } else {
                    None
                };
                self.expect(TokenKind::Endstmt)?;
                Ok(Stmt::Assert { cond, message })
            }
            Some(TokenKind::Log) => self.parse_log_stmt(),
            Some(TokenKind::For) => self.parse_for_stmt(),
            Some(TokenKind::If) => self.parse_if_stmt(),
            Some(TokenKind::Name) if self.peek2_kind() == Some(TokenKind::Colon) => self.parse_allocate_stmt(),
            _ => self.parse_assign_or_expr_stmt(),
        }
    }

    /// `INDENT stmt* DEDENT` — used by `for`/`if`/`elif`/`else` bodies.
    pub(super) fn parse_body(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        self.expect(TokenKind::Indent)?;
        let mut stmts = Vec::new();
        while self.peek_kind() != Some(TokenKind::Dedent) {
            if self.is_eof() {
                return Err(self.unexpected("DEDENT"));
            }
            stmts.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::Dedent)?;
        Ok(stmts)
    }

    /// Like [`Parser::parse_body`] but also extracts a leading docstring
    /// (spec §4.2 step 10 / §4.3 "Function bodies").
    pub(super) fn parse_function_body(&mut self) -> Result<(Option<String>, Vec<Stmt>), SyntaxError> {
        self.expect(TokenKind::Indent)?;
        let doc = if self.peek_kind() == Some(TokenKind::Docstr) {
            Some(strip_quotes(&self.bump().expect("peeked DOCSTR").text))
        } else {
            None
        };
        let mut stmts = Vec::new();
        while self.peek_kind() != Some(TokenKind::Dedent) {
            if self.is_eof() {
                return Err(self.unexpected("DEDENT"));
            }
            stmts.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::Dedent)?;
        Ok((doc, stmts))
    }

    fn parse_optional_message(&mut self) -> Result<Option<Message>, SyntaxError> {
        if self.peek_kind() == Some(TokenKind::Endstmt) {
            Ok(None)
        } else {
            Ok(Some(self.parse_message()?))
        }
    }

    fn parse_message(&mut self) -> Result<Message, SyntaxError> {
        match self.peek_kind() {
            Some(TokenKind::String) => Ok(Message::Str(strip_quotes(&self.bump().expect("peeked STRING").text))),
            Some(TokenKind::Unreachable) => {
                self.bump();
                Ok(Message::Unreachable)
            }
            _ => Err(self.unexpected("a string literal or UNREACHABLE")),
        }
    }

    /// `log NAME ( dict )` — `dict` is the brace literal `{NAME: expr, ...}`,
    /// the same nonterminal an allocation initializer can use.
    fn parse_log_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect(TokenKind::Log)?;
        let name = self.expect_name()?;
        self.expect(TokenKind::LParen)?;

        let fields = match self.parse_dict_literal()? {
            Expr::DictLit(fields) => fields,
            other => unreachable!("parse_dict_literal always returns DictLit, got {other:?}"),
        };

        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Endstmt)?;
        Ok(Stmt::Log { name, fields })
    }

    fn parse_for_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect(TokenKind::For)?;
        let var = self.expect_name()?;
        self.expect(TokenKind::In)?;
        let iter = self.parse_expr()?;
        self.expect(TokenKind::Colon)?;
        let body = self.parse_body()?;
        Ok(Stmt::For { var, iter, body })
    }

    fn parse_if_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect(TokenKind::If)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::Colon)?;
        let body = self.parse_body()?;
        let mut branches = vec![(Some(cond), body)];

        loop {
            match self.peek_kind() {
                Some(TokenKind::Elif) => {
                    self.bump();
                    let cond = self.parse_expr()?;
                    self.expect(TokenKind::Colon)?;
                    let body = self.parse_body()?;
                    branches.push((Some(cond), body));
                }
                Some(TokenKind::Else) => {
                    self.bump();
                    self.expect(TokenKind::Colon)?;
                    let body = self.parse_body()?;
                    branches.push((None, body));
                    break;
                }
                _ => break,
            }
        }

        Ok(Stmt::If { branches })
    }

    fn parse_allocate_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        let name = self.expect_name()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        self.expect(TokenKind::Assign)?;
        let init = self.parse_expr()?;
        self.expect(TokenKind::Endstmt)?;
        Ok(Stmt::Allocate { name, ty, init })
    }

    /// The fallback path: an expression (or comma-separated list, treated as
    /// a tuple) that turns out to be a plain statement, an assignment target,
    /// or an augmented-assignment target, disambiguated by what follows it.
    fn parse_assign_or_expr_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        let lhs = self.parse_expr_list_as_expr()?;
        let next = self.peek_kind();

        if next == Some(TokenKind::Assign) {
            self.bump();
            let rhs = self.parse_expr_list_as_expr()?;
            let target = self.expr_to_target(lhs)?;
            self.expect(TokenKind::Endstmt)?;
            Ok(Stmt::Assign { target, expr: rhs })
        } else if let Some(op) = next.and_then(BinOp::from_aug) {
            self.bump();
            let rhs = self.parse_expr()?;
            let target = self.expr_to_target(lhs)?;
            self.expect(TokenKind::Endstmt)?;
            Ok(Stmt::aug_assign(target, op, rhs))
        } else {
            self.expect(TokenKind::Endstmt)?;
            Ok(Stmt::ExprStmt(lhs))
        }
    }

    /// One or more comma-separated expressions, collapsed to a single `Expr`
    /// (a bare `TupleLit` when there was more than one).
    fn parse_expr_list_as_expr(&mut self) -> Result<Expr, SyntaxError> {
        let mut exprs = vec![self.parse_expr()?];
        while self.peek_kind() == Some(TokenKind::Comma) {
            self.bump();
            exprs.push(self.parse_expr()?);
        }
        if exprs.len() == 1 {
            Ok(exprs.into_iter().next().expect("len checked above"))
        } else {
            Ok(Expr::TupleLit(exprs))
        }
    }

    fn expr_to_target(&self, expr: Expr) -> Result<Target, SyntaxError> {
        match expr {
            Expr::Name(name) if name == "_" => Ok(Target::Skip),
            Expr::Name(name) => Ok(Target::Name(name)),
            Expr::GetAttr { base, attr } => Ok(Target::Getattr {
                base: Box::new(self.expr_to_target(*base)?),
                attr,
            }),
            Expr::GetItem { base, index } => Ok(Target::Getitem {
                base: Box::new(self.expr_to_target(*base)?),
                index,
            }),
            Expr::TupleLit(elems) => Ok(Target::Tuple(
                elems.into_iter().map(|e| self.expr_to_target(e)).collect::<Result<_, _>>()?,
            )),
            _ => Err(self.unexpected("an assignment target")),
        }
    }
}

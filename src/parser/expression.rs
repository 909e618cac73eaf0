//! Expression grammar (spec §4.3 "Expressions"/"Arguments"), implemented as
//! precedence climbing over the nine-level table in spec §4.3. Binding
//! levels below are numbered exactly as the spec lists them (1 = loosest),
//! including the table's unusual relative ordering of arithmetic versus
//! logical operators — that ordering is taken verbatim from the Python
//! reference grammar's own `precedence` declaration, not reinterpreted.

use crate::error::SyntaxError;
use crate::lexer::TokenKind;

use super::ast::{Argument, BinOp, Expr, UnaryOp};
use super::Parser;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Assoc {
    Left,
    Right,
    NonAssoc,
}

fn binop_info(kind: TokenKind) -> Option<(u8, Assoc, BinOp)> {
    use TokenKind::*;
    Some(match kind {
        Add => (1, Assoc::Left, BinOp::Add),
        Sub => (1, Assoc::Left, BinOp::Sub),
        Mul => (2, Assoc::Left, BinOp::Mul),
        Div => (2, Assoc::Left, BinOp::Div),
        And => (3, Assoc::Left, BinOp::And),
        Or => (3, Assoc::Left, BinOp::Or),
        Xor => (3, Assoc::Left, BinOp::Xor),
        Eq => (5, Assoc::NonAssoc, BinOp::Eq),
        Ne => (5, Assoc::NonAssoc, BinOp::Ne),
        Lt => (5, Assoc::NonAssoc, BinOp::Lt),
        Gt => (5, Assoc::NonAssoc, BinOp::Gt),
        Le => (5, Assoc::NonAssoc, BinOp::Le),
        Ge => (5, Assoc::NonAssoc, BinOp::Ge),
        In => (5, Assoc::NonAssoc, BinOp::In),
        Shl => (6, Assoc::NonAssoc, BinOp::Shl),
        Shr => (6, Assoc::NonAssoc, BinOp::Shr),
        Pow => (7, Assoc::NonAssoc, BinOp::Pow),
        Mod => (7, Assoc::NonAssoc, BinOp::Mod),
        _ => return None,
    })
}

impl Parser {
    pub(super) fn parse_expr(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_binary(1)
    }

    fn parse_binary(&mut self, min_level: u8) -> Result<Expr, SyntaxError> {
        let mut lhs = self.parse_unary()?;

        loop {
            let Some((level, assoc, op)) = self.peek_kind().and_then(binop_info) else {
                break;
            };
            if level < min_level {
                break;
            }
            self.bump();

            let next_min = match assoc {
                Assoc::Left => level + 1,
                Assoc::Right => level,
                Assoc::NonAssoc => level + 1,
            };
            let rhs = self.parse_binary(next_min)?;
            lhs = Expr::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) };

            if assoc == Assoc::NonAssoc {
                break;
            }
        }

        Ok(lhs)
    }

    /// Level 4: `-` (unary) and `not`. Its operand is parsed at its own
    /// level so that tighter operators (levels 5-9: comparisons, shifts,
    /// `**`/`%`, postfix chains) bind inside the negation while looser ones
    /// (levels 1-3: arithmetic, logical) bind outside it — e.g. `-a ** b` is
    /// `-(a ** b)` but `-a + b` is `(-a) + b`.
    fn parse_unary(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek_kind() {
            Some(TokenKind::Sub) => {
                self.bump();
                let expr = self.parse_binary(4)?;
                Ok(Expr::Unary { op: UnaryOp::Neg, expr: Box::new(expr) })
            }
            Some(TokenKind::Not) => {
                self.bump();
                let expr = self.parse_binary(4)?;
                Ok(Expr::Unary { op: UnaryOp::Not, expr: Box::new(expr) })
            }
            _ => self.parse_postfix(),
        }
    }

    /// Level 9 (highest): call/attribute/index chains, in any sequence,
    /// bind tighter than anything else (spec §4.3 "Variable chains").
    fn parse_postfix(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.parse_primary()?;

        loop {
            match self.peek_kind() {
                Some(TokenKind::LParen) => {
                    self.bump();
                    let args = self.parse_arguments()?;
                    self.expect(TokenKind::RParen)?;
                    expr = Expr::Call { callee: Box::new(expr), args };
                }
                Some(TokenKind::Dot) => {
                    self.bump();
                    let attr = self.expect_name()?;
                    expr = Expr::GetAttr { base: Box::new(expr), attr };
                }
                Some(TokenKind::LBracket) => {
                    self.bump();
                    let index = self.parse_expr()?;
                    self.expect(TokenKind::RBracket)?;
                    expr = Expr::GetItem { base: Box::new(expr), index: Box::new(index) };
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    pub(super) fn parse_arguments(&mut self) -> Result<Vec<Argument>, SyntaxError> {
        let mut args = Vec::new();
        if self.peek_kind() == Some(TokenKind::RParen) {
            return Ok(args);
        }

        loop {
            let name = if self.peek_kind() == Some(TokenKind::Name) && self.peek2_kind() == Some(TokenKind::Assign) {
                let name = self.expect_name()?;
                self.bump();
                Some(name)
            } else {
                None
            };
            let value = self.parse_expr()?;
            args.push(Argument { name, value });

            if self.peek_kind() == Some(TokenKind::Comma) {
                self.bump();
                if self.peek_kind() == Some(TokenKind::RParen) {
                    break;
                }
            } else {
                break;
            }
        }

        Ok(args)
    }

    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek_kind() {
            Some(TokenKind::DecNum) => Ok(Expr::IntLit(self.bump().unwrap().text.parse().unwrap_or(0))),
            Some(TokenKind::HexNum) => {
                let text = self.bump().unwrap().text;
                Ok(Expr::IntLit(i128::from_str_radix(&text[2..], 16).unwrap_or(0)))
            }
            Some(TokenKind::OctNum) => {
                let text = self.bump().unwrap().text;
                Ok(Expr::IntLit(i128::from_str_radix(&text[2..], 8).unwrap_or(0)))
            }
            Some(TokenKind::BinNum) => {
                let text = self.bump().unwrap().text;
                Ok(Expr::IntLit(i128::from_str_radix(&text[2..], 2).unwrap_or(0)))
            }
            Some(TokenKind::Float) => Ok(Expr::FloatLit(self.bump().unwrap().text.parse().unwrap_or(0.0))),
            Some(TokenKind::String) => Ok(Expr::StrLit(super::strip_quotes(&self.bump().unwrap().text))),
            Some(TokenKind::Bool) => Ok(Expr::BoolLit(self.bump().unwrap().text == "True")),
            Some(TokenKind::Skip) => {
                self.bump();
                Ok(Expr::Name("_".to_string()))
            }
            Some(TokenKind::Name) => Ok(Expr::Name(self.expect_name()?)),
            Some(TokenKind::LParen) => self.parse_paren_or_tuple(),
            Some(TokenKind::LBracket) => self.parse_list_literal(),
            Some(TokenKind::LBrace) => self.parse_dict_literal(),
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// `(expr)` collapses to the inner expression (spec §4.3: "parens are
    /// inert"); `(,)` is the 0-tuple; `(e,)`/`(e, e {, e} [,])` are tuples.
    fn parse_paren_or_tuple(&mut self) -> Result<Expr, SyntaxError> {
        self.expect(TokenKind::LParen)?;

        if self.peek_kind() == Some(TokenKind::Comma) {
            self.bump();
            self.expect(TokenKind::RParen)?;
            return Ok(Expr::TupleLit(Vec::new()));
        }

        let first = self.parse_expr()?;

        if self.peek_kind() != Some(TokenKind::Comma) {
            self.expect(TokenKind::RParen)?;
            return Ok(first);
        }

        let mut elems = vec![first];
        while self.peek_kind() == Some(TokenKind::Comma) {
            self.bump();
            if self.peek_kind() == Some(TokenKind::RParen) {
                break;
            }
            elems.push(self.parse_expr()?);
        }
        self.expect(TokenKind::RParen)?;
        Ok(Expr::TupleLit(elems))
    }

    fn parse_list_literal(&mut self) -> Result<Expr, SyntaxError> {
        self.expect(TokenKind::LBracket)?;
        let mut elems = Vec::new();
        if self.peek_kind() != Some(TokenKind::RBracket) {
            loop {
                elems.push(self.parse_expr()?);
                if self.peek_kind() == Some(TokenKind::Comma) {
                    self.bump();
                    if self.peek_kind() == Some(TokenKind::RBracket) {
                        break;
                    }
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::RBracket)?;
        Ok(Expr::ListLit(elems))
    }

    pub(super) fn parse_dict_literal(&mut self) -> Result<Expr, SyntaxError> {
        self.expect(TokenKind::LBrace)?;
        let mut fields = Vec::new();
        if self.peek_kind() != Some(TokenKind::RBrace) {
            loop {
                let key = self.expect_name()?;
                self.expect(TokenKind::Colon)?;
                let value = self.parse_expr()?;
                fields.push((key, value));
                if self.peek_kind() == Some(TokenKind::Comma) {
                    self.bump();
                    if self.peek_kind() == Some(TokenKind::RBrace) {
                        break;
                    }
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::RBrace)?;
        Ok(Expr::DictLit(fields))
    }
}

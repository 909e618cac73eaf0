//! The scanner: turns raw source text into a flat `Vec<Token>` of atoms
//! (spec §4.1). Whitespace (`NEWLINE`, `TAB`, `SPACE`) is emitted as real
//! tokens here — the whitespace pipeline (`super::pipeline`) is what turns
//! those into structure. Comments are recognized and dropped on the spot.
//!
//! Grounded in the teacher's original hand-rolled scanner
//! (`src/lexer/mod.rs`'s `Lexer`): a `Peekable<Chars>` walked left to right,
//! dispatching on the lookahead character's class, with its own `line`/`col`
//! bookkeeping rather than a regex engine.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{SyntaxError, SyntaxErrorKind};

use super::keywords;
use super::operators;
use super::token::{Token, TokenKind};

/// Which concrete form of TAB the file has committed to, per spec §4.1's
/// "lexer state" latch: once a TAB is emitted, every later TAB must use the
/// same spelling (all tabs, or all four-space runs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WhitespaceStyle {
    Tabs,
    Spaces,
}

pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    byte_index: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
    whitespace_style: Option<WhitespaceStyle>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            byte_index: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
            whitespace_style: None,
        }
    }

    pub fn scan(mut self) -> Result<Vec<Token>, SyntaxError> {
        while let Some(&c) = self.chars.peek() {
            let start = (self.byte_index, self.line, self.column);

            match c {
                '#' => self.lex_comment(),
                '\r' | '\n' => self.lex_newline(start),
                ' ' => self.lex_space_or_tab(start)?,
                '\t' => self.lex_single_tab(start)?,
                '"' | '\'' => self.lex_string(start, c)?,
                '0'..='9' => self.lex_number(start)?,
                '.' if self.peek_at(1).is_some_and(|d| d.is_ascii_digit()) => {
                    self.lex_number(start)?
                }
                c if c.is_ascii_alphabetic() || c == '_' => self.lex_name(start),
                _ => self.lex_operator(start)?,
            }
        }

        Ok(self.tokens)
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.byte_index += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn push(&mut self, kind: TokenKind, text: String, start: (usize, usize, usize)) {
        let (byte_index, line, column) = start;
        self.tokens.push(Token::new(kind, text, byte_index, line, column));
    }

    fn err(&self, kind: SyntaxErrorKind, start: (usize, usize, usize)) -> SyntaxError {
        SyntaxError::new(kind, start.1, start.2)
    }

    fn lex_comment(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' || c == '\r' {
                break;
            }
            self.bump();
        }
    }

    fn lex_newline(&mut self, start: (usize, usize, usize)) {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if c == '\n' || c == '\r' {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        self.push(TokenKind::Newline, text, start);
    }

    /// A run of spaces: exactly 4 becomes one `TAB`, 1–3 becomes one
    /// `SPACE`. A run of 5+ is consumed four-at-a-time the same way the
    /// original SLY lexer's per-match scanning would: a `TAB`, then the
    /// scanner is re-entered on the remainder.
    fn lex_space_or_tab(&mut self, start: (usize, usize, usize)) -> Result<(), SyntaxError> {
        let run = {
            let mut n = 0;
            while self.peek_at(n) == Some(' ') {
                n += 1;
            }
            n
        };

        let take = if run >= 4 { 4 } else { run };
        let mut text = String::new();
        for _ in 0..take {
            text.push(self.bump().expect("counted run of spaces"));
        }

        if take == 4 {
            self.latch_whitespace_style(WhitespaceStyle::Spaces, start)?;
            self.push(TokenKind::Tab, text, start);
        } else {
            self.push(TokenKind::Space, text, start);
        }
        Ok(())
    }

    fn lex_single_tab(&mut self, start: (usize, usize, usize)) -> Result<(), SyntaxError> {
        let c = self.bump().expect("peeked tab");
        self.latch_whitespace_style(WhitespaceStyle::Tabs, start)?;
        self.push(TokenKind::Tab, c.to_string(), start);
        Ok(())
    }

    /// Latch `whitespace_style` on the first TAB, and fail `MixedIndent` if
    /// a later TAB uses the other concrete form.
    fn latch_whitespace_style(&mut self, style: WhitespaceStyle, start: (usize, usize, usize)) -> Result<(), SyntaxError> {
        match self.whitespace_style {
            None => {
                self.whitespace_style = Some(style);
                Ok(())
            }
            Some(latched) if latched == style => Ok(()),
            Some(_) => Err(self.err(SyntaxErrorKind::MixedIndent, start)),
        }
    }

    fn lex_name(&mut self, start: (usize, usize, usize)) {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }

        let kind = keywords::lookup(&text).unwrap_or(TokenKind::Name);
        self.push(kind, text, start);
    }

    fn lex_string(&mut self, start: (usize, usize, usize), quote: char) -> Result<(), SyntaxError> {
        if self.peek_at(1) == Some(quote) && self.peek_at(2) == Some(quote) {
            self.lex_docstring(start, quote)
        } else {
            self.lex_single_line_string(start, quote)
        }
    }

    fn lex_docstring(&mut self, start: (usize, usize, usize), quote: char) -> Result<(), SyntaxError> {
        let mut text = String::new();
        for _ in 0..3 {
            text.push(self.bump().expect("peeked triple quote"));
        }

        loop {
            if self.peek_at(0) == Some(quote) && self.peek_at(1) == Some(quote) && self.peek_at(2) == Some(quote) {
                for _ in 0..3 {
                    text.push(self.bump().expect("peeked closing triple quote"));
                }
                self.push(TokenKind::Docstr, text, start);
                return Ok(());
            }

            match self.bump() {
                Some(c) => text.push(c),
                None => return Err(self.err(SyntaxErrorKind::IllegalCharacter { found: quote }, start)),
            }
        }
    }

    fn lex_single_line_string(&mut self, start: (usize, usize, usize), quote: char) -> Result<(), SyntaxError> {
        let mut text = String::new();
        text.push(self.bump().expect("peeked opening quote"));

        loop {
            match self.chars.peek() {
                Some(&c) if c == quote => {
                    text.push(self.bump().expect("peeked closing quote"));
                    self.push(TokenKind::String, text, start);
                    return Ok(());
                }
                Some(&c) if c == '\n' || c == '\r' => {
                    return Err(self.err(SyntaxErrorKind::IllegalCharacter { found: quote }, start));
                }
                Some(&c) => {
                    text.push(c);
                    self.bump();
                }
                None => return Err(self.err(SyntaxErrorKind::IllegalCharacter { found: quote }, start)),
            }
        }
    }

    fn lex_number(&mut self, start: (usize, usize, usize)) -> Result<(), SyntaxError> {
        if self.peek_at(0) == Some('0') {
            match self.peek_at(1) {
                Some('x') => {
                    self.lex_radix_number(start, TokenKind::HexNum, |c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase());
                    return Ok(());
                }
                Some('o') => {
                    self.lex_radix_number(start, TokenKind::OctNum, |c| ('0'..='7').contains(&c));
                    return Ok(());
                }
                Some('b') => {
                    self.lex_radix_number(start, TokenKind::BinNum, |c| c == '0' || c == '1');
                    return Ok(());
                }
                _ => {}
            }
        }

        if self.peek_at(0) == Some('.') {
            return self.lex_float_from_dot(start);
        }

        // Look ahead over the whole digit run before consuming anything, so
        // a plain leading-zero run (e.g. "007") can be truncated to just its
        // first character without needing to push characters back onto the
        // char iterator.
        let mut run_len = 0;
        while matches!(self.peek_at(run_len), Some(c) if c.is_ascii_digit()) {
            run_len += 1;
        }

        let is_dotted = self.peek_at(run_len) == Some('.');
        let is_exponentiated =
            matches!(self.peek_at(run_len), Some('e') | Some('E')) && self.exponent_follows_at(run_len);

        if is_dotted || is_exponentiated {
            let mut text = String::new();
            for _ in 0..run_len {
                text.push(self.bump().expect("counted digit run"));
            }
            if is_dotted {
                text.push(self.bump().expect("peeked dot"));
                text.push_str(&self.take_digits());
            }
            self.append_optional_exponent(&mut text);
            self.push(TokenKind::Float, text, start);
            return Ok(());
        }

        // DEC_NUM is `0` or `[1-9][0-9]*` — a leading zero stands alone; the
        // remaining digits of the run are left for the next scan iteration.
        let first = self.peek_at(0).expect("digit run is non-empty");
        if first == '0' && run_len > 1 {
            self.push(TokenKind::DecNum, self.bump().expect("peeked leading zero").to_string(), start);
        } else {
            let mut text = String::new();
            for _ in 0..run_len {
                text.push(self.bump().expect("counted digit run"));
            }
            self.push(TokenKind::DecNum, text, start);
        }

        Ok(())
    }

    fn lex_radix_number(&mut self, start: (usize, usize, usize), kind: TokenKind, digit: impl Fn(char) -> bool) {
        let mut text = String::new();
        text.push(self.bump().expect("peeked '0'"));
        text.push(self.bump().expect("peeked radix letter"));
        while let Some(&c) = self.chars.peek() {
            if digit(c) {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        self.push(kind, text, start);
    }

    fn lex_float_from_dot(&mut self, start: (usize, usize, usize)) -> Result<(), SyntaxError> {
        let mut text = String::new();
        text.push(self.bump().expect("peeked dot"));
        text.push_str(&self.take_digits());
        self.append_optional_exponent(&mut text);
        self.push(TokenKind::Float, text, start);
        Ok(())
    }

    fn take_digits(&mut self) -> String {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        text
    }

    /// Whether an exponent marker at offset `at` begins a well-formed
    /// exponent (optional sign, then at least one digit), without consuming.
    fn exponent_follows_at(&self, at: usize) -> bool {
        let mut n = at + 1;
        if matches!(self.peek_at(n), Some('+') | Some('-')) {
            n += 1;
        }
        matches!(self.peek_at(n), Some(c) if c.is_ascii_digit())
    }

    fn append_optional_exponent(&mut self, text: &mut String) {
        if !matches!(self.peek_at(0), Some('e') | Some('E')) || !self.exponent_follows_at(0) {
            return;
        }
        text.push(self.bump().expect("peeked exponent marker"));
        if matches!(self.chars.peek(), Some('+') | Some('-')) {
            text.push(self.bump().expect("peeked exponent sign"));
        }
        text.push_str(&self.take_digits());
    }

    fn lex_operator(&mut self, start: (usize, usize, usize)) -> Result<(), SyntaxError> {
        let mut text = String::new();

        loop {
            let Some(&next) = self.chars.peek() else { break };
            let mut candidate = text.clone();
            candidate.push(next);

            if operators::can_extend(&candidate) {
                text = candidate;
                self.bump();
                continue;
            }

            break;
        }

        if text.is_empty() {
            let found = self.bump().expect("peeked at least one char to enter lex_operator");
            return Err(self.err(SyntaxErrorKind::IllegalCharacter { found }, start));
        }

        match operators::get(&text) {
            Some(kind) => {
                self.push(kind, text, start);
                Ok(())
            }
            None => Err(self.err(SyntaxErrorKind::IllegalCharacter { found: text.chars().next().unwrap() }, start)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Scanner::new(src).scan().unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn leading_zero_run_splits_into_separate_dec_nums() {
        assert_eq!(kinds("007"), vec![TokenKind::DecNum, TokenKind::DecNum, TokenKind::DecNum]);
    }

    #[test]
    fn plain_decimal_is_one_token() {
        assert_eq!(kinds("1024"), vec![TokenKind::DecNum]);
    }

    #[test]
    fn float_with_exponent() {
        assert_eq!(kinds("1.5e-10"), vec![TokenKind::Float]);
    }

    #[test]
    fn four_spaces_are_one_tab_three_are_one_space() {
        assert_eq!(kinds("    "), vec![TokenKind::Tab]);
        assert_eq!(kinds("   "), vec![TokenKind::Space]);
    }

    #[test]
    fn mixing_tab_char_and_four_space_tab_is_fatal() {
        let err = Scanner::new("\tx\n    y\n").scan().unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::MixedIndent);
    }

    #[test]
    fn consistent_four_space_indentation_is_fine() {
        assert!(Scanner::new("    x\n    y\n").scan().is_ok());
    }

    #[test]
    fn docstring_beats_string_on_triple_quote() {
        assert_eq!(kinds("\"\"\"hi\"\"\""), vec![TokenKind::Docstr]);
        assert_eq!(kinds("\"hi\""), vec![TokenKind::String]);
    }

    #[test]
    fn illegal_character_is_reported() {
        let err = Scanner::new("a $ b").scan().unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::IllegalCharacter { found: '$' });
    }
}

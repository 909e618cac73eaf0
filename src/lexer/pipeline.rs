//! The whitespace pipeline (spec §4.2): ten ordered filters that turn the
//! scanner's flat token list into the structural stream `tokenize` hands to
//! the parser. Each filter is a small, independently testable function over
//! a `Vec<Token>` — the teacher's `Tokens`/`ParseState` already model a
//! filter stage as "a vector plus a cursor" rather than a true coroutine, so
//! materializing each stage here and handing the final one to
//! [`super::stream::TokenStream`] keeps the same shape without needing any
//! coroutine machinery (spec §9, "Lazy stream filters").

use crate::error::{SyntaxError, SyntaxErrorKind};

use super::token::{Token, TokenKind};

/// Run the whole chain, in the exact order spec §4.2 lists.
pub fn run(tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let tokens = annotate_columns(tokens);
    let tokens = remove_double_newline(tokens);
    let tokens = add_last_newline(tokens);
    let tokens = indent_tracker(tokens)?;
    let tokens = discard_noise(tokens);
    let tokens = collapse_unnecessary_multiline(tokens)?;
    let tokens = skip_begin_newline(tokens);
    let tokens = skip_after(tokens);
    let tokens = substitute_endstmt(tokens);
    let tokens = swap_docstr_indent(tokens);
    Ok(tokens)
}

/// 1. The scanner already stamps every token with its 1-based line/column
/// as it scans, so there is nothing left for this stage to compute. Kept as
/// an explicit identity stage so the pipeline's ten steps are all visible
/// and independently callable, matching spec §4.2's numbering.
fn annotate_columns(tokens: Vec<Token>) -> Vec<Token> {
    tokens
}

/// 2. Collapse runs of consecutive NEWLINE tokens into one. Needed because
/// comment removal (done inline by the scanner) can leave two NEWLINEs
/// adjacent that weren't adjacent in the source text.
fn remove_double_newline(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for tok in tokens {
        if tok.kind == TokenKind::Newline && out.last().map(|t| t.kind) == Some(TokenKind::Newline) {
            continue;
        }
        out.push(tok);
    }
    out
}

/// 3. Append a synthetic NEWLINE if the input didn't end in one, so the
/// final logical line always terminates and `indent_tracker` always has a
/// trailing NEWLINE to dedent against.
fn add_last_newline(mut tokens: Vec<Token>) -> Vec<Token> {
    let needs_one = !matches!(tokens.last(), Some(t) if t.kind == TokenKind::Newline);
    if needs_one {
        let (byte_index, line, column) = tokens
            .last()
            .map(|t| (t.byte_index + t.text.len(), t.line, t.column + t.text.chars().count()))
            .unwrap_or((0, 1, 1));
        tokens.push(Token::new(TokenKind::Newline, "", byte_index, line, column));
    }
    tokens
}

/// 4. The heart of the pipeline: turns each NEWLINE and the TAB run after it
/// into INDENT, DEDENT, or an unchanged NEWLINE, per spec §4.2 step 4.
fn indent_tracker(tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut indent_level: usize = 0;
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i].kind != TokenKind::Newline {
            out.push(tokens[i].clone());
            i += 1;
            continue;
        }

        let mut newline_tok = tokens[i].clone();
        i += 1;

        loop {
            let mut lvl = 0usize;
            let mut trigger_pos = newline_tok.position();
            let mut j = i;
            let mut blank = false;

            while j < tokens.len() && tokens[j].kind == TokenKind::Tab {
                lvl += 1;
                trigger_pos = tokens[j].position();
                j += 1;

                if j < tokens.len() && tokens[j].kind == TokenKind::Newline {
                    blank = true;
                    break;
                }
                if j < tokens.len() && tokens[j].kind == TokenKind::Space {
                    return Err(SyntaxError::new(SyntaxErrorKind::MisalignedIndent, trigger_pos.0, trigger_pos.1));
                }
            }

            if blank {
                // TAB* NEWLINE is a blank, indented line: pure whitespace.
                // Restart around the NEWLINE we just peeked at, with the
                // indent level untouched.
                newline_tok = tokens[j].clone();
                i = j + 1;
                continue;
            }

            i = j;
            let delta = lvl as isize - indent_level as isize;

            if delta > 1 {
                return Err(SyntaxError::new(SyntaxErrorKind::TooMuchIndenting, trigger_pos.0, trigger_pos.1));
            } else if delta == 1 {
                out.push(Token::new(TokenKind::Indent, "", newline_tok.byte_index, trigger_pos.0, trigger_pos.1));
                indent_level += 1;
            } else if delta < 0 {
                out.push(newline_tok.clone());
                for _ in 0..(-delta) {
                    out.push(Token::new(TokenKind::Dedent, "", newline_tok.byte_index, trigger_pos.0, trigger_pos.1));
                    indent_level -= 1;
                }
            } else {
                out.push(newline_tok.clone());
            }

            break;
        }
    }

    Ok(out)
}

/// 5. Drop SPACE tokens and any TAB that `indent_tracker` didn't consume
/// (i.e. one that doesn't follow a NEWLINE — mid-line whitespace has no
/// structural meaning).
fn discard_noise(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|t| !matches!(t.kind, TokenKind::Space | TokenKind::Tab))
        .collect()
}

/// 6. An INDENT not preceded by `:` is bracketing noise from a
/// parenthesised multi-line expression; strip it and its matching DEDENT.
/// Two INDENTs back to back with no intervening `:` is a fatal error, as is
/// a DEDENT with no matching INDENT.
fn collapse_unnecessary_multiline(tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut legit_stack: Vec<bool> = Vec::new();

    for tok in tokens {
        match tok.kind {
            TokenKind::Indent => {
                let preceded_by_colon = matches!(out.last(), Some(t) if t.kind == TokenKind::Colon);
                let stacked_on_indent = matches!(out.last(), Some(t) if t.kind == TokenKind::Indent);
                if !preceded_by_colon && stacked_on_indent {
                    return Err(SyntaxError::new(SyntaxErrorKind::SpuriousIndent, tok.line, tok.column));
                }
                legit_stack.push(preceded_by_colon);
                if preceded_by_colon {
                    out.push(tok);
                }
            }
            TokenKind::Dedent => match legit_stack.pop() {
                Some(true) => out.push(tok),
                Some(false) => {}
                None => return Err(SyntaxError::new(SyntaxErrorKind::UnbalancedIndent, tok.line, tok.column)),
            },
            _ => out.push(tok),
        }
    }

    if !legit_stack.is_empty() {
        return Err(SyntaxError::new(SyntaxErrorKind::UnbalancedIndent, 0, 0));
    }

    Ok(out)
}

/// 7. Drop a leading NEWLINE, so a file that opens with blank lines doesn't
/// hand the parser a spurious empty statement terminator.
fn skip_begin_newline(mut tokens: Vec<Token>) -> Vec<Token> {
    if matches!(tokens.first(), Some(t) if t.kind == TokenKind::Newline) {
        tokens.remove(0);
    }
    tokens
}

/// 8. A NEWLINE right after `;`, `,`, or a DOCSTR does not end a logical
/// statement — delete it.
fn skip_after(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for tok in tokens {
        if tok.kind == TokenKind::Newline {
            let suppress = matches!(
                out.last().map(|t| t.kind),
                Some(TokenKind::Semicolon) | Some(TokenKind::Comma) | Some(TokenKind::Docstr)
            );
            if suppress {
                continue;
            }
        }
        out.push(tok);
    }
    out
}

/// 9. The remaining NEWLINEs are statement terminators; rename them to
/// ENDSTMT. A literal `;` is just another spelling of the same terminator
/// (spec GLOSSARY: "ENDSTMT — originally a `;` or a significant newline"),
/// so it is folded into ENDSTMT here too rather than surviving as its own
/// punctuation kind.
fn substitute_endstmt(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .map(|mut t| {
            if matches!(t.kind, TokenKind::Newline | TokenKind::Semicolon) {
                t.kind = TokenKind::Endstmt;
            }
            t
        })
        .collect()
}

/// 10. When a DOCSTR immediately precedes the INDENT that begins a
/// function body, emit INDENT first. This lets the parser require "DOCSTR
/// is the first statement of the body, right after INDENT" without
/// lookahead past INDENT.
fn swap_docstr_indent(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = tokens;
    let mut i = 0;
    while i + 1 < out.len() {
        if out[i].kind == TokenKind::Docstr && out[i + 1].kind == TokenKind::Indent {
            out.swap(i, i + 1);
        }
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: TokenKind, line: usize, column: usize) -> Token {
        Token::new(kind, "", 0, line, column)
    }

    #[test]
    fn remove_double_newline_collapses_runs() {
        let input = vec![tok(TokenKind::Newline, 1, 1), tok(TokenKind::Newline, 2, 1), tok(TokenKind::Name, 2, 1)];
        let out = remove_double_newline(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].kind, TokenKind::Newline);
        assert_eq!(out[1].kind, TokenKind::Name);
    }

    #[test]
    fn swap_docstr_indent_reorders_adjacent_pair() {
        let input = vec![tok(TokenKind::Docstr, 2, 5), tok(TokenKind::Indent, 2, 5)];
        let out = swap_docstr_indent(input);
        assert_eq!(out[0].kind, TokenKind::Indent);
        assert_eq!(out[1].kind, TokenKind::Docstr);
    }

    #[test]
    fn collapse_strips_bracket_noise_pair() {
        let input = vec![
            tok(TokenKind::LParen, 1, 1),
            tok(TokenKind::Indent, 2, 1),
            tok(TokenKind::Name, 2, 1),
            tok(TokenKind::Dedent, 3, 1),
            tok(TokenKind::RParen, 3, 2),
        ];
        let out = collapse_unnecessary_multiline(input).unwrap();
        assert!(!out.iter().any(|t| matches!(t.kind, TokenKind::Indent | TokenKind::Dedent)));
    }

    #[test]
    fn collapse_keeps_indent_after_colon() {
        let input = vec![
            tok(TokenKind::Colon, 1, 5),
            tok(TokenKind::Indent, 2, 1),
            tok(TokenKind::Name, 2, 1),
            tok(TokenKind::Dedent, 3, 1),
        ];
        let out = collapse_unnecessary_multiline(input).unwrap();
        assert_eq!(out[0].kind, TokenKind::Indent);
        assert_eq!(out.last().unwrap().kind, TokenKind::Dedent);
    }
}

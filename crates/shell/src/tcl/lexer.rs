// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backslash substitution and word splitting.

use std::fmt;

use super::DialectError;

/// A Tcl word, or a character that would trigger Tcl evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TclToken {
    Word(String),
    /// Unquoted `[`, `]`, `$` or `;`.
    Control(char),
}

impl fmt::Display for TclToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TclToken::Word(w) => f.write_str(w),
            TclToken::Control(c) => write!(f, "{c}"),
        }
    }
}

/// Apply Tcl backslash substitution to a whole line.
///
/// `\<newline>` (with the following indentation) collapses to one space;
/// unknown escapes drop the backslash.
pub fn resolve_escapes(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\n') => {
                while chars.next_if(|c| *c == ' ' || *c == '\t').is_some() {}
                out.push(' ');
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Split a line into words.
///
/// A word that starts with `{` runs to the matching `}` (nesting, content kept
/// verbatim); one that starts with `"` runs to the next `"`. In bare words the
/// Tcl evaluation characters become [`TclToken::Control`].
pub fn tokenize(line: &str) -> Result<Vec<TclToken>, DialectError> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '{' => {
                chars.next();
                let mut depth = 1usize;
                let mut word = String::new();
                loop {
                    match chars.next() {
                        Some((_, '{')) => {
                            depth += 1;
                            word.push('{');
                        }
                        Some((_, '}')) => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                            word.push('}');
                        }
                        Some((_, c)) => word.push(c),
                        None => return Err(DialectError::UnterminatedBrace { offset: start }),
                    }
                }
                tokens.push(TclToken::Word(word));
            }
            '"' => {
                chars.next();
                let mut word = String::new();
                loop {
                    match chars.next() {
                        Some((_, '"')) => break,
                        Some((_, c)) => word.push(c),
                        None => return Err(DialectError::UnterminatedQuote { offset: start }),
                    }
                }
                tokens.push(TclToken::Word(word));
            }
            '[' | ']' | '$' | ';' => {
                chars.next();
                tokens.push(TclToken::Control(ch));
            }
            _ => {
                let mut word = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_whitespace() || matches!(c, '[' | ']' | '$' | ';') {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                tokens.push(TclToken::Word(word));
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;

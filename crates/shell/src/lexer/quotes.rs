// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote handling (single and double quoted strings).

use super::{Lexer, LexerError};
use crate::token::Span;

impl Lexer<'_> {
    /// Opening quote at `start` has already been consumed.
    pub(super) fn lex_single_quoted(&mut self, start: usize) -> Result<String, LexerError> {
        let mut content = String::new();
        for (_, ch) in self.chars.by_ref() {
            if ch == '\'' {
                return Ok(content);
            }
            content.push(ch);
        }
        Err(LexerError::UnterminatedSingleQuote { span: Span::new(start, self.input.len()) })
    }

    /// Inside double quotes a backslash only escapes `"` and `\`; before any
    /// other character it is kept verbatim.
    pub(super) fn lex_double_quoted(&mut self, start: usize) -> Result<String, LexerError> {
        let mut content = String::new();
        while let Some((pos, ch)) = self.chars.next() {
            match ch {
                '"' => return Ok(content),
                '\\' => match self.chars.next() {
                    Some((_, '"')) => content.push('"'),
                    Some((_, '\\')) => content.push('\\'),
                    Some((_, other)) => {
                        content.push('\\');
                        content.push(other);
                    }
                    None => {
                        return Err(LexerError::TrailingBackslash { span: Span::new(pos, pos + 1) })
                    }
                },
                _ => content.push(ch),
            }
        }
        Err(LexerError::UnterminatedDoubleQuote { span: Span::new(start, self.input.len()) })
    }
}

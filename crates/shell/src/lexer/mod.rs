// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell lexer for the test-script command language.
//!
//! Quotes and escapes are resolved here, so every [`TokenKind::Word`] carries
//! the final argument text.

mod operators;
mod quotes;

use super::token::{Span, Token, TokenKind};

pub use crate::error::LexerError;

/// Shell lexer that tokenizes one script into words and operators.
pub struct Lexer<'a> {
    /// The input string being lexed.
    input: &'a str,
    /// Peekable iterator over character indices.
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    /// Treat `\` as a literal character outside of double quotes.
    win32_escapes: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, chars: input.char_indices().peekable(), win32_escapes: false }
    }

    /// Keep backslashes literal, as Windows paths need.
    pub fn win32_escapes(mut self, enabled: bool) -> Self {
        self.win32_escapes = enabled;
        self
    }

    /// Tokenize the entire input with POSIX escaping.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
        Lexer::new(input).into_tokens()
    }

    /// Consume the lexer, returning all tokens.
    pub fn into_tokens(mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::with_capacity(self.input.len() / 4 + 1);
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    #[inline]
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn current_position(&self) -> usize {
        self.chars.clone().next().map(|(pos, _)| pos).unwrap_or(self.input.len())
    }

    fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        self.skip_whitespace();

        let Some(&(pos, ch)) = self.chars.peek() else {
            return Ok(None);
        };

        match ch {
            '&' => Ok(Some(self.lex_ampersand(pos))),
            '|' => Ok(Some(self.lex_pipe(pos))),
            ';' => {
                self.chars.next();
                Ok(Some(Token::new(TokenKind::Semi, Span::new(pos, pos + 1))))
            }
            '>' | '<' => Ok(Some(self.lex_redirect(pos, None))),
            _ => Ok(Some(self.lex_word(pos)?)),
        }
    }

    /// Every whitespace character separates words, newlines included.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.chars.next();
        }
    }

    /// Lex one argument, joining adjacent quoted and unquoted pieces.
    ///
    /// An unquoted run of digits directly followed by `<` or `>` becomes the
    /// descriptor of a redirect token (`2>` lexes as a single operator).
    fn lex_word(&mut self, start: usize) -> Result<Token, LexerError> {
        let mut word = String::new();
        let mut quoted = false;

        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                c if c.is_whitespace() => break,
                '|' | '&' | ';' => break,
                '<' | '>' => {
                    if quoted || word.is_empty() || !word.chars().all(|c| c.is_ascii_digit()) {
                        break;
                    }
                    let fd = word.parse::<u32>().map_err(|_| LexerError::InvalidDescriptor {
                        text: word.clone(),
                        span: Span::new(start, pos),
                    })?;
                    return Ok(self.lex_redirect(start, Some(fd)));
                }
                '\'' => {
                    self.chars.next();
                    word.push_str(&self.lex_single_quoted(pos)?);
                    quoted = true;
                }
                '"' => {
                    self.chars.next();
                    word.push_str(&self.lex_double_quoted(pos)?);
                    quoted = true;
                }
                '\\' if !self.win32_escapes => {
                    self.chars.next();
                    match self.chars.next() {
                        Some((_, escaped)) => word.push(escaped),
                        None => {
                            return Err(LexerError::TrailingBackslash {
                                span: Span::new(pos, pos + 1),
                            })
                        }
                    }
                }
                _ => {
                    word.push(ch);
                    self.chars.next();
                }
            }
        }

        let span = Span::new(start, self.current_position());
        if !quoted && word == "!" {
            return Ok(Token::new(TokenKind::Bang, span));
        }
        Ok(Token::new(TokenKind::Word(word), span))
    }
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;

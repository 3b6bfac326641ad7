// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operators (`&`, `|`, `;`) and redirections.

use super::Lexer;
use crate::ast::RedirectOp;
use crate::token::{Span, Token, TokenKind};

impl Lexer<'_> {
    /// `&&`, `&>` or `&`.
    pub(super) fn lex_ampersand(&mut self, start: usize) -> Token {
        self.chars.next();

        match self.peek_char() {
            Some('&') => {
                self.chars.next();
                Token::new(TokenKind::And, Span::new(start, start + 2))
            }
            Some('>') => {
                self.chars.next();
                Token::new(
                    TokenKind::Redirect { op: RedirectOp::Both, fd: None },
                    Span::new(start, start + 2),
                )
            }
            _ => Token::new(TokenKind::Ampersand, Span::new(start, start + 1)),
        }
    }

    pub(super) fn lex_pipe(&mut self, start: usize) -> Token {
        self.chars.next();

        if self.peek_char() == Some('|') {
            self.chars.next();
            Token::new(TokenKind::Or, Span::new(start, start + 2))
        } else {
            Token::new(TokenKind::Pipe, Span::new(start, start + 1))
        }
    }

    /// Called with `>` or `<` as the next character. `start` covers any
    /// descriptor digits already consumed.
    pub(super) fn lex_redirect(&mut self, start: usize, fd: Option<u32>) -> Token {
        let op = match self.chars.next() {
            Some((_, '>')) => match self.peek_char() {
                Some('>') => {
                    self.chars.next();
                    RedirectOp::Append
                }
                Some('&') => {
                    self.chars.next();
                    RedirectOp::DupOut
                }
                _ => RedirectOp::Out,
            },
            _ => match self.peek_char() {
                Some('&') => {
                    self.chars.next();
                    RedirectOp::DupIn
                }
                _ => RedirectOp::In,
            },
        };
        Token::new(TokenKind::Redirect { op, fd }, Span::new(start, self.current_position()))
    }
}

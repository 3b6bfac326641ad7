// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types for the shell lexer.

use std::fmt;

use crate::ast::RedirectOp;
pub use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A fully unquoted argument (quotes and escapes already resolved).
    Word(String),
    /// `&&`
    And,
    /// `||`
    Or,
    /// `|`
    Pipe,
    /// `;`
    Semi,
    /// `&`
    Ampersand,
    /// `!` as a standalone word.
    Bang,
    /// `<`, `>`, `>>`, `>&`, `&>`, `<&`, optionally with a descriptor prefix.
    Redirect { op: RedirectOp, fd: Option<u32> },
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(s) => write!(f, "word '{}'", s),
            TokenKind::And => write!(f, "'&&'"),
            TokenKind::Or => write!(f, "'||'"),
            TokenKind::Pipe => write!(f, "'|'"),
            TokenKind::Semi => write!(f, "';'"),
            TokenKind::Ampersand => write!(f, "'&'"),
            TokenKind::Bang => write!(f, "'!'"),
            TokenKind::Redirect { op, fd: Some(fd) } => write!(f, "'{}{}'", fd, op.as_str()),
            TokenKind::Redirect { op, fd: None } => write!(f, "'{}'", op.as_str()),
        }
    }
}

impl TokenKind {
    /// Sequencing operators that join two pipelines.
    pub fn is_sequence_operator(&self) -> bool {
        matches!(self, TokenKind::And | TokenKind::Or | TokenKind::Semi | TokenKind::Ampersand)
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;

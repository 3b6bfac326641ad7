// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tcl `exec` dialect used by legacy test scripts.
//!
//! A legacy line goes through [`resolve_escapes`], then [`tokenize`], then
//! [`ExecBuilder::parse_pipeline`], producing an ordinary [`Pipeline`](crate::Pipeline)
//! with pipefail set.

mod exec;
mod lexer;

use thiserror::Error;

pub use exec::ExecBuilder;
pub use lexer::{resolve_escapes, tokenize, TclToken};

/// Errors from the Tcl lexer or the `exec` pipeline builder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialectError {
    #[error("unterminated brace starting at offset {offset}")]
    UnterminatedBrace { offset: usize },

    #[error("unterminated quote starting at offset {offset}")]
    UnterminatedQuote { offset: usize },

    #[error("empty command in exec pipeline")]
    EmptyCommand,

    #[error("missing target for '{op}'")]
    MissingTarget { op: String },

    #[error("unsupported exec redirection '{word}'")]
    UnsupportedRedirect { word: String },

    #[error("background exec is not supported")]
    Background,
}

impl DialectError {
    /// True for errors raised while splitting the line into words.
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, Self::UnterminatedBrace { .. } | Self::UnterminatedQuote { .. })
    }
}

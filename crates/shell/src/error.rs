// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer failures for the test-script command language.

use crate::span::{diagnostic_context, Span};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("unterminated single quote at position {}", span.start)]
    UnterminatedSingleQuote { span: Span },

    #[error("unterminated double quote at position {}", span.start)]
    UnterminatedDoubleQuote { span: Span },

    /// A `\` with nothing after it.
    #[error("trailing backslash at position {}", span.start)]
    TrailingBackslash { span: Span },

    /// Digits before a redirect operator that do not fit a descriptor.
    #[error("invalid file descriptor '{text}' at position {}", span.start)]
    InvalidDescriptor { text: String, span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedSingleQuote { span }
            | Self::UnterminatedDoubleQuote { span }
            | Self::TrailingBackslash { span }
            | Self::InvalidDescriptor { span, .. } => *span,
        }
    }

    /// The message with the input line and a caret under the error.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

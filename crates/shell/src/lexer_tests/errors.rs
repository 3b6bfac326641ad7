// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error cases.

use crate::lexer::{Lexer, LexerError};
use crate::token::Span;

lex_error_tests! {
    unterminated_single: "echo 'abc" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_double: "echo \"abc" => LexerError::UnterminatedDoubleQuote { .. },
    trailing_backslash: "echo abc\\" => LexerError::TrailingBackslash { .. },
    trailing_backslash_in_double_quotes: "echo \"abc\\" => LexerError::TrailingBackslash { .. },
    descriptor_overflow: "cmd 99999999999> f" => LexerError::InvalidDescriptor { .. },
}

#[test]
fn unterminated_quote_span_runs_to_end() {
    let err = Lexer::tokenize("echo 'abc").unwrap_err();
    assert_eq!(err.span(), Span::new(5, 9));
}

#[test]
fn win32_trailing_backslash_is_literal() {
    let tokens = Lexer::new("dir C:\\").win32_escapes(true).into_tokens().unwrap();
    assert_eq!(tokens.len(), 2);
}

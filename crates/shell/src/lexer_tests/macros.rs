// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Table-style lexer tests: `name: "input" => [tokens]`.

use crate::ast::RedirectOp;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

pub(super) fn lex(input: &str, win32: bool) -> Vec<Token> {
    Lexer::new(input)
        .win32_escapes(win32)
        .into_tokens()
        .unwrap_or_else(|e| panic!("failed to tokenize {input:?}: {e}"))
}

pub(super) fn kinds(input: &str, win32: bool) -> Vec<TokenKind> {
    lex(input, win32).into_iter().map(|t| t.kind).collect()
}

pub(super) fn word(s: &str) -> TokenKind {
    TokenKind::Word(s.to_string())
}

pub(super) fn redir(op: RedirectOp, fd: Option<u32>) -> TokenKind {
    TokenKind::Redirect { op, fd }
}

macro_rules! lex_tests {
    ($($name:ident: $input:expr => [$($token:expr),* $(,)?]),* $(,)?) => {$(
        #[test]
        fn $name() {
            assert_eq!(super::macros::kinds($input, false), vec![$($token),*], "input: {:?}", $input);
        }
    )*};
}

/// Backslashes stay literal.
macro_rules! win32_lex_tests {
    ($($name:ident: $input:expr => [$($token:expr),* $(,)?]),* $(,)?) => {$(
        #[test]
        fn $name() {
            assert_eq!(super::macros::kinds($input, true), vec![$($token),*], "input: {:?}", $input);
        }
    )*};
}

macro_rules! lex_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {$(
        #[test]
        fn $name() {
            let result = Lexer::tokenize($input);
            assert!(matches!(result, Err($error)), "{:?} => {:?}", $input, result);
        }
    )*};
}

/// Byte ranges of each token: `name: "input" => [(start, end), ...]`.
macro_rules! span_tests {
    ($($name:ident: $input:expr => [$(($start:expr, $end:expr)),* $(,)?]),* $(,)?) => {$(
        #[test]
        fn $name() {
            let spans: Vec<(usize, usize)> = super::macros::lex($input, false)
                .iter()
                .map(|t| (t.span.start, t.span.end))
                .collect();
            assert_eq!(spans, vec![$(($start, $end)),*], "input: {:?}", $input);
        }
    )*};
}

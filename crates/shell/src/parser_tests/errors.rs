// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::macros::parse_error_tests;
use crate::lexer::LexerError;
use crate::parse_error::ParseError;
use crate::parser::Parser;
use crate::token::TokenKind;

parse_error_tests! {
    empty_input: "" => ParseError::Empty,
    whitespace_input: "  \n " => ParseError::Empty,
    pipe_at_start: "| cmd" => ParseError::UnexpectedToken { .. },
    and_at_start: "&& cmd" => ParseError::UnexpectedToken { .. },
    and_at_end: "cmd &&" => ParseError::UnexpectedEof { .. },
    trailing_semi: "cmd ;" => ParseError::UnexpectedEof { .. },
    pipe_at_end: "cmd |" => ParseError::UnexpectedEof { .. },
    double_pipe_stage: "a | | b" => ParseError::UnexpectedToken { .. },
    missing_redirect_target: "cmd >" => ParseError::UnexpectedEof { .. },
    redirect_into_operator: "cmd > | b" => ParseError::UnexpectedToken { .. },
    redirect_as_program: "> out" => ParseError::UnexpectedToken { .. },
    lone_bang: "!" => ParseError::UnexpectedEof { .. },
    lexer_failure: "echo 'oops" => ParseError::Lexer(LexerError::UnterminatedSingleQuote { .. }),
}

#[test]
fn unexpected_token_reports_what_was_found() {
    let err = Parser::parse_str("a && || b").unwrap_err();
    match err {
        ParseError::UnexpectedToken { found, expected, span } => {
            assert_eq!(found, TokenKind::Or);
            assert_eq!(expected, "command");
            assert_eq!((span.start, span.end), (5, 7));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn missing_operand_names_the_operator() {
    let err = Parser::parse_str("a ||").unwrap_err();
    assert_eq!(err.to_string(), "unexpected end of input, expected command after '||'");
    assert!(err.diagnostic("a ||").is_none());
}

#[test]
fn diagnostic_points_into_the_line() {
    let err = Parser::parse_str("echo ; ; x").unwrap_err();
    let diagnostic = err.diagnostic("echo ; ; x").unwrap();
    assert!(diagnostic.contains("echo ; ; x"), "{diagnostic}");
    assert!(diagnostic.contains('^'), "{diagnostic}");
}

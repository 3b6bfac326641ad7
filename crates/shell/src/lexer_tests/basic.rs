// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Basic lexer tests: words, operators, whitespace, negation.

use super::macros::word;
use crate::token::TokenKind;

lex_tests! {
    empty_input: "" => [],
    whitespace_only: "   \t  " => [],
    newlines_are_whitespace: "echo\n  a" => [word("echo"), word("a")],
}

lex_tests! {
    single_word: "echo" => [word("echo")],
    simple_words: "echo hello world" => [word("echo"), word("hello"), word("world")],
    multiple_spaces: "ls   -la" => [word("ls"), word("-la")],
    path_arguments: "cat ./path/to/file.txt" => [word("cat"), word("./path/to/file.txt")],
    dollar_is_literal: "echo $HOME" => [word("echo"), word("$HOME")],
}

span_tests! {
    single_word_span: "echo" => [(0, 4)],
    simple_words_span: "echo hello world" => [(0, 4), (5, 10), (11, 16)],
    operator_spans: "a && b" => [(0, 1), (2, 4), (5, 6)],
}

lex_tests! {
    and_operator: "cmd1 && cmd2" => [word("cmd1"), TokenKind::And, word("cmd2")],
    or_operator: "cmd1 || cmd2" => [word("cmd1"), TokenKind::Or, word("cmd2")],
    pipe_operator: "ls | grep foo" => [word("ls"), TokenKind::Pipe, word("grep"), word("foo")],
    semicolon: "a; b" => [word("a"), TokenKind::Semi, word("b")],
    background: "sleep 1 &" => [word("sleep"), word("1"), TokenKind::Ampersand],
    operators_without_spaces: "a&&b||c|d;e" => [
        word("a"), TokenKind::And, word("b"), TokenKind::Or, word("c"),
        TokenKind::Pipe, word("d"), TokenKind::Semi, word("e"),
    ],
}

lex_tests! {
    bang_alone_is_negation: "! false" => [TokenKind::Bang, word("false")],
    bang_inside_word_is_literal: "echo a!b" => [word("echo"), word("a!b")],
    quoted_bang_is_literal: "echo '!'" => [word("echo"), word("!")],
}

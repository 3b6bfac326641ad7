// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoting and escaping.

use super::macros::word;
use crate::token::TokenKind;

lex_tests! {
    single_quotes_keep_spaces: "echo 'a b'" => [word("echo"), word("a b")],
    single_quotes_keep_backslashes: r"echo 'a\nb'" => [word("echo"), word(r"a\nb")],
    double_quotes_keep_spaces: r#"echo "a b""# => [word("echo"), word("a b")],
    double_quote_escapes_quote: r#"echo "say \"hi\"""# => [word("echo"), word(r#"say "hi""#)],
    double_quote_escapes_backslash: r#"echo "a\\b""# => [word("echo"), word(r"a\b")],
    double_quote_keeps_other_escapes: r#"echo "a\nb""# => [word("echo"), word(r"a\nb")],
    operators_inside_quotes: "echo '&& | ;'" => [word("echo"), word("&& | ;")],
    adjacent_pieces_join: r#"echo a'b'"c"d"# => [word("echo"), word("abcd")],
    empty_quotes_are_a_word: "echo ''" => [word("echo"), word("")],
    single_quote_escape_idiom: r"echo 'it'\''s'" => [word("echo"), word("it's")],
}

lex_tests! {
    backslash_escapes_space: r"echo a\ b" => [word("echo"), word("a b")],
    backslash_escapes_operator: r"echo \|" => [word("echo"), word("|")],
    backslash_escapes_redirect: r"echo \>x" => [word("echo"), word(">x")],
}

win32_lex_tests! {
    win32_backslash_is_literal: r"type C:\dir\file.txt" => [word("type"), word(r"C:\dir\file.txt")],
    win32_quotes_still_group: r#"echo "C:\Program Files""# => [word("echo"), word(r"C:\Program Files")],
    win32_operators_still_split: r"a\b|c" => [word(r"a\b"), TokenKind::Pipe, word("c")],
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection operators and descriptor prefixes.

use super::macros::{redir, word};
use crate::ast::RedirectOp;
use crate::token::TokenKind;

lex_tests! {
    out: "echo a > f" => [word("echo"), word("a"), redir(RedirectOp::Out, None), word("f")],
    append: "echo a >> f" => [word("echo"), word("a"), redir(RedirectOp::Append, None), word("f")],
    input: "cat < f" => [word("cat"), redir(RedirectOp::In, None), word("f")],
    dup_out: "cmd >& f" => [word("cmd"), redir(RedirectOp::DupOut, None), word("f")],
    both: "cmd &> f" => [word("cmd"), redir(RedirectOp::Both, None), word("f")],
    dup_in: "cmd <& 3" => [word("cmd"), redir(RedirectOp::DupIn, None), word("3")],
    attached_target: "echo a >f" => [word("echo"), word("a"), redir(RedirectOp::Out, None), word("f")],
}

lex_tests! {
    stderr_to_file: "cmd 2> err" => [word("cmd"), redir(RedirectOp::Out, Some(2)), word("err")],
    stderr_append: "cmd 2>> err" => [word("cmd"), redir(RedirectOp::Append, Some(2)), word("err")],
    stderr_to_stdout: "cmd 2>&1" => [word("cmd"), redir(RedirectOp::DupOut, Some(2)), word("1")],
    stdin_with_fd: "cmd 0< in" => [word("cmd"), redir(RedirectOp::In, Some(0)), word("in")],
    high_fd: "cmd 3> f" => [word("cmd"), redir(RedirectOp::Out, Some(3)), word("f")],
}

lex_tests! {
    digits_then_space_is_a_word: "echo 2 > f" => [
        word("echo"), word("2"), redir(RedirectOp::Out, None), word("f"),
    ],
    quoted_digits_are_not_a_descriptor: "echo '2'> f" => [
        word("echo"), word("2"), redir(RedirectOp::Out, None), word("f"),
    ],
    mixed_word_ends_before_redirect: "echo a2>f" => [
        word("echo"), word("a2"), redir(RedirectOp::Out, None), word("f"),
    ],
    pipe_after_redirect: "a 2>&1 | b" => [
        word("a"), redir(RedirectOp::DupOut, Some(2)), word("1"), TokenKind::Pipe, word("b"),
    ],
}

span_tests! {
    fd_redirect_span: "a 2>&1" => [(0, 1), (2, 5), (5, 6)],
}

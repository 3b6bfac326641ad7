// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::single_command;
use super::macros::simple_cmd_tests;
use crate::ast::{Redirect, RedirectOp};
use crate::parser::Parser;
use yare::parameterized;

simple_cmd_tests! {
    bare_program: "true" => ["true"],
    program_with_args: "echo hello world" => ["echo", "hello", "world"],
    quoted_arg: "echo 'a b'" => ["echo", "a b"],
    bang_as_argument: "echo !" => ["echo", "!"],
    redirect_not_in_args: "echo hi > out" => ["echo", "hi"],
    args_after_redirect: "cat < in -n" => ["cat", "-n"],
}

#[parameterized(
    stdout = { "cmd > out", Redirect::new(RedirectOp::Out, None, "out") },
    append = { "cmd >> out", Redirect::new(RedirectOp::Append, None, "out") },
    stdin = { "cmd < in", Redirect::new(RedirectOp::In, None, "in") },
    stderr = { "cmd 2> err", Redirect::new(RedirectOp::Out, Some(2), "err") },
    stderr_to_stdout = { "cmd 2>&1", Redirect::new(RedirectOp::DupOut, Some(2), "1") },
    both = { "cmd &> all", Redirect::new(RedirectOp::Both, None, "all") },
    dup_out_file = { "cmd >& all", Redirect::new(RedirectOp::DupOut, None, "all") },
    dup_in = { "cmd <& 0", Redirect::new(RedirectOp::DupIn, None, "0") },
)]
fn single_redirect(input: &str, expected: Redirect) {
    let node = Parser::parse_str(input).unwrap();
    assert_eq!(single_command(&node).redirects, vec![expected]);
}

#[test]
fn redirects_keep_source_order() {
    let node = Parser::parse_str("cmd 2>&1 > out 2> err").unwrap();
    let cmd = single_command(&node);
    assert_eq!(
        cmd.redirects,
        vec![
            Redirect::new(RedirectOp::DupOut, Some(2), "1"),
            Redirect::new(RedirectOp::Out, None, "out"),
            Redirect::new(RedirectOp::Out, Some(2), "err"),
        ]
    );
}

#[test]
fn win32_paths_survive() {
    let node = Parser::new(r"type C:\tmp\x.txt").win32_escapes(true).parse().unwrap();
    assert_eq!(single_command(&node).args, vec!["type", r"C:\tmp\x.txt"]);
}

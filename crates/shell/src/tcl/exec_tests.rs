// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

fn build(line: &str) -> Result<Pipeline, DialectError> {
    ExecBuilder::new(line.split_whitespace().map(String::from).collect()).parse_pipeline()
}

#[test]
fn single_command_is_pipefail() {
    let pipeline = build("llvm-as foo.ll").unwrap();
    assert!(pipeline.pipe_fail);
    assert!(!pipeline.negate);
    assert_eq!(pipeline.commands, vec![SimpleCommand::new(["llvm-as", "foo.ll"])]);
}

#[test]
fn pipes_split_commands() {
    let pipeline = build("llvm-as < in.ll | opt -O2 | llvm-dis").unwrap();
    let programs: Vec<_> = pipeline.commands.iter().filter_map(SimpleCommand::program).collect();
    assert_eq!(programs, vec!["llvm-as", "opt", "llvm-dis"]);
    assert_eq!(pipeline.commands[0].redirects, vec![Redirect::new(RedirectOp::In, None, "in.ll")]);
}

#[test]
fn pipe_ampersand_merges_stderr() {
    let pipeline = build("tool |& grep error").unwrap();
    assert_eq!(
        pipeline.commands[0].redirects,
        vec![Redirect::new(RedirectOp::DupOut, Some(2), "1")]
    );
    assert!(pipeline.commands[1].redirects.is_empty());
}

#[parameterized(
    stdout_separate = { "cmd > out", Redirect::new(RedirectOp::Out, None, "out") },
    stdout_attached = { "cmd >out", Redirect::new(RedirectOp::Out, None, "out") },
    append = { "cmd >> log", Redirect::new(RedirectOp::Append, None, "log") },
    stderr = { "cmd 2> err", Redirect::new(RedirectOp::Out, Some(2), "err") },
    stderr_attached = { "cmd 2>err", Redirect::new(RedirectOp::Out, Some(2), "err") },
    stderr_append = { "cmd 2>> err", Redirect::new(RedirectOp::Append, Some(2), "err") },
    both = { "cmd >& all", Redirect::new(RedirectOp::Both, None, "all") },
    stdin = { "cmd <in", Redirect::new(RedirectOp::In, None, "in") },
    stderr_to_stdout = { "cmd 2>@1", Redirect::new(RedirectOp::DupOut, Some(2), "1") },
)]
fn redirections(line: &str, expected: Redirect) {
    let pipeline = build(line).unwrap();
    assert_eq!(pipeline.commands[0].args, vec!["cmd"]);
    assert_eq!(pipeline.commands[0].redirects, vec![expected]);
}

#[parameterized(
    leading_pipe = { "| grep x", DialectError::EmptyCommand },
    trailing_pipe = { "cat f |", DialectError::EmptyCommand },
    double_pipe = { "a | | b", DialectError::EmptyCommand },
    missing_target = { "cat >", DialectError::MissingTarget { op: ">".into() } },
    channel = { "cmd >@ stdout", DialectError::UnsupportedRedirect { word: ">@".into() } },
    stderr_channel = { "cmd 2>@stderr", DialectError::UnsupportedRedirect { word: "2>@stderr".into() } },
    here_value = { "cat << text", DialectError::UnsupportedRedirect { word: "<<".into() } },
    append_both = { "cmd >>& log", DialectError::UnsupportedRedirect { word: ">>&".into() } },
    background = { "sleep 1 &", DialectError::Background },
)]
fn builder_errors(line: &str, expected: DialectError) {
    assert_eq!(build(line), Err(expected.clone()));
    assert!(!expected.is_lexer_error());
}

#[test]
fn at_sign_in_plain_argument_is_kept() {
    let pipeline = build("mail user@host 2@x").unwrap();
    assert_eq!(pipeline.commands[0].args, vec!["mail", "user@host", "2@x"]);
}

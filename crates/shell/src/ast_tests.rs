// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn pipe(args: &[&str]) -> CommandNode {
    Pipeline::new(vec![SimpleCommand::new(args.iter().copied())]).into()
}

#[test]
fn chain_is_left_associative() {
    let node = CommandNode::chain([pipe(&["a"]), pipe(&["b"]), pipe(&["c"])], SeqOp::And).unwrap();
    match node {
        CommandNode::Sequence { left, op, right } => {
            assert_eq!(op, SeqOp::And);
            assert_eq!(*right, pipe(&["c"]));
            assert!(matches!(*left, CommandNode::Sequence { .. }));
        }
        other => panic!("expected sequence, got {other:?}"),
    }
}

#[test]
fn chain_of_nothing_is_none() {
    assert_eq!(CommandNode::chain(Vec::new(), SeqOp::Semi), None);
}

#[test]
fn chain_of_one_is_that_node() {
    let node = CommandNode::chain([pipe(&["a"])], SeqOp::Semi).unwrap();
    assert_eq!(node, pipe(&["a"]));
}

#[test]
fn pipelines_are_visited_in_order() {
    let node = CommandNode::chain([pipe(&["a"]), pipe(&["b"]), pipe(&["c"])], SeqOp::Or).unwrap();
    let names: Vec<_> = node.pipelines().iter().map(|p| p.commands[0].args[0].clone()).collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(node.count_simple_commands(), 3);
}

#[test]
fn for_each_pipeline_mut_edits_every_pipeline() {
    let mut node = CommandNode::chain([pipe(&["a"]), pipe(&["b"])], SeqOp::And).unwrap();
    node.for_each_pipeline_mut(&mut |p| p.pipe_fail = true);
    assert!(node.pipelines().iter().all(|p| p.pipe_fail));
}

#[test]
fn quoted_args_wraps_each_argument() {
    let cmd = SimpleCommand::new(["echo", "hello world", ""]);
    assert_eq!(cmd.quoted_args(), r#""echo" "hello world" """#);
}

#[yare::parameterized(
    plain_out = { Redirect::new(RedirectOp::Out, None, "f"), ">f" },
    stderr_append = { Redirect::new(RedirectOp::Append, Some(2), "log"), "2>>log" },
    dup = { Redirect::new(RedirectOp::DupOut, Some(2), "1"), "2>&1" },
    both = { Redirect::new(RedirectOp::Both, None, "all"), "&>all" },
)]
fn redirect_display(redirect: Redirect, expected: &str) {
    assert_eq!(redirect.to_string(), expected);
}

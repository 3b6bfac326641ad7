// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{programs, sequence_parts};
use super::macros::parse_tests;
use crate::ast::{CommandNode, SeqOp};
use crate::parser::Parser;
use yare::parameterized;

parse_tests! {
    two_with_semi: "a; b" => pipelines: 2,
    three_with_semi: "a; b; c" => pipelines: 3,
    mixed_operators: "a && b || c ; d" => pipelines: 4,
}

#[parameterized(
    semi = { "a ; b", SeqOp::Semi },
    and = { "a && b", SeqOp::And },
    or = { "a || b", SeqOp::Or },
    background = { "a & b", SeqOp::Background },
)]
fn operator_kinds(input: &str, expected: SeqOp) {
    let node = Parser::parse_str(input).unwrap();
    let (_, op, _) = sequence_parts(&node);
    assert_eq!(op, expected);
}

#[test]
fn operators_associate_left() {
    // ((a && b) || c)
    let node = Parser::parse_str("a && b || c").unwrap();
    let (left, op, right) = sequence_parts(&node);
    assert_eq!(op, SeqOp::Or);
    assert!(matches!(right, CommandNode::Pipeline(_)));
    let (_, inner_op, _) = sequence_parts(left);
    assert_eq!(inner_op, SeqOp::And);
}

#[test]
fn multi_line_script_joined_with_and() {
    let node = Parser::parse_str("echo a &&\necho b &&\necho c").unwrap();
    assert_eq!(programs(&node), vec!["echo", "echo", "echo"]);
    assert_eq!(node.count_simple_commands(), 3);
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::{programs, single_pipeline};
use super::macros::parse_tests;
use crate::ast::CommandNode;
use crate::parser::Parser;

parse_tests! {
    one_stage: "a" => pipelines: 1,
    three_stages_one_pipeline: "a | b | c" => pipelines: 1,
}

#[test]
fn stages_in_order() {
    let node = Parser::parse_str("cat in | sort | uniq -c").unwrap();
    let pipeline = single_pipeline(&node);
    assert_eq!(pipeline.commands.len(), 3);
    assert_eq!(programs(&node), vec!["cat", "sort", "uniq"]);
    assert!(!pipeline.negate);
    assert!(!pipeline.pipe_fail);
}

#[test]
fn leading_bang_negates() {
    let node = Parser::parse_str("! grep x f | wc").unwrap();
    let pipeline = single_pipeline(&node);
    assert!(pipeline.negate);
    assert_eq!(pipeline.commands.len(), 2);
    assert_eq!(pipeline.commands[0].args, vec!["grep", "x", "f"]);
}

#[test]
fn pipefail_marks_every_pipeline() {
    let node = Parser::new("a | b && c ; d").pipefail(true).parse().unwrap();
    let pipelines = node.pipelines();
    assert_eq!(pipelines.len(), 3);
    assert!(pipelines.iter().all(|p| p.pipe_fail));
}

#[test]
fn negation_applies_per_pipeline() {
    let node = Parser::parse_str("! a && b").unwrap();
    let flags: Vec<bool> = node.pipelines().iter().map(|p| p.negate).collect();
    assert_eq!(flags, vec![true, false]);
    assert!(matches!(node, CommandNode::Sequence { .. }));
}

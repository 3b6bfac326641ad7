// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for parser tests.

use crate::ast::*;
use crate::parser::Parser;

pub fn parse(input: &str) -> CommandNode {
    Parser::parse_str(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

/// Extract the only pipeline of a node.
/// Panics if the node is a sequence.
pub fn single_pipeline(node: &CommandNode) -> &Pipeline {
    match node {
        CommandNode::Pipeline(p) => p,
        CommandNode::Sequence { .. } => panic!("expected pipeline, got sequence"),
    }
}

/// Extract the only simple command of a node.
pub fn single_command(node: &CommandNode) -> &SimpleCommand {
    let pipeline = single_pipeline(node);
    assert_eq!(pipeline.commands.len(), 1, "expected a single command");
    &pipeline.commands[0]
}

/// Split a sequence node into its parts.
pub fn sequence_parts(node: &CommandNode) -> (&CommandNode, SeqOp, &CommandNode) {
    match node {
        CommandNode::Sequence { left, op, right } => (left, *op, right),
        CommandNode::Pipeline(_) => panic!("expected sequence, got pipeline"),
    }
}

/// Program names of every command in evaluation order.
pub fn programs(node: &CommandNode) -> Vec<&str> {
    node.pipelines()
        .into_iter()
        .flat_map(|p| p.commands.iter())
        .filter_map(SimpleCommand::program)
        .collect()
}

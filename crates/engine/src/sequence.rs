// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequencing of pipelines with `;`, `&&` and `||`.

use std::future::Future;
use std::pin::Pin;

use rigor_shell::{CommandNode, SeqOp};

use crate::context::ExecContext;
use crate::error::ExecError;
use crate::pipeline::execute_pipeline;
use crate::record::ExecutionRecord;

/// Evaluate `node` left to right, appending one record per command that ran.
///
/// Returns `None` when the node produced no pipeline (an empty one).
///
/// Returns a boxed future to support async recursion over the tree.
pub fn execute_node<'a>(
    ctx: &'a ExecContext,
    node: &'a CommandNode,
    records: &'a mut Vec<ExecutionRecord>,
) -> Pin<Box<dyn Future<Output = Result<Option<i32>, ExecError>> + Send + 'a>> {
    Box::pin(async move {
        match node {
            CommandNode::Pipeline(pipeline) => {
                if pipeline.commands.is_empty() {
                    return Ok(None);
                }
                execute_pipeline(ctx, pipeline, records).await.map(Some)
            }
            CommandNode::Sequence { op: SeqOp::Background, .. } => {
                Err(ExecError::Unsupported { feature: "shell operator '&'".to_string() })
            }
            CommandNode::Sequence { left, op: SeqOp::Semi, right } => {
                execute_node(ctx, left, records).await?;
                execute_node(ctx, right, records).await
            }
            CommandNode::Sequence { left, op: SeqOp::And, right } => {
                match execute_node(ctx, left, records).await? {
                    Some(0) => execute_node(ctx, right, records).await,
                    other => Ok(other),
                }
            }
            CommandNode::Sequence { left, op: SeqOp::Or, right } => {
                match execute_node(ctx, left, records).await? {
                    Some(0) => Ok(Some(0)),
                    _ => execute_node(ctx, right, records).await,
                }
            }
        }
    })
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;

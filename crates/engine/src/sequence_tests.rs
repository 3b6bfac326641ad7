// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rigor_shell::{Parser, Pipeline, SimpleCommand};

#[cfg(unix)]
fn ctx(dir: &std::path::Path) -> ExecContext {
    let mut env = std::collections::HashMap::new();
    env.insert(
        "PATH".to_string(),
        std::env::var("PATH").unwrap_or_else(|_| "/usr/bin:/bin".to_string()),
    );
    ExecContext::new(dir, env)
}

#[cfg(unix)]
async fn run(script: &str) -> (Result<Option<i32>, ExecError>, Vec<ExecutionRecord>) {
    let dir = tempfile::tempdir().unwrap();
    let node = Parser::parse_str(script).unwrap();
    let mut records = Vec::new();
    let result = execute_node(&ctx(dir.path()), &node, &mut records).await;
    (result, records)
}

#[cfg(unix)]
fn programs(records: &[ExecutionRecord]) -> Vec<&str> {
    records.iter().filter_map(|r| r.command.program()).collect()
}

#[cfg(unix)]
#[tokio::test]
async fn and_short_circuits_on_failure() {
    let (code, records) = run("false && true").await;
    assert_ne!(code.unwrap(), Some(0));
    assert_eq!(programs(&records), vec!["false"]);
}

#[cfg(unix)]
#[tokio::test]
async fn and_runs_right_on_success() {
    let (code, records) = run("true && false").await;
    assert_eq!(code.unwrap(), Some(1));
    assert_eq!(programs(&records), vec!["true", "false"]);
}

#[cfg(unix)]
#[tokio::test]
async fn or_runs_right_on_failure() {
    let (code, records) = run("false || true").await;
    assert_eq!(code.unwrap(), Some(0));
    assert_eq!(programs(&records), vec!["false", "true"]);
}

#[cfg(unix)]
#[tokio::test]
async fn or_short_circuits_on_success() {
    let (code, records) = run("true || false").await;
    assert_eq!(code.unwrap(), Some(0));
    assert_eq!(programs(&records), vec!["true"]);
}

#[cfg(unix)]
#[tokio::test]
async fn semicolon_runs_both_and_keeps_right_code() {
    let (code, records) = run("true ; false").await;
    assert_eq!(code.unwrap(), Some(1));
    assert_eq!(programs(&records), vec!["true", "false"]);

    let (code, _) = run("false ; true").await;
    assert_eq!(code.unwrap(), Some(0));
}

#[cfg(unix)]
#[tokio::test]
async fn chains_evaluate_left_to_right() {
    // ((false && echo a) || echo b) ; echo c
    let (code, records) = run("false && echo a || echo b ; echo c").await;
    assert_eq!(code.unwrap(), Some(0));
    let echoed: Vec<_> = records.iter().map(|r| r.stdout.clone()).collect();
    assert_eq!(echoed, vec![b"".to_vec(), b"b\n".to_vec(), b"c\n".to_vec()]);
}

#[cfg(unix)]
#[tokio::test]
async fn background_is_rejected_before_spawning() {
    let dir = tempfile::tempdir().unwrap();
    let node = Parser::parse_str("touch marker & true").unwrap();
    let mut records = Vec::new();
    let result = execute_node(&ctx(dir.path()), &node, &mut records).await;

    assert!(matches!(result, Err(ExecError::Unsupported { .. })), "{result:?}");
    assert!(records.is_empty());
    assert!(!dir.path().join("marker").exists());
}

#[tokio::test]
async fn empty_pipeline_produces_no_code() {
    let dir = tempfile::tempdir().unwrap();
    let context = ExecContext::new(dir.path(), Default::default());
    let node = CommandNode::from(Pipeline::new(Vec::new()));
    let mut records = Vec::new();
    assert_eq!(execute_node(&context, &node, &mut records).await.unwrap(), None);

    // `&&` propagates the missing code without running the right side.
    let node = CommandNode::chain(
        [
            CommandNode::from(Pipeline::new(Vec::new())),
            CommandNode::from(Pipeline::new(vec![SimpleCommand::new(["missing-program-xyz"])])),
        ],
        SeqOp::And,
    )
    .unwrap();
    assert_eq!(execute_node(&context, &node, &mut records).await.unwrap(), None);
    assert!(records.is_empty());
}

#[tokio::test]
async fn errors_stop_the_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let context = ExecContext::new(dir.path(), Default::default());
    let node = CommandNode::chain(
        [
            CommandNode::from(Pipeline::new(vec![SimpleCommand::new(["missing-program-xyz"])])),
            CommandNode::from(Pipeline::new(vec![SimpleCommand::new(["also-missing-xyz"])])),
        ],
        SeqOp::Semi,
    )
    .unwrap();
    let mut records = Vec::new();
    let err = execute_node(&context, &node, &mut records).await.unwrap_err();
    assert_eq!(err.to_string(), "'missing-program-xyz': command not found");
}

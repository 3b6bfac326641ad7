// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg(unix)]

use super::*;

async fn run(executor: &ExternalShell, script_lines: &[&str]) -> (ScriptOutcome, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let context = ctx(dir.path());
    let script_lines = lines(script_lines);
    let outcome = executor
        .execute(Script { lines: &script_lines, ctx: &context, tmp_base: &dir.path().join("test.tmp") })
        .await
        .unwrap();
    (outcome, dir)
}

#[tokio::test]
async fn runs_lines_with_the_fallback_shell() {
    let executor = ExternalShell::new(None, Vec::new());
    let (outcome, dir) = run(&executor, &["echo one", "echo two >&2"]).await;

    assert_eq!(completed(outcome), ("one\n".to_string(), "two\n".to_string(), 0));
    assert!(!dir.path().join("test.tmp.script").exists());
}

#[tokio::test]
async fn failing_line_stops_the_script() {
    let executor = ExternalShell::new(Some(PathBuf::from("/bin/sh")), Vec::new());
    let (outcome, _dir) = run(&executor, &["echo first", "exit 4", "echo never"]).await;
    assert_eq!(completed(outcome), ("first\n".to_string(), String::new(), 4));
}

#[tokio::test]
async fn instrumentation_wraps_the_shell() {
    let wrapper = ["sh", "-c", "echo wrapped; exec \"$@\"", "wrapper"];
    let executor = ExternalShell::new(None, wrapper.iter().map(|s| s.to_string()).collect());
    let (outcome, _dir) = run(&executor, &["echo hi"]).await;
    assert_eq!(completed(outcome).0, "wrapped\nhi\n");
}

#[tokio::test]
async fn script_runs_in_the_working_directory() {
    let executor = ExternalShell::new(None, Vec::new());
    let (outcome, dir) = run(&executor, &["echo data > written"]).await;
    assert_eq!(completed(outcome).2, 0);
    assert_eq!(std::fs::read_to_string(dir.path().join("written")).unwrap(), "data\n");
}

#[tokio::test]
async fn sigint_interrupts() {
    let dir = tempfile::tempdir().unwrap();
    let context = ctx(dir.path());
    let script_lines = lines(&["kill -INT $$", "sleep 5"]);
    let err = ExternalShell::new(None, Vec::new())
        .execute(Script { lines: &script_lines, ctx: &context, tmp_base: &dir.path().join("t") })
        .await
        .unwrap_err();
    assert!(matches!(err, ExecError::Interrupted { .. }), "{err:?}");
    assert!(!dir.path().join("t.script").exists());
}

#[tokio::test]
async fn missing_shell_is_a_spawn_error() {
    let dir = tempfile::tempdir().unwrap();
    let context = ctx(dir.path());
    let script_lines = lines(&["true"]);
    let err = ExternalShell::new(Some(dir.path().join("no-shell")), Vec::new())
        .execute(Script { lines: &script_lines, ctx: &context, tmp_base: &dir.path().join("t") })
        .await
        .unwrap_err();
    assert!(matches!(err, ExecError::Spawn { .. }), "{err:?}");
    assert!(!dir.path().join("t.script").exists());
}

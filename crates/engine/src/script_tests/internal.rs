// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

async fn run(script_lines: &[&str]) -> Result<ScriptOutcome, ExecError> {
    let dir = tempfile::tempdir().unwrap();
    let context = ctx(dir.path());
    let script_lines = lines(script_lines);
    let executor = InternalShell::new(Arc::new(ShellSyntax::default()));
    executor
        .execute(Script { lines: &script_lines, ctx: &context, tmp_base: &dir.path().join("t") })
        .await
}

#[cfg(unix)]
#[tokio::test]
async fn records_become_a_transcript() {
    let (stdout, stderr, exit_code) = completed(run(&["echo hi"]).await.unwrap());
    assert_eq!(exit_code, 0);
    assert_eq!(stderr, "");
    similar_asserts::assert_eq!(
        stdout,
        "Command 0: \"echo\" \"hi\"\nCommand 0 Result: 0\nCommand 0 Output:\nhi\n\n\nCommand 0 Stderr:\n\n\n"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn lines_are_chained_with_and() {
    let (stdout, _, exit_code) = completed(run(&["true", "false", "echo never"]).await.unwrap());
    assert_eq!(exit_code, 1);
    assert!(stdout.contains("Command 1: \"false\""));
    assert!(!stdout.contains("Command 2"));
}

#[tokio::test]
async fn parse_error_fails_the_test() {
    let outcome = run(&["echo ok", "echo 'unterminated"]).await.unwrap();
    assert_eq!(
        outcome,
        ScriptOutcome::Verdict {
            verdict: TestVerdict::Fail,
            diagnostic: "shell parser error on: echo ok &&\necho 'unterminated".to_string(),
        }
    );
}

#[tokio::test]
async fn missing_command_is_exit_255() {
    let (stdout, _, exit_code) = completed(run(&["no-such-program-xyz arg"]).await.unwrap());
    assert_eq!(exit_code, 255);
    assert!(stdout.starts_with("Command 0: \"no-such-program-xyz\" \"arg\"\nCommand 0 Result: 255\n"));
    assert!(stdout.contains("Command 0 Stderr:\n'no-such-program-xyz': command not found\n"));
}

#[tokio::test]
async fn unsupported_redirect_is_an_error() {
    let err = run(&["echo hi 3> f"]).await.unwrap_err();
    assert!(matches!(err, ExecError::UnsupportedRedirect { .. }), "{err:?}");
}

#[tokio::test]
async fn background_is_an_error() {
    let err = run(&["true & true"]).await.unwrap_err();
    assert!(matches!(err, ExecError::Unsupported { .. }), "{err:?}");
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rigor_shell::SeqOp;
use yare::parameterized;

fn legacy(instrumentation: &[&str], shell: Option<&str>) -> LegacyScript {
    LegacyScript::new(
        Arc::new(TclExec),
        instrumentation.iter().map(|s| s.to_string()).collect(),
        shell.map(PathBuf::from),
        false,
    )
}

#[parameterized(
    lexer_error = { "echo {open", "Tcl lexer error on: echo {open" },
    control_token = { "echo [foo]", "Invalid test line: echo [foo] containing [" },
    variable = { "echo $x", "Invalid test line: echo $x containing $" },
    empty_command = { "echo a | | cat", "Tcl 'exec' parse error on: echo a | | cat" },
    heredoc = { "cat << text", "Tcl 'exec' parse error on: cat << text" },
    background = { "sleep 1 &", "Tcl 'exec' parse error on: sleep 1 &" },
)]
fn bad_lines_fail(line: &str, diagnostic: &str) {
    let err = legacy(&[], None).build(&lines(&["echo fine", line])).unwrap_err();
    assert_eq!(err, ScriptOutcome::fail(diagnostic));
}

#[test]
fn messages_show_the_escaped_line() {
    let err = legacy(&[], None).build(&lines(&["echo \\{open"])).unwrap_err();
    assert_eq!(err, ScriptOutcome::fail("Tcl lexer error on: echo {open"));
}

#[test]
fn lines_become_pipefail_pipelines_chained_with_and() {
    let node = legacy(&[], None).build(&lines(&["echo a | cat", "true"])).unwrap().unwrap();
    let CommandNode::Sequence { op, .. } = &node else {
        panic!("expected a sequence, got {node:?}");
    };
    assert_eq!(*op, SeqOp::And);
    let pipelines = node.pipelines();
    assert_eq!(pipelines.len(), 2);
    assert!(pipelines.iter().all(|p| p.pipe_fail));
    assert_eq!(pipelines[0].commands.len(), 2);
}

#[test]
fn instrumentation_prefixes_first_command_only() {
    let node = legacy(&["valgrind", "-q"], None)
        .build(&lines(&["clang -c x.c | grep warning", "opt x.ll"]))
        .unwrap()
        .unwrap();
    let pipelines = node.pipelines();
    assert_eq!(pipelines[0].commands[0].args, vec!["valgrind", "-q", "clang", "-c", "x.c"]);
    assert_eq!(pipelines[0].commands[1].args, vec!["grep", "warning"]);
    assert_eq!(pipelines[1].commands[0].args, vec!["valgrind", "-q", "opt", "x.ll"]);
}

#[test]
fn no_lines_build_nothing() {
    assert_eq!(legacy(&[], None).build(&[]).unwrap(), None);
}

#[cfg(unix)]
#[tokio::test]
async fn runs_in_process_with_pipefail() {
    let dir = tempfile::tempdir().unwrap();
    let context = ctx(dir.path());
    let script_lines = lines(&["sh -c {echo out; exit 3} | cat"]);
    let outcome = legacy(&[], None)
        .execute(Script { lines: &script_lines, ctx: &context, tmp_base: &dir.path().join("t") })
        .await
        .unwrap();

    let (stdout, stderr, exit_code) = completed(outcome);
    assert_eq!(exit_code, 3);
    assert_eq!(stderr, "");
    assert!(stdout.contains("Command 0: \"sh\" \"-c\" \"echo out; exit 3\"\nCommand 0 Result: 3\n"));
    assert!(stdout.contains("Command 1 Output:\nout\n"));
}

#[cfg(unix)]
#[tokio::test]
async fn runs_through_a_real_shell_when_configured() {
    let bash = Path::new("/bin/bash");
    if !bash.exists() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let context = ctx(dir.path());
    let script_lines = lines(&["echo hello | cat", "sh -c {exit 2} | cat"]);
    let outcome = legacy(&[], Some("/bin/bash"))
        .execute(Script { lines: &script_lines, ctx: &context, tmp_base: &dir.path().join("t") })
        .await
        .unwrap();

    assert_eq!(completed(outcome), ("hello\n".to_string(), String::new(), 2));
    assert!(!dir.path().join("t.script").exists());
}

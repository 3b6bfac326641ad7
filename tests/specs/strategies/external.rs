//! `--strategy external` hands the script to a real shell.

use crate::prelude::*;

#[test]
fn shell_features_are_available() {
    let project = Project::empty();
    project
        .run_script("e.test", "RUN: for i in 1 2; do echo $i; done > loop.txt\n", &["--strategy", "external"])
        .passes();
    assert_eq!(project.read("loop.txt"), "1\n2\n");
}

#[test]
fn failure_reports_the_exit_code() {
    let project = Project::empty();
    project
        .run_script("e.test", "RUN: echo out\nRUN: exit 3\n", &["--strategy", "external"])
        .fails()
        .stdout_has("Exit Code: 3\n")
        .stdout_has("Command Output (stdout):\n--\nout\n");
}

#[test]
fn shell_from_env() {
    let project = Project::empty();
    let script = project.file("e.test", "RUN: true\n");
    cli()
        .args(&["run", &script.to_string_lossy(), "--strategy", "external"])
        .env("RIGOR_SHELL", "/nonexistent/shell")
        .exits(2)
        .stderr_has("failed to spawn");
}

#[test]
fn temporary_script_is_removed() {
    let project = Project::empty();
    let base = project.path().join("Output/e.tmp");
    project
        .run_script("e.test", "RUN: true\n", &["--strategy", "external", "--tmp-base", &base.to_string_lossy()])
        .passes();
    assert!(!project.path().join("Output/e.tmp.script").exists());
}

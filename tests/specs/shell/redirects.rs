//! Redirections handled by the internal strategy.

use crate::prelude::*;

#[test]
fn append_keeps_existing_content() {
    let project = Project::empty();
    project.run_script("a.test", "RUN: echo one > log.txt\nRUN: echo two >> log.txt\n", &[]).passes();
    assert_eq!(project.read("log.txt"), "one\ntwo\n");
}

#[test]
fn input_redirect_feeds_stdin() {
    let project = Project::empty();
    project.file("in.txt", "z\ny\n");
    project.run_script("i.test", "RUN: sort < in.txt > out.txt\n", &[]).passes();
    assert_eq!(project.read("out.txt"), "y\nz\n");
}

#[test]
fn stderr_merges_into_stdout() {
    let project = Project::empty();
    project.run_script("m.test", "RUN: sh -c 'echo err >&2' 2>&1 | cat > merged.txt\n", &[]).passes();
    assert_eq!(project.read("merged.txt"), "err\n");
}

#[test]
fn both_streams_to_one_file() {
    let project = Project::empty();
    project.run_script("b.test", "RUN: sh -c 'echo out; echo err >&2' &> both.txt\n", &[]).passes();
    let both = project.read("both.txt");
    assert!(both.contains("out\n") && both.contains("err\n"), "{both}");
}

#[test]
fn dev_null_discards_output() {
    let project = Project::empty();
    project
        .run_script("d.test", "RUN: echo hidden > /dev/null && false\n", &[])
        .fails()
        .stdout_has("Command 0 Output:\n\n");
}

#[test]
fn duplicating_onto_stdin_is_an_engine_error() {
    let project = Project::empty();
    project
        .run_script("u.test", "RUN: echo hi 2>&0\n", &[])
        .exits(2)
        .stderr_has("unsupported redirect");
}

//! Pipelines run by the internal strategy.

use crate::prelude::*;

#[test]
fn stages_are_connected() {
    let project = Project::empty();
    project.run_script("p.test", "RUN: printf 'b\\na\\n' | sort > sorted.txt\n", &[]).passes();
    assert_eq!(project.read("sorted.txt"), "a\nb\n");
}

#[test]
fn last_stage_decides_without_pipefail() {
    let project = Project::empty();
    project.run_script("p.test", "RUN: false | true\n", &[]).passes();
}

#[test]
fn negation_inverts_the_status() {
    let project = Project::empty();
    project.run_script("n.test", "RUN: ! false\n", &[]).passes();
    project.run_script("m.test", "RUN: ! true\n", &[]).fails().stdout_has("Exit Code: 1");
}

#[test]
fn transcript_records_each_stage() {
    let project = Project::empty();
    project
        .run_script("t.test", "RUN: echo piped | cat && false\n", &[])
        .fails()
        .stdout_has("Command 0: \"echo\" \"piped\"")
        .stdout_has("Command 1: \"cat\"")
        .stdout_has("Command 1 Output:\npiped\n");
}

#[test]
fn large_output_does_not_deadlock() {
    let project = Project::empty();
    project
        .run_script("big.test", "RUN: yes line | head -n 200000 | wc -l > count.txt\n", &[])
        .passes();
    assert_eq!(project.read("count.txt").trim(), "200000");
}

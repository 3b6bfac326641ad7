//! `&&`, `||` and `;` between pipelines.

use crate::prelude::*;

#[test]
fn and_stops_at_the_first_failure() {
    let project = Project::empty();
    project.run_script("a.test", "RUN: false && touch marker\n", &[]).fails();
    assert!(!project.path().join("marker").exists());
}

#[test]
fn or_runs_the_fallback() {
    let project = Project::empty();
    project.run_script("o.test", "RUN: false || touch marker\n", &[]).passes();
    assert!(project.path().join("marker").exists());
}

#[test]
fn or_skips_the_fallback_on_success() {
    let project = Project::empty();
    project.run_script("o.test", "RUN: true || touch marker\n", &[]).passes();
    assert!(!project.path().join("marker").exists());
}

#[test]
fn semicolon_keeps_the_last_status() {
    let project = Project::empty();
    project.run_script("s.test", "RUN: false ; true\n", &[]).passes();
    project.run_script("t.test", "RUN: true ; false\n", &[]).fails();
}

#[test]
fn lines_are_chained_with_and() {
    let project = Project::empty();
    project.run_script("l.test", "RUN: false\nRUN: touch marker\n", &[]).fails();
    assert!(!project.path().join("marker").exists());
}

//! `--strategy tcl` runs legacy `exec` lines.

use crate::prelude::*;

#[test]
fn braces_group_words() {
    let project = Project::empty();
    project.run_script("t.test", "RUN: sh -c {echo grouped > out.txt}\n", &["--strategy", "tcl"]).passes();
    assert_eq!(project.read("out.txt"), "grouped\n");
}

#[test]
fn pipelines_use_pipefail() {
    let project = Project::empty();
    project.run_script("t.test", "RUN: false | cat\n", &["--strategy", "tcl"]).fails();
}

/// Config that renders legacy lines for bash, or `None` when bash is missing.
fn bash_config(project: &Project) -> Option<String> {
    if !std::path::Path::new("/bin/bash").exists() {
        return None;
    }
    let path = project.file(
        "rigor.toml",
        "external_shell_path = \"/bin/bash\"\nlegacy_via_external_shell = true\n",
    );
    Some(path.to_string_lossy().into_owned())
}

#[test]
fn stderr_output_fails_the_test() {
    let project = Project::empty();
    let Some(config) = bash_config(&project) else { return };
    project
        .run_script("t.test", "RUN: sh -c {echo noisy >&2}\n", &["--strategy", "tcl", "--config", &config])
        .fails()
        .stdout_has("Exit Code: 0 (but there was output on stderr)")
        .stdout_has("noisy");
}

#[test]
fn stderr_can_be_ignored() {
    let project = Project::empty();
    let Some(config) = bash_config(&project) else { return };
    let script = project.file("t.test", "RUN: sh -c {echo noisy >&2}\n");
    cli()
        .args(&["run", &script.to_string_lossy(), "--strategy", "tcl", "--config", &config])
        .env("RIGOR_IGNORE_STDERR", "1")
        .passes();
}

#[test]
fn in_process_stderr_only_reaches_the_transcript() {
    let project = Project::empty();
    project
        .run_script("t.test", "RUN: sh -c {echo noisy >&2; exit 1}\n", &["--strategy", "tcl"])
        .fails()
        .stdout_has("Command 0 Stderr:\nnoisy\n")
        .stdout_lacks("Command Output (stderr)");
}

#[test]
fn control_characters_reject_the_line() {
    let project = Project::empty();
    project
        .run_script("t.test", "RUN: echo [pwd]\n", &["--strategy", "tcl"])
        .fails()
        .stdout_has("Invalid test line: echo [pwd] containing [");
}

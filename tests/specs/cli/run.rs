//! `rigor run` verdicts, flags and configuration.

use crate::prelude::*;

#[test]
fn passing_script_prints_pass() {
    let project = Project::empty();
    project.run_script("ok.test", "# RUN: true\n", &[]).passes().stdout_has("PASS: ").stdout_has("ok.test");
}

#[test]
fn failing_script_prints_transcript() {
    let project = Project::empty();
    let run = project.run_script("bad.test", "RUN: echo before\nRUN: false\n", &[]).fails();
    run.stdout_has("FAIL: ")
        .stdout_has("Script:\n--\necho before\nfalse\n--\n")
        .stdout_has("Exit Code: 1\n")
        .stdout_has("before");
}

#[test]
fn expected_failure_is_xfail() {
    let project = Project::empty();
    project.run_script("x.test", "RUN: false\n", &["--xfail"]).passes().stdout_has("XFAIL: ");
}

#[test]
fn unexpected_pass_is_xpass() {
    let project = Project::empty();
    project.run_script("x.test", "RUN: true\n", &["--xfail"]).fails().stdout_has("XPASS: ");
}

#[test]
fn unsupported_runs_nothing() {
    let project = Project::empty();
    project
        .run_script("u.test", "RUN: touch marker\n", &["--unsupported"])
        .passes()
        .stdout_has("UNSUPPORTED: ")
        .stdout_has("Test is unsupported");
    assert!(!project.path().join("marker").exists());
}

#[test]
fn no_execute_env_passes_without_running() {
    let project = Project::empty();
    let script = project.file("n.test", "RUN: touch marker && false\n");
    cli()
        .args(&["run", &script.to_string_lossy()])
        .env("RIGOR_NO_EXECUTE", "1")
        .passes()
        .stdout_has("PASS: ");
    assert!(!project.path().join("marker").exists());
}

#[test]
fn script_directory_is_the_default_cwd() {
    let project = Project::empty();
    project.run_script("sub/w.test", "RUN: echo data > out.txt\n", &[]).passes();
    assert_eq!(project.read("sub/out.txt"), "data\n");
}

#[cfg(unix)]
#[test]
fn relative_script_path_runs_local_tool() {
    use std::os::unix::fs::PermissionsExt;

    let project = Project::empty();
    let tool = project.file("sub/tool.sh", "#!/bin/sh\necho from-tool > tool.out\n");
    std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();
    project.file("sub/t.test", "RUN: ./tool.sh\n");

    cli().args(&["run", "sub/t.test"]).current_dir(project.path()).passes().stdout_has("PASS: ");
    assert_eq!(project.read("sub/tool.out"), "from-tool\n");
}

#[test]
fn cwd_flag_overrides_script_directory() {
    let project = Project::empty();
    std::fs::create_dir_all(project.path().join("elsewhere")).unwrap();
    let cwd = project.path().join("elsewhere");
    project.run_script("c.test", "RUN: pwd > here.txt\n", &["--cwd", &cwd.to_string_lossy()]).passes();
    assert!(project.path().join("elsewhere/here.txt").exists());
}

#[test]
fn show_output_flag_prints_passing_output() {
    let project = Project::empty();
    project
        .run_script("s.test", "RUN: echo visible\n", &["--show-output"])
        .passes()
        .stdout_has("PASS: ")
        .stdout_has("visible");
}

#[test]
fn config_always_show_output() {
    let project = Project::empty();
    let config = project.file("rigor.toml", "always_show_output = true\n");
    project
        .run_script("s.test", "RUN: echo from-config\n", &["--config", &config.to_string_lossy()])
        .passes()
        .stdout_has("from-config");
}

#[test]
fn config_from_env_path() {
    let project = Project::empty();
    let config = project.file("conf/config.toml", "skip_execution = true\n");
    let script = project.file("e.test", "RUN: false\n");
    cli()
        .args(&["run", &script.to_string_lossy()])
        .env("RIGOR_CONFIG", &config)
        .passes()
        .stdout_has("PASS: ");
}

#[test]
fn invalid_config_is_an_engine_error() {
    let project = Project::empty();
    let config = project.file("rigor.toml", "no_such_key = 1\n");
    project
        .run_script("s.test", "RUN: true\n", &["--config", &config.to_string_lossy()])
        .exits(2)
        .stderr_has("rigor.toml");
}

#[test]
fn missing_explicit_config_is_an_engine_error() {
    let project = Project::empty();
    project.run_script("s.test", "RUN: true\n", &["--config", "/nonexistent/rigor.toml"]).exits(2);
}

#[test]
fn missing_script_is_an_engine_error() {
    cli().args(&["run", "/nonexistent/none.test"]).exits(2).stderr_has("failed to read");
}

#[test]
fn empty_script_fails() {
    let project = Project::empty();
    project.run_script("empty.test", "# nothing here\n", &[]).fails().stdout_has("Test has no run line!");
}

#[test]
fn command_not_found_fails_with_255() {
    let project = Project::empty();
    project
        .run_script("nf.test", "RUN: rigor-no-such-tool-xyz\n", &[])
        .fails()
        .stdout_has("Exit Code: 255")
        .stdout_has("rigor-no-such-tool-xyz");
}

#[test]
fn parse_error_fails_the_test() {
    let project = Project::empty();
    project
        .run_script("p.test", "RUN: echo |\n", &[])
        .fails()
        .stdout_has("shell parser error on: echo |");
}

#[test]
fn background_operator_is_an_engine_error() {
    let project = Project::empty();
    project
        .run_script("bg.test", "RUN: sleep 1 & true\n", &[])
        .exits(2)
        .stderr_has("unsupported shell feature");
}

#[test]
fn json_output() {
    let project = Project::empty();
    let out = project.run_script("j.test", "RUN: false\n", &["-o", "json"]).fails().stdout();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["verdict"], "FAIL");
    assert!(value["script"].as_str().unwrap().ends_with("j.test"));
    assert!(value["diagnostic"].as_str().unwrap().contains("Exit Code: 1"));
}

#[test]
fn json_output_for_xfail() {
    let project = Project::empty();
    let out = project.run_script("j.test", "RUN: false\n", &["-o", "json", "--xfail"]).passes().stdout();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["verdict"], "XFAIL");
    assert_eq!(value["diagnostic"], "");
}

#[test]
fn continuation_lines_are_joined() {
    let project = Project::empty();
    project.run_script("cont.test", "RUN: echo one \\\nRUN:   two > joined.txt\n", &[]).passes();
    assert_eq!(project.read("joined.txt"), "one two\n");
}

#[test]
fn tmp_base_parent_is_created() {
    let project = Project::empty();
    let base = project.path().join("Output/deep/t.tmp");
    project.run_script("t.test", "RUN: true\n", &["--tmp-base", &base.to_string_lossy()]).passes();
    assert!(project.path().join("Output/deep").is_dir());
}

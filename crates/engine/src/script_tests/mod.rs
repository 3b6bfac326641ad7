// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod external;
mod internal;
mod legacy;

use super::*;
use std::collections::HashMap;

fn ctx(dir: &Path) -> ExecContext {
    let mut env = HashMap::new();
    env.insert(
        "PATH".to_string(),
        std::env::var("PATH").unwrap_or_else(|_| "/usr/bin:/bin".to_string()),
    );
    ExecContext::new(dir, env)
}

fn lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

fn completed(outcome: ScriptOutcome) -> (String, String, i32) {
    match outcome {
        ScriptOutcome::Completed { stdout, stderr, exit_code } => (stdout, stderr, exit_code),
        other => panic!("expected a completed script, got {other:?}"),
    }
}

#[test]
fn script_path_appends_suffixes() {
    let base = Path::new("/tmp/out/test.c.tmp");
    assert_eq!(script_path(base, false), PathBuf::from("/tmp/out/test.c.tmp.script"));
    assert_eq!(script_path(base, true), PathBuf::from("/tmp/out/test.c.tmp.script.bat"));
}

#[test]
fn strategy_names_deserialize() {
    #[derive(Deserialize)]
    struct Wrapper {
        strategy: Strategy,
    }
    for (text, expected) in [
        ("internal", Strategy::Internal),
        ("external", Strategy::External),
        ("tcl", Strategy::Tcl),
    ] {
        let parsed: Wrapper = toml::from_str(&format!("strategy = \"{text}\"")).unwrap();
        assert_eq!(parsed.strategy, expected);
    }
    assert!(Strategy::Tcl.is_legacy());
    assert!(!Strategy::External.is_legacy());
}

#[test]
fn executors_report_their_stderr_policy() {
    let config = RunConfig::default();
    assert_eq!(Strategy::Internal.executor(&config, false).stderr_policy(), StderrPolicy::Ignore);
    assert_eq!(Strategy::External.executor(&config, false).stderr_policy(), StderrPolicy::Ignore);
    assert_eq!(Strategy::Tcl.executor(&config, false).stderr_policy(), StderrPolicy::Fails);

    let lenient = RunConfig { ignore_stderr_as_failure: true, ..RunConfig::default() };
    assert_eq!(Strategy::Tcl.executor(&lenient, false).stderr_policy(), StderrPolicy::Ignore);
}

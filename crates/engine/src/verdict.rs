// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test verdicts and the diagnostic shown for unexpected ones.

use std::fmt;

use serde::Serialize;

/// Final status of one test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestVerdict {
    Pass,
    Fail,
    /// Failed, as expected.
    #[serde(rename = "XFAIL")]
    XFail,
    /// Passed, but was expected to fail.
    #[serde(rename = "XPASS")]
    XPass,
    Unsupported,
}

impl TestVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestVerdict::Pass => "PASS",
            TestVerdict::Fail => "FAIL",
            TestVerdict::XFail => "XFAIL",
            TestVerdict::XPass => "XPASS",
            TestVerdict::Unsupported => "UNSUPPORTED",
        }
    }

    /// Pass or XFail.
    pub fn is_acceptable(&self) -> bool {
        matches!(self, TestVerdict::Pass | TestVerdict::XFail)
    }

    /// Verdict for a run that did or did not fail, given whether failure was expected.
    pub fn from_failure(failed: bool, expect_failure: bool) -> Self {
        match (failed, expect_failure) {
            (true, true) => TestVerdict::XFail,
            (false, true) => TestVerdict::XPass,
            (true, false) => TestVerdict::Fail,
            (false, false) => TestVerdict::Pass,
        }
    }
}

impl fmt::Display for TestVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verdict plus the text explaining it (empty for acceptable outcomes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestOutcome {
    pub verdict: TestVerdict,
    pub diagnostic: String,
}

impl TestOutcome {
    pub fn new(verdict: TestVerdict, diagnostic: impl Into<String>) -> Self {
        Self { verdict, diagnostic: diagnostic.into() }
    }
}

/// How stderr output counts toward failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StderrPolicy {
    /// Shell strategies: only the exit code matters.
    Ignore,
    /// Legacy scripts: any stderr output fails the test.
    Fails,
}

/// Raw results of a completed script.
#[derive(Debug, Clone, Copy)]
pub struct Completion<'a> {
    pub script: &'a [String],
    pub stdout: &'a str,
    pub stderr: &'a str,
    pub exit_code: i32,
}

/// Judge a completed script.
///
/// `show_output` forces the diagnostic even for acceptable outcomes.
pub fn resolve(
    completion: &Completion<'_>,
    expect_failure: bool,
    stderr_policy: StderrPolicy,
    show_output: bool,
) -> TestOutcome {
    let fail_due_to_stderr = stderr_policy == StderrPolicy::Fails
        && completion.exit_code == 0
        && !completion.stderr.is_empty();
    let failed = completion.exit_code != 0 || fail_due_to_stderr;
    let verdict = TestVerdict::from_failure(failed, expect_failure);

    if verdict.is_acceptable() && !show_output {
        return TestOutcome::new(verdict, "");
    }
    TestOutcome::new(verdict, format_diagnostic(completion, fail_due_to_stderr))
}

/// ```text
/// Script:
/// --
/// <lines>
/// --
/// Exit Code: 1
/// Command Output (stdout):
/// --
/// <stdout>--
/// ```
pub fn format_diagnostic(completion: &Completion<'_>, fail_due_to_stderr: bool) -> String {
    let mut out = String::from("Script:\n--\n");
    out.push_str(&completion.script.join("\n"));
    out.push_str("\n--\n");
    out.push_str(&format!("Exit Code: {}", completion.exit_code));
    if fail_due_to_stderr {
        out.push_str(" (but there was output on stderr)");
    }
    out.push('\n');
    if !completion.stdout.is_empty() {
        out.push_str("Command Output (stdout):\n--\n");
        out.push_str(completion.stdout);
        out.push_str("--\n");
    }
    if !completion.stderr.is_empty() {
        out.push_str("Command Output (stderr):\n--\n");
        out.push_str(completion.stderr);
        out.push_str("--\n");
    }
    out
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;

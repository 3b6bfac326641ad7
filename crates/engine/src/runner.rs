// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runs one test: checks the flags that skip execution, runs the script with
//! the chosen strategy, and judges the result.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::RunConfig;
use crate::context::ExecContext;
use crate::error::ExecError;
use crate::host::HostProfile;
use crate::resolve::{CommandResolver, PathSearch};
use crate::script::{Script, ScriptExecutor, ScriptOutcome, Strategy};
use crate::verdict::{self, Completion, TestOutcome, TestVerdict};

/// Everything known about one test.
#[derive(Debug, Clone, Default)]
pub struct TestSpec {
    /// Script lines, in order.
    pub script: Vec<String>,
    pub cwd: PathBuf,
    /// Complete child environment; must contain `PATH`.
    pub env: HashMap<String, String>,
    pub unsupported: bool,
    pub expect_failure: bool,
    /// Temporary scripts go next to this path. Without it a scratch
    /// directory is used for the duration of the run.
    pub tmp_base: Option<PathBuf>,
}

pub struct TestRunner {
    config: RunConfig,
    host: HostProfile,
    resolver: Arc<dyn CommandResolver>,
}

impl TestRunner {
    pub fn new(config: RunConfig) -> Self {
        let host = config.host_profile();
        Self { config, host, resolver: Arc::new(PathSearch) }
    }

    pub fn resolver(mut self, resolver: Arc<dyn CommandResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub async fn run(&self, spec: &TestSpec, strategy: Strategy) -> Result<TestOutcome, ExecError> {
        let executor = strategy.executor(&self.config, self.host.is_windows);
        let show_output = self.config.always_show_output && !strategy.is_legacy();
        self.run_with(spec, executor.as_ref(), show_output).await
    }

    pub(crate) async fn run_with(
        &self,
        spec: &TestSpec,
        executor: &dyn ScriptExecutor,
        show_output: bool,
    ) -> Result<TestOutcome, ExecError> {
        if spec.unsupported {
            return Ok(TestOutcome::new(TestVerdict::Unsupported, "Test is unsupported"));
        }
        if self.config.skip_execution {
            return Ok(TestOutcome::new(TestVerdict::Pass, ""));
        }
        if spec.script.is_empty() {
            return Ok(TestOutcome::new(TestVerdict::Fail, "Test has no run line!"));
        }

        let scratch;
        let tmp_base = match &spec.tmp_base {
            Some(base) => {
                if let Some(parent) = base.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|source| ExecError::Io {
                        context: format!("creating {}", parent.display()),
                        source,
                    })?;
                }
                base.clone()
            }
            None => {
                scratch = tempfile::tempdir().map_err(ExecError::io("creating scratch directory"))?;
                scratch.path().join("test")
            }
        };

        let ctx = ExecContext::new(&spec.cwd, spec.env.clone())
            .host(self.host.clone())
            .resolver(Arc::clone(&self.resolver));
        let script = Script { lines: &spec.script, ctx: &ctx, tmp_base: &tmp_base };

        let outcome = match executor.execute(script).await? {
            ScriptOutcome::Verdict { verdict, diagnostic } => TestOutcome::new(verdict, diagnostic),
            ScriptOutcome::Completed { stdout, stderr, exit_code } => {
                let completion = Completion { script: &spec.script, stdout: &stdout, stderr: &stderr, exit_code };
                verdict::resolve(&completion, spec.expect_failure, executor.stderr_policy(), show_output)
            }
        };
        tracing::info!(verdict = %outcome.verdict, cwd = %spec.cwd.display(), "test finished");
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

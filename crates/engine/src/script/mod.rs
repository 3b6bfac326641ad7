// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script executors: run every line of a test script and report raw results.
//!
//! Three strategies exist. [`InternalShell`] parses the script and drives the
//! pipeline engine in-process, [`ExternalShell`] writes the lines to a file for
//! a real shell, and [`LegacyScript`] handles Tcl `exec` lines.

mod external;
mod internal;
mod legacy;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use rigor_shell::CommandNode;
use serde::Deserialize;

use crate::config::RunConfig;
use crate::context::ExecContext;
use crate::dialect::{ShellSyntax, TclExec};
use crate::error::ExecError;
use crate::pipeline::{exit_code_of, is_sigint};
use crate::record::{format_records, ExecutionRecord};
use crate::sequence::execute_node;
use crate::verdict::{StderrPolicy, TestVerdict};

pub use external::ExternalShell;
pub use internal::InternalShell;
pub use legacy::LegacyScript;

/// What running a script produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOutcome {
    Completed { stdout: String, stderr: String, exit_code: i32 },
    /// The script never ran to completion (parse errors and the like).
    Verdict { verdict: TestVerdict, diagnostic: String },
}

impl ScriptOutcome {
    fn fail(diagnostic: impl Into<String>) -> Self {
        ScriptOutcome::Verdict { verdict: TestVerdict::Fail, diagnostic: diagnostic.into() }
    }
}

/// One script to run.
#[derive(Debug, Clone, Copy)]
pub struct Script<'a> {
    pub lines: &'a [String],
    pub ctx: &'a ExecContext,
    /// Temporary scripts are written to `<tmp_base>.script`.
    pub tmp_base: &'a Path,
}

#[async_trait]
pub trait ScriptExecutor: Send + Sync {
    async fn execute(&self, script: Script<'_>) -> Result<ScriptOutcome, ExecError>;

    /// Whether stderr output alone fails a test run by this executor.
    fn stderr_policy(&self) -> StderrPolicy {
        StderrPolicy::Ignore
    }
}

/// How a test's lines are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Internal,
    External,
    /// Legacy Tcl `exec` lines.
    Tcl,
}

impl Strategy {
    pub fn is_legacy(&self) -> bool {
        matches!(self, Strategy::Tcl)
    }

    /// Build the executor for this strategy.
    pub fn executor(&self, config: &RunConfig, is_windows: bool) -> Box<dyn ScriptExecutor> {
        match self {
            Strategy::Internal => Box::new(InternalShell::new(Arc::new(ShellSyntax::new(is_windows)))),
            Strategy::External => Box::new(ExternalShell::new(
                config.external_shell_path.clone(),
                config.instrumentation_args.clone(),
            )),
            Strategy::Tcl => {
                let shell = config
                    .external_shell_path
                    .clone()
                    .filter(|_| config.legacy_via_external_shell);
                Box::new(LegacyScript::new(
                    Arc::new(TclExec),
                    config.instrumentation_args.clone(),
                    shell,
                    config.ignore_stderr_as_failure,
                ))
            }
        }
    }
}

/// Run a tree through the sequencer and report the records like a shell
/// transcript. A command that does not resolve becomes a record with exit
/// code 255 and the message on stderr.
async fn run_in_process(ctx: &ExecContext, node: &CommandNode) -> Result<ScriptOutcome, ExecError> {
    let mut records = Vec::new();
    let exit_code = match execute_node(ctx, node, &mut records).await {
        Ok(code) => code.unwrap_or(0),
        Err(ExecError::CommandNotFound { command, message }) => {
            tracing::debug!(%message, "command not found");
            records.push(ExecutionRecord::new(command, Vec::new(), format!("{message}\n").into_bytes(), 255));
            255
        }
        Err(e) => return Err(e),
    };
    Ok(ScriptOutcome::Completed { stdout: format_records(&records), stderr: String::new(), exit_code })
}

/// `<tmp_base>.script`, plus `.bat` for batch files.
fn script_path(tmp_base: &Path, batch: bool) -> PathBuf {
    let mut path = OsString::from(tmp_base.as_os_str());
    path.push(".script");
    if batch {
        path.push(".bat");
    }
    PathBuf::from(path)
}

/// Write `contents` to `path`, run `argv` with `path` appended, then remove
/// the file even when the run fails.
async fn run_script_file(
    ctx: &ExecContext,
    argv: Vec<OsString>,
    path: &Path,
    contents: String,
) -> Result<ScriptOutcome, ExecError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| ExecError::Io { context: format!("writing {}", path.display()), source })?;

    let mut argv = argv;
    argv.push(path.as_os_str().to_os_string());
    let result = run_whole_script(ctx, &argv).await;

    ctx.host.handle_release.wait_released(path).await?;
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove script file");
        }
    }
    result
}

/// Run one whole-script process with closed stdin and captured output.
async fn run_whole_script(ctx: &ExecContext, argv: &[OsString]) -> Result<ScriptOutcome, ExecError> {
    let Some((program, args)) = argv.split_first() else {
        return Ok(ScriptOutcome::Completed { stdout: String::new(), stderr: String::new(), exit_code: 0 });
    };
    let name = program.to_string_lossy().into_owned();
    tracing::debug!(program = %name, ?args, "running script");

    let child = tokio::process::Command::new(program)
        .args(args)
        .current_dir(&ctx.cwd)
        .env_clear()
        .envs(&ctx.env)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ExecError::Spawn { command: name.clone(), source })?;

    // Dropping stdin first closes it.
    let output = child.wait_with_output().await.map_err(ExecError::io("waiting for script"))?;
    let exit_code = exit_code_of(output.status);
    if is_sigint(exit_code) {
        return Err(ExecError::Interrupted { command: name });
    }
    Ok(ScriptOutcome::Completed {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code,
    })
}

#[cfg(test)]
#[path = "../script_tests/mod.rs"]
mod tests;

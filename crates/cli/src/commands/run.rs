// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rigor run`: execute one test script and report its verdict.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};
use rigor_engine::{env, ExecError, RunConfig, Strategy, TestRunner, TestSpec, TestVerdict};

use crate::exit_error::{ExitError, ENGINE_ERROR, INTERRUPTED, TEST_FAILED};
use crate::output::{print_outcome, OutputFormat};
use crate::script_file::script_lines;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Test script to run
    pub script: PathBuf,

    /// Config file (default: $RIGOR_CONFIG, then the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Working directory for the script (default: the script's directory)
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// How the script's lines are executed
    #[arg(long, value_enum, default_value_t)]
    pub strategy: StrategyArg,

    /// The test is expected to fail
    #[arg(long)]
    pub xfail: bool,

    /// Report UNSUPPORTED without running anything
    #[arg(long)]
    pub unsupported: bool,

    /// Show the script output even when the test passes
    #[arg(long)]
    pub show_output: bool,

    /// Temporary scripts are written next to this path
    #[arg(long)]
    pub tmp_base: Option<PathBuf>,

    #[arg(long, short = 'o', value_enum, default_value_t)]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Parse and run in-process
    #[default]
    Internal,
    /// Hand the script to a real shell
    External,
    /// Legacy Tcl `exec` lines
    Tcl,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Internal => Strategy::Internal,
            StrategyArg::External => Strategy::External,
            StrategyArg::Tcl => Strategy::Tcl,
        }
    }
}

pub async fn handle(args: RunArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?.with_env_overrides();
    config.always_show_output |= args.show_output;

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read {}", args.script.display()))?;
    let spec = TestSpec {
        script: script_lines(&text),
        cwd: working_dir(&args)?,
        env: std::env::vars().collect(),
        unsupported: args.unsupported,
        expect_failure: args.xfail,
        tmp_base: args.tmp_base.clone(),
    };

    tracing::debug!(script = %args.script.display(), strategy = ?args.strategy, lines = spec.script.len(), "running test");
    let runner = TestRunner::new(config);
    let outcome = match runner.run(&spec, args.strategy.into()).await {
        Ok(outcome) => outcome,
        Err(e @ ExecError::Interrupted { .. }) => return Err(ExitError::new(INTERRUPTED, e.to_string()).into()),
        Err(e) => return Err(ExitError::new(ENGINE_ERROR, format!("error: {e}")).into()),
    };

    print_outcome(&outcome, &args.script, args.output)?;
    match exit_code(outcome.verdict) {
        0 => Ok(()),
        code => Err(ExitError::silent(code).into()),
    }
}

/// 0 for PASS, XFAIL and UNSUPPORTED; 1 for FAIL and XPASS.
pub fn exit_code(verdict: TestVerdict) -> i32 {
    match verdict {
        TestVerdict::Pass | TestVerdict::XFail | TestVerdict::Unsupported => 0,
        TestVerdict::Fail | TestVerdict::XPass => TEST_FAILED,
    }
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<RunConfig> {
    if let Some(path) = explicit {
        return Ok(RunConfig::load(path)?);
    }
    match env::config_path() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Ok(RunConfig::load_or_default(&path)?)
        }
        None => Ok(RunConfig::default()),
    }
}

/// Absolute working directory: `--cwd`, else the script's directory.
fn working_dir(args: &RunArgs) -> anyhow::Result<PathBuf> {
    let dir = match (&args.cwd, args.script.parent().filter(|p| !p.as_os_str().is_empty())) {
        (Some(cwd), _) => cwd.clone(),
        (None, Some(dir)) => dir.to_path_buf(),
        (None, None) => return Ok(std::env::current_dir()?),
    };
    std::path::absolute(&dir).with_context(|| format!("invalid working directory {}", dir.display()))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rigor-engine: runs test scripts as real processes and judges the result.
//!
//! A script is parsed into a [`rigor_shell::CommandNode`], the [`sequence`]
//! module walks it, [`pipeline`] spawns and drains each pipeline, and
//! [`verdict`] maps the outcome to PASS/FAIL/XFAIL/XPASS/UNSUPPORTED.

pub mod config;
pub mod context;
pub mod dialect;
pub mod env;
mod error;
pub mod host;
pub mod pipeline;
pub mod record;
pub mod redirect;
pub mod resolve;
pub mod runner;
pub mod script;
pub mod sequence;
pub mod verdict;

pub use config::{ConfigError, RunConfig};
pub use context::ExecContext;
pub use dialect::{LegacyDialect, ScriptParser, ShellSyntax, TclExec};
pub use error::ExecError;
pub use host::{HandleRelease, HostProfile, NULL_DEVICE};
pub use pipeline::{execute_pipeline, fold_exit_codes, negate_exit_code};
pub use record::{format_records, ExecutionRecord};
pub use resolve::{CommandResolver, PathSearch};
pub use runner::{TestRunner, TestSpec};
pub use script::{ScriptExecutor, ScriptOutcome, Strategy};
pub use sequence::execute_node;
pub use verdict::{TestOutcome, TestVerdict};

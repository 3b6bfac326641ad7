// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use rigor_shell::render::to_shell;
use rigor_shell::{CommandNode, SeqOp, TclToken};

use super::{run_in_process, run_script_file, script_path, Script, ScriptExecutor, ScriptOutcome};
use crate::dialect::LegacyDialect;
use crate::error::ExecError;
use crate::verdict::StderrPolicy;

/// Runs legacy dialect lines, each one a pipefail pipeline, chained with `&&`.
pub struct LegacyScript {
    dialect: Arc<dyn LegacyDialect>,
    instrumentation: Vec<String>,
    /// Render the tree for this shell instead of running it in-process.
    shell: Option<PathBuf>,
    ignore_stderr: bool,
}

impl LegacyScript {
    pub fn new(
        dialect: Arc<dyn LegacyDialect>,
        instrumentation: Vec<String>,
        shell: Option<PathBuf>,
        ignore_stderr: bool,
    ) -> Self {
        Self { dialect, instrumentation, shell, ignore_stderr }
    }

    /// Build the `&&` chain, or the verdict explaining which line is bad.
    pub(super) fn build(&self, lines: &[String]) -> Result<Option<CommandNode>, ScriptOutcome> {
        let mut pipelines = Vec::with_capacity(lines.len());
        for line in lines {
            let line = self.dialect.resolve_escapes(line);
            let tokens = self
                .dialect
                .tokenize(&line)
                .map_err(|_| ScriptOutcome::fail(format!("Tcl lexer error on: {line}")))?;

            let mut words = Vec::with_capacity(tokens.len());
            for token in tokens {
                match token {
                    TclToken::Word(word) => words.push(word),
                    control @ TclToken::Control(_) => {
                        return Err(ScriptOutcome::fail(format!(
                            "Invalid test line: {line} containing {control}"
                        )))
                    }
                }
            }

            let mut pipeline = self
                .dialect
                .build_pipeline(words)
                .map_err(|_| ScriptOutcome::fail(format!("Tcl 'exec' parse error on: {line}")))?;

            // Wrap only the first command of each pipeline.
            if let Some(first) = pipeline.commands.first_mut() {
                let mut args = self.instrumentation.clone();
                args.append(&mut first.args);
                first.args = args;
            }
            pipelines.push(CommandNode::Pipeline(pipeline));
        }
        Ok(CommandNode::chain(pipelines, SeqOp::And))
    }
}

#[async_trait]
impl ScriptExecutor for LegacyScript {
    async fn execute(&self, script: Script<'_>) -> Result<ScriptOutcome, ExecError> {
        let node = match self.build(script.lines) {
            Ok(Some(node)) => node,
            Ok(None) => {
                return Ok(ScriptOutcome::Completed {
                    stdout: String::new(),
                    stderr: String::new(),
                    exit_code: 0,
                })
            }
            Err(verdict) => return Ok(verdict),
        };

        match &self.shell {
            Some(shell) => {
                let contents = format!("set -o pipefail\n{}\n", to_shell(&node, true)?);
                let path = script_path(script.tmp_base, false);
                run_script_file(script.ctx, vec![OsString::from(shell)], &path, contents).await
            }
            None => run_in_process(script.ctx, &node).await,
        }
    }

    fn stderr_policy(&self) -> StderrPolicy {
        if self.ignore_stderr {
            StderrPolicy::Ignore
        } else {
            StderrPolicy::Fails
        }
    }
}

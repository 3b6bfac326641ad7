// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::ffi::OsString;
use std::path::PathBuf;

use async_trait::async_trait;

use super::{run_script_file, script_path, Script, ScriptExecutor, ScriptOutcome};
use crate::error::ExecError;

const FALLBACK_SHELL: &str = "/bin/sh";

/// Hands the script to a real shell, or to `cmd` on Windows hosts without one.
pub struct ExternalShell {
    shell: Option<PathBuf>,
    instrumentation: Vec<String>,
}

impl ExternalShell {
    pub fn new(shell: Option<PathBuf>, instrumentation: Vec<String>) -> Self {
        Self { shell, instrumentation }
    }
}

#[async_trait]
impl ScriptExecutor for ExternalShell {
    async fn execute(&self, script: Script<'_>) -> Result<ScriptOutcome, ExecError> {
        let batch = script.ctx.host.is_windows && self.shell.is_none();
        let path = script_path(script.tmp_base, batch);

        let (contents, argv) = if batch {
            let contents = script.lines.join("\nif %ERRORLEVEL% NEQ 0 EXIT\n");
            (contents, vec![OsString::from("cmd"), OsString::from("/c")])
        } else {
            let shell = self.shell.clone().unwrap_or_else(|| PathBuf::from(FALLBACK_SHELL));
            let mut argv: Vec<OsString> = self.instrumentation.iter().map(OsString::from).collect();
            argv.push(shell.into_os_string());
            (script.lines.join(" &&\n"), argv)
        };

        run_script_file(script.ctx, argv, &path, contents + "\n").await
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use async_trait::async_trait;

use super::{run_in_process, Script, ScriptExecutor, ScriptOutcome};
use crate::dialect::ScriptParser;
use crate::error::ExecError;

/// Parses the whole script as one `&&` chain and runs it in-process.
pub struct InternalShell {
    parser: Arc<dyn ScriptParser>,
}

impl InternalShell {
    pub fn new(parser: Arc<dyn ScriptParser>) -> Self {
        Self { parser }
    }
}

#[async_trait]
impl ScriptExecutor for InternalShell {
    async fn execute(&self, script: Script<'_>) -> Result<ScriptOutcome, ExecError> {
        let text = script.lines.join(" &&\n");
        let node = match self.parser.parse(&text, false) {
            Ok(node) => node,
            Err(message) => {
                tracing::debug!(%message, "shell parser error");
                return Ok(ScriptOutcome::fail(format!("shell parser error on: {text}")));
            }
        };
        run_in_process(script.ctx, &node).await
    }
}

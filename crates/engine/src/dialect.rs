// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Seams between the script executors and the syntax crates.

use rigor_shell::tcl::{self, DialectError, ExecBuilder, TclToken};
use rigor_shell::{CommandNode, Parser, Pipeline};

/// Turns script text into a command tree.
pub trait ScriptParser: Send + Sync {
    fn parse(&self, text: &str, pipefail: bool) -> Result<CommandNode, String>;
}

/// lit-style shell syntax from `rigor-shell`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellSyntax {
    /// Treat backslashes as literal path characters.
    pub win32_escapes: bool,
}

impl ShellSyntax {
    pub fn new(win32_escapes: bool) -> Self {
        Self { win32_escapes }
    }
}

impl ScriptParser for ShellSyntax {
    fn parse(&self, text: &str, pipefail: bool) -> Result<CommandNode, String> {
        Parser::new(text)
            .pipefail(pipefail)
            .win32_escapes(self.win32_escapes)
            .parse()
            .map_err(|e| e.to_string())
    }
}

/// Line-level operations of a legacy scripting dialect.
pub trait LegacyDialect: Send + Sync {
    fn resolve_escapes(&self, line: &str) -> String;
    fn tokenize(&self, line: &str) -> Result<Vec<TclToken>, DialectError>;
    fn build_pipeline(&self, words: Vec<String>) -> Result<Pipeline, DialectError>;
}

/// Tcl `exec` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TclExec;

impl LegacyDialect for TclExec {
    fn resolve_escapes(&self, line: &str) -> String {
        tcl::resolve_escapes(line)
    }

    fn tokenize(&self, line: &str) -> Result<Vec<TclToken>, DialectError> {
        tcl::tokenize(line)
    }

    fn build_pipeline(&self, words: Vec<String>) -> Result<Pipeline, DialectError> {
        ExecBuilder::new(words).parse_pipeline()
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rigor parse`: show the command tree a script line produces.

use clap::Args;
use rigor_shell::render::to_shell;
use rigor_shell::tcl::{self, ExecBuilder, TclToken};
use rigor_shell::{CommandNode, Parser};

use crate::exit_error::{ExitError, TEST_FAILED};

#[derive(Args, Debug, Default)]
pub struct ParseArgs {
    /// Script line to parse
    pub line: String,

    /// Parse as a Tcl `exec` line
    #[arg(long)]
    pub tcl: bool,

    /// Set pipefail on every pipeline
    #[arg(long)]
    pub pipefail: bool,

    /// Treat backslashes as literal characters
    #[arg(long)]
    pub win32: bool,

    /// Print POSIX shell text instead of the tree
    #[arg(long)]
    pub render: bool,
}

pub fn handle(args: ParseArgs) -> anyhow::Result<()> {
    println!("{}", describe(&args)?);
    Ok(())
}

pub fn describe(args: &ParseArgs) -> anyhow::Result<String> {
    let node = if args.tcl { parse_tcl(&args.line)? } else { parse_shell(args)? };
    if args.render {
        let pipefail = args.pipefail || args.tcl;
        return Ok(to_shell(&node, pipefail)?);
    }
    Ok(format!("{node:#?}"))
}

fn parse_shell(args: &ParseArgs) -> Result<CommandNode, ExitError> {
    Parser::new(&args.line)
        .pipefail(args.pipefail)
        .win32_escapes(args.win32)
        .parse()
        .map_err(|e| ExitError::new(TEST_FAILED, e.diagnostic(&args.line).unwrap_or_else(|| e.to_string())))
}

fn parse_tcl(line: &str) -> Result<CommandNode, ExitError> {
    let line = tcl::resolve_escapes(line);
    let fail = |e: tcl::DialectError| ExitError::new(TEST_FAILED, format!("{e}: {line}"));

    let mut words = Vec::new();
    for token in tcl::tokenize(&line).map_err(fail)? {
        match token {
            TclToken::Word(word) => words.push(word),
            TclToken::Control(c) => {
                return Err(ExitError::new(TEST_FAILED, format!("'{c}' is not allowed in: {line}")))
            }
        }
    }
    let pipeline = ExecBuilder::new(words).parse_pipeline().map_err(fail)?;
    Ok(CommandNode::from(pipeline))
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;

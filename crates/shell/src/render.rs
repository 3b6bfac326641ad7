// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Render a command tree back to POSIX shell text.
//!
//! Used when a tree built in-process has to run under a real shell.

use std::fmt::Write as _;

use thiserror::Error;

use crate::ast::{CommandNode, Pipeline, Redirect, RedirectOp, SimpleCommand};
use crate::lexer::Lexer;
use crate::token::TokenKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("unable to quote {0:?}")]
    Unquotable(String),

    #[error("inconsistent pipefail: pipeline has pipefail={found}, script requires {expected}")]
    InconsistentPipefail { expected: bool, found: bool },
}

/// Render `node` as shell text. Every pipeline's pipefail flag must equal
/// `pipefail`, since the shell applies one setting to the whole script.
pub fn to_shell(node: &CommandNode, pipefail: bool) -> Result<String, RenderError> {
    let mut out = String::new();
    render_node(node, pipefail, &mut out)?;
    Ok(out)
}

/// Quote one argument: single quotes when possible, else double quotes when
/// nothing inside would expand. The result must lex back to `arg`.
pub fn quote(arg: &str) -> Result<String, RenderError> {
    let quoted = if !arg.contains('\'') {
        format!("'{arg}'")
    } else if !arg.contains('"') && !arg.contains('$') {
        format!("\"{arg}\"")
    } else {
        return Err(RenderError::Unquotable(arg.to_string()));
    };

    match Lexer::tokenize(&quoted).as_deref() {
        Ok([token]) if token.kind == TokenKind::Word(arg.to_string()) => Ok(quoted),
        _ => Err(RenderError::Unquotable(arg.to_string())),
    }
}

fn render_node(node: &CommandNode, pipefail: bool, out: &mut String) -> Result<(), RenderError> {
    match node {
        CommandNode::Sequence { left, op, right } => {
            render_node(left, pipefail, out)?;
            let _ = writeln!(out, " {op}");
            render_node(right, pipefail, out)
        }
        CommandNode::Pipeline(pipeline) => render_pipeline(pipeline, pipefail, out),
    }
}

fn render_pipeline(
    pipeline: &Pipeline,
    pipefail: bool,
    out: &mut String,
) -> Result<(), RenderError> {
    if pipeline.pipe_fail != pipefail {
        return Err(RenderError::InconsistentPipefail {
            expected: pipefail,
            found: pipeline.pipe_fail,
        });
    }
    if pipeline.negate {
        out.push_str("! ");
    }
    for (i, cmd) in pipeline.commands.iter().enumerate() {
        if i > 0 {
            out.push_str("|\n  ");
        }
        render_command(cmd, out)?;
    }
    Ok(())
}

fn render_command(cmd: &SimpleCommand, out: &mut String) -> Result<(), RenderError> {
    let mut parts = Vec::with_capacity(cmd.args.len() + cmd.redirects.len());
    for arg in &cmd.args {
        parts.push(quote(arg)?);
    }
    for redirect in &cmd.redirects {
        parts.push(render_redirect(redirect)?);
    }
    out.push_str(&parts.join(" "));
    Ok(())
}

fn render_redirect(redirect: &Redirect) -> Result<String, RenderError> {
    let fd = redirect.fd.map(|fd| fd.to_string()).unwrap_or_default();
    let op = redirect.op.as_str();

    // Descriptor duplications stay bare: `2>&1`.
    let is_dup = matches!(redirect.op, RedirectOp::DupOut | RedirectOp::DupIn);
    if is_dup && !redirect.target.is_empty() && redirect.target.bytes().all(|b| b.is_ascii_digit())
    {
        return Ok(format!("{fd}{op}{}", redirect.target));
    }
    Ok(format!("{fd}{op} {}", quote(&redirect.target)?))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;

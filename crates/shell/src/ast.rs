// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-graph AST consumed by the execution engine.
//!
//! The tree is deliberately small: a script is either a single pipeline or a
//! left-associative chain of pipelines joined by sequencing operators.

use std::fmt;

/// A node of the command graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandNode {
    /// `left <op> right`
    Sequence {
        left: Box<CommandNode>,
        op: SeqOp,
        right: Box<CommandNode>,
    },
    /// One or more simple commands connected by `|`.
    Pipeline(Pipeline),
}

/// Sequencing operator between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqOp {
    /// `;` - run both, keep the right status
    Semi,
    /// `&&` - run right only if left succeeded
    And,
    /// `||` - run right only if left failed
    Or,
    /// `&` - background; parsed but never executed
    Background,
}

impl SeqOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeqOp::Semi => ";",
            SeqOp::And => "&&",
            SeqOp::Or => "||",
            SeqOp::Background => "&",
        }
    }
}

impl fmt::Display for SeqOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pipeline {
    pub commands: Vec<SimpleCommand>,
    /// Report the dominant failure of any stage rather than the last stage's status.
    pub pipe_fail: bool,
    /// `! pipeline`
    pub negate: bool,
}

impl Pipeline {
    pub fn new(commands: Vec<SimpleCommand>) -> Self {
        Self { commands, pipe_fail: false, negate: false }
    }

    pub fn pipe_fail(mut self, pipe_fail: bool) -> Self {
        self.pipe_fail = pipe_fail;
        self
    }

    pub fn negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimpleCommand {
    /// `args[0]` is the program name.
    pub args: Vec<String>,
    pub redirects: Vec<Redirect>,
}

impl SimpleCommand {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { args: args.into_iter().map(Into::into).collect(), redirects: Vec::new() }
    }

    pub fn redirect(mut self, redirect: Redirect) -> Self {
        self.redirects.push(redirect);
        self
    }

    /// Program name, if any.
    pub fn program(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// `"arg0" "arg1" ...`, the form used in execution reports.
    pub fn quoted_args(&self) -> String {
        self.args.iter().map(|a| format!("\"{a}\"")).collect::<Vec<_>>().join(" ")
    }
}

/// Redirect operator as written in the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectOp {
    /// `<`
    In,
    /// `>`
    Out,
    /// `>>`
    Append,
    /// `>&`
    DupOut,
    /// `&>`
    Both,
    /// `<&`
    DupIn,
}

impl RedirectOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedirectOp::In => "<",
            RedirectOp::Out => ">",
            RedirectOp::Append => ">>",
            RedirectOp::DupOut => ">&",
            RedirectOp::Both => "&>",
            RedirectOp::DupIn => "<&",
        }
    }
}

/// One redirect attached to a simple command, e.g. `2>&1` or `>> log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub op: RedirectOp,
    /// Explicit descriptor prefix (`2` in `2>`).
    pub fd: Option<u32>,
    /// File path, or a stream number for duplications.
    pub target: String,
}

impl Redirect {
    pub fn new(op: RedirectOp, fd: Option<u32>, target: impl Into<String>) -> Self {
        Self { op, fd, target: target.into() }
    }
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fd) = self.fd {
            write!(f, "{fd}")?;
        }
        write!(f, "{}{}", self.op.as_str(), self.target)
    }
}

impl CommandNode {
    /// Chain `nodes` left-associatively with `op`. Returns `None` for an empty input.
    pub fn chain(nodes: impl IntoIterator<Item = CommandNode>, op: SeqOp) -> Option<CommandNode> {
        let mut iter = nodes.into_iter();
        let first = iter.next()?;
        Some(iter.fold(first, |left, right| CommandNode::Sequence {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }))
    }

    /// Visit every pipeline in evaluation order.
    pub fn pipelines(&self) -> Vec<&Pipeline> {
        let mut out = Vec::new();
        self.collect_pipelines(&mut out);
        out
    }

    fn collect_pipelines<'a>(&'a self, out: &mut Vec<&'a Pipeline>) {
        match self {
            CommandNode::Sequence { left, right, .. } => {
                left.collect_pipelines(out);
                right.collect_pipelines(out);
            }
            CommandNode::Pipeline(p) => out.push(p),
        }
    }

    /// Mutable visit of every pipeline in evaluation order.
    pub fn for_each_pipeline_mut(&mut self, f: &mut impl FnMut(&mut Pipeline)) {
        match self {
            CommandNode::Sequence { left, right, .. } => {
                left.for_each_pipeline_mut(f);
                right.for_each_pipeline_mut(f);
            }
            CommandNode::Pipeline(p) => f(p),
        }
    }

    /// Total number of simple commands in the tree.
    pub fn count_simple_commands(&self) -> usize {
        self.pipelines().iter().map(|p| p.commands.len()).sum()
    }
}

impl From<Pipeline> for CommandNode {
    fn from(p: Pipeline) -> Self {
        CommandNode::Pipeline(p)
    }
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rigor-shell: command graphs for test scripts.
//!
//! Holds the [`CommandNode`] tree the execution engine consumes, the lit-style
//! [`Parser`] that produces it from a script line, the Tcl `exec` dialect of
//! legacy scripts, and [`render::to_shell`] for handing a tree to a real shell.

pub mod ast;
mod error;
pub mod lexer;
mod parse_error;
pub mod parser;
pub mod render;
mod span;
pub mod tcl;
pub mod token;

pub use ast::{CommandNode, Pipeline, Redirect, RedirectOp, SeqOp, SimpleCommand};
pub use error::LexerError;
pub use parse_error::ParseError;
pub use parser::Parser;
pub use render::RenderError;
pub use span::{diagnostic_context, locate_span, Location, Span};
pub use tcl::{DialectError, TclToken};

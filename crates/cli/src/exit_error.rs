// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error value that carries the process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! themselves; `main()` turns it into the exit status.

use std::fmt;

/// Exit status for a failing or unexpectedly passing test.
pub const TEST_FAILED: i32 = 1;
/// Exit status for engine and usage errors.
pub const ENGINE_ERROR: i32 = 2;
/// Exit status after a child was killed by Ctrl-C.
pub const INTERRUPTED: i32 = 130;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    /// Printed to stderr by `main()` when non-empty.
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Exit with `code` without printing anything more.
    pub fn silent(code: i32) -> Self {
        Self::new(code, "")
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Exit code and message for a top-level error.
pub fn exit_status(err: &anyhow::Error) -> (i32, String) {
    match err.downcast_ref::<ExitError>() {
        Some(exit) => (exit.code, exit.message.clone()),
        None => (ENGINE_ERROR, format!("error: {err:#}")),
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;

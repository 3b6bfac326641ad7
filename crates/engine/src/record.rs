// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-command execution records and their text report.

use std::fmt::{self, Write as _};

use rigor_shell::SimpleCommand;

/// What one simple command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRecord {
    pub command: SimpleCommand,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub exit_code: i32,
}

impl ExecutionRecord {
    pub fn new(command: SimpleCommand, stdout: Vec<u8>, stderr: Vec<u8>, exit_code: i32) -> Self {
        Self { command, stdout, stderr, exit_code }
    }
}

/// Render records as the report stored in a test's stdout.
///
/// ```text
/// Command 0: "echo" "hi"
/// Command 0 Result: 0
/// Command 0 Output:
/// hi
///
///
/// Command 0 Stderr:
///
///
/// ```
pub fn format_records(records: &[ExecutionRecord]) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = write_record(&mut out, i, record);
    }
    out
}

fn write_record(out: &mut String, i: usize, record: &ExecutionRecord) -> fmt::Result {
    writeln!(out, "Command {i}: {}", record.command.quoted_args())?;
    writeln!(out, "Command {i} Result: {}", record.exit_code)?;
    write!(
        out,
        "Command {i} Output:\n{}\n\nCommand {i} Stderr:\n{}\n\n",
        String::from_utf8_lossy(&record.stdout),
        String::from_utf8_lossy(&record.stderr)
    )
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;

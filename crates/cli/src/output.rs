// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use clap::ValueEnum;
use rigor_engine::TestOutcome;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `<VERDICT>: <script>` followed by the diagnostic, if any.
pub fn format_text(outcome: &TestOutcome, script: &Path) -> String {
    let mut out = format!("{}: {}\n", crate::color::verdict(outcome.verdict), script.display());
    if !outcome.diagnostic.is_empty() {
        out.push_str(&outcome.diagnostic);
        if !outcome.diagnostic.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

pub fn format_json(outcome: &TestOutcome, script: &Path) -> anyhow::Result<String> {
    let obj = serde_json::json!({
        "script": script.display().to_string(),
        "verdict": outcome.verdict,
        "diagnostic": outcome.diagnostic,
    });
    Ok(serde_json::to_string_pretty(&obj)?)
}

pub fn print_outcome(outcome: &TestOutcome, script: &Path, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", format_text(outcome, script)),
        OutputFormat::Json => println!("{}", format_json(outcome, script)?),
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

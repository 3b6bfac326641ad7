// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

use std::path::PathBuf;

/// Shell used by the external strategy: `RIGOR_SHELL`.
pub fn shell() -> Option<PathBuf> {
    std::env::var_os("RIGOR_SHELL").filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Parse scripts and report PASS without running them: `RIGOR_NO_EXECUTE`.
pub fn no_execute() -> Option<bool> {
    flag("RIGOR_NO_EXECUTE")
}

/// Do not fail legacy scripts for writing to stderr: `RIGOR_IGNORE_STDERR`.
pub fn ignore_stderr() -> Option<bool> {
    flag("RIGOR_IGNORE_STDERR")
}

/// Config file: `RIGOR_CONFIG` > <config dir>/rigor/config.toml
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("RIGOR_CONFIG").filter(|s| !s.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("rigor").join("config.toml"))
}

/// `1`/`true`/`yes`/`on` or `0`/`false`/`no`/`off`; anything else is ignored.
fn flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

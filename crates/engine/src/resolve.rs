// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Program lookup.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Turns a program name into the absolute path that gets spawned.
pub trait CommandResolver: Send + Sync {
    /// `path_var` is the `PATH` of the environment the command will run in.
    fn resolve(&self, name: &str, cwd: &Path, path_var: Option<&OsStr>) -> Option<PathBuf>;
}

/// `PATH` search through `which`, including `PATHEXT` on Windows.
///
/// Names with a separator and relative `PATH` entries resolve against `cwd`,
/// which is made absolute first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSearch;

impl CommandResolver for PathSearch {
    fn resolve(&self, name: &str, cwd: &Path, path_var: Option<&OsStr>) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        let cwd = std::path::absolute(cwd).ok()?;
        let paths = path_var.and_then(|var| absolute_entries(var, &cwd));

        match which::which_in(name, paths, &cwd) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::trace!(name, error = %e, "program not found");
                None
            }
        }
    }
}

/// Rewrite `path_var` with relative and empty entries dropped or anchored at `cwd`.
fn absolute_entries(path_var: &OsStr, cwd: &Path) -> Option<OsString> {
    let dirs = std::env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| if dir.is_absolute() { dir } else { cwd.join(dir) });
    std::env::join_paths(dirs).ok()
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared inputs threaded through one execution.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::host::HostProfile;
use crate::resolve::{CommandResolver, PathSearch};

/// Working directory, environment and host facts for spawning children.
///
/// Children get exactly `env`; nothing is inherited from this process.
/// `cwd` is absolute so resolved program paths survive the child's chdir.
#[derive(Clone)]
pub struct ExecContext {
    pub cwd: PathBuf,
    pub env: HashMap<String, String>,
    pub host: HostProfile,
    pub resolver: Arc<dyn CommandResolver>,
}

impl ExecContext {
    pub fn new(cwd: impl Into<PathBuf>, env: HashMap<String, String>) -> Self {
        let cwd = cwd.into();
        Self {
            cwd: std::path::absolute(&cwd).unwrap_or(cwd),
            env,
            host: HostProfile::detect(),
            resolver: Arc::new(PathSearch),
        }
    }

    pub fn host(mut self, host: HostProfile) -> Self {
        self.host = host;
        self
    }

    pub fn resolver(mut self, resolver: Arc<dyn CommandResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// `PATH` of the child environment (`Path` on Windows hosts).
    pub fn path_var(&self) -> Option<&OsStr> {
        self.env
            .iter()
            .find(|(k, _)| k.as_str() == "PATH" || (self.host.is_windows && k.eq_ignore_ascii_case("path")))
            .map(|(_, v)| OsStr::new(v.as_str()))
    }
}

impl std::fmt::Debug for ExecContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecContext")
            .field("cwd", &self.cwd)
            .field("env", &self.env.len())
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration loaded from TOML.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::env;
use crate::host::HostProfile;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings shared by every test of a run.
///
/// ```toml
/// external_shell_path = "/bin/bash"
/// ignore_stderr_as_failure = true
/// instrumentation_args = ["valgrind", "-q", "--error-exitcode=123"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Report PASS without running anything.
    pub skip_execution: bool,
    /// Treat the host as Windows. Unset means "detect".
    pub is_windows_host: Option<bool>,
    /// Legacy scripts normally fail on any stderr output.
    pub ignore_stderr_as_failure: bool,
    /// Show the diagnostic even for passing shell tests.
    pub always_show_output: bool,
    pub external_shell_path: Option<PathBuf>,
    /// Wrapper argv prefixed to launched commands (e.g. a memory checker).
    pub instrumentation_args: Vec<String>,
    /// Run legacy scripts through `external_shell_path` instead of in-process.
    pub legacy_via_external_shell: bool,
    /// Substitute temporary files for the null device. Unset means "host default".
    pub avoid_dev_null: Option<bool>,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::parse(&text, path)
    }

    /// Load `path` if it exists, else the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path: path.to_path_buf(), source }),
        }
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Apply `RIGOR_SHELL`, `RIGOR_NO_EXECUTE` and `RIGOR_IGNORE_STDERR`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(shell) = env::shell() {
            self.external_shell_path = Some(shell);
        }
        if let Some(skip) = env::no_execute() {
            self.skip_execution = skip;
        }
        if let Some(ignore) = env::ignore_stderr() {
            self.ignore_stderr_as_failure = ignore;
        }
        self
    }

    /// Detected host facts with this config's overrides applied.
    pub fn host_profile(&self) -> HostProfile {
        let mut host = HostProfile::detect();
        if let Some(is_windows) = self.is_windows_host {
            host.is_windows = is_windows;
            host.avoid_dev_null = is_windows;
        }
        if let Some(avoid) = self.avoid_dev_null {
            host.avoid_dev_null = avoid;
        }
        host
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host facts detected once per process: platform, null-device policy, and
//! how to wait for a child's file handles to be released.

use std::io;
use std::path::Path;
use std::time::Duration;

use crate::error::ExecError;

/// The null device as test scripts spell it.
pub const NULL_DEVICE: &str = "/dev/null";

/// Windows `ERROR_SHARING_VIOLATION`.
const SHARING_VIOLATION: i32 = 32;

/// Whether (and how) to wait until exited children have released a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleRelease {
    /// No way to probe; release is assumed once the child exits.
    #[default]
    Unavailable,
    /// Retry an exclusive open until it stops failing with a sharing violation.
    ExclusiveOpen { attempts: u32, interval: Duration },
}

impl HandleRelease {
    pub fn detect() -> Self {
        if cfg!(windows) {
            HandleRelease::ExclusiveOpen { attempts: 256, interval: Duration::from_millis(10) }
        } else {
            HandleRelease::Unavailable
        }
    }

    /// Block until `path` is exclusively openable. A missing file counts as released.
    pub async fn wait_released(&self, path: &Path) -> Result<(), ExecError> {
        let HandleRelease::ExclusiveOpen { attempts, interval } = *self else {
            return Ok(());
        };

        let mut last_violation = None;
        for attempt in 1..=attempts {
            match open_exclusive(path) {
                Ok(_) => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
                Err(e) if e.raw_os_error() == Some(SHARING_VIOLATION) => {
                    tracing::warn!(path = %path.display(), attempt, "file still in use, retrying");
                    last_violation = Some(e);
                    tokio::time::sleep(interval).await;
                }
                Err(source) => {
                    return Err(ExecError::HandleRelease { path: path.to_path_buf(), source })
                }
            }
        }
        Err(ExecError::HandleRelease {
            path: path.to_path_buf(),
            source: last_violation
                .unwrap_or_else(|| io::Error::other("no release attempts configured")),
        })
    }
}

#[cfg(windows)]
fn open_exclusive(path: &Path) -> io::Result<std::fs::File> {
    use std::os::windows::fs::OpenOptionsExt;
    std::fs::OpenOptions::new().read(true).share_mode(0).open(path)
}

#[cfg(not(windows))]
fn open_exclusive(path: &Path) -> io::Result<std::fs::File> {
    std::fs::File::open(path)
}

/// Platform facts the engine consults while wiring processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostProfile {
    pub is_windows: bool,
    /// Replace null-device redirects and arguments with temporary files.
    pub avoid_dev_null: bool,
    pub handle_release: HandleRelease,
}

impl HostProfile {
    pub fn detect() -> Self {
        Self {
            is_windows: cfg!(windows),
            avoid_dev_null: cfg!(windows),
            handle_release: HandleRelease::detect(),
        }
    }

    pub fn avoid_dev_null(mut self, enabled: bool) -> Self {
        self.avoid_dev_null = enabled;
        self
    }

    pub fn handle_release(mut self, handle_release: HandleRelease) -> Self {
        self.handle_release = handle_release;
        self
    }
}

impl Default for HostProfile {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;

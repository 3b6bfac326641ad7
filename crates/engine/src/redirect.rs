// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection resolution for one simple command.
//!
//! [`resolve`] is pure: it folds the redirect list into three [`StreamSlot`]s
//! plus a table of files to open. [`open_targets`] then opens that table.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use rigor_shell::{Redirect, RedirectOp};

use crate::error::ExecError;
use crate::host::{HostProfile, NULL_DEVICE};

/// One of the three standard streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdin,
    Stdout,
    Stderr,
}

impl Stream {
    fn from_target(target: &str) -> Option<Stream> {
        match target {
            "0" => Some(Stream::Stdin),
            "1" => Some(Stream::Stdout),
            "2" => Some(Stream::Stderr),
            _ => None,
        }
    }
}

/// Where a stream ends up after redirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamSlot {
    /// The stream's default endpoint, or the default endpoint of another
    /// stream it was duplicated onto. Stdin defaults to the pipeline input;
    /// stdout and stderr default to pipes.
    Default(Stream),
    /// An entry of [`ResolvedRedirects::files`].
    File(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    Truncate,
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    pub path: String,
    pub mode: OpenMode,
}

/// Final endpoints for one command.
///
/// `stdin` is `Default(Stdin)` or a file; `stdout` is `Default(Stdout)` or a
/// file; `stderr` may additionally be `Default(Stdout)`, meaning "whatever
/// stdout's default pipe is".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRedirects {
    pub stdin: StreamSlot,
    pub stdout: StreamSlot,
    pub stderr: StreamSlot,
    pub files: Vec<FileTarget>,
}

impl ResolvedRedirects {
    /// `2>&1` applied while stdout was still its default pipe.
    pub fn stderr_follows_stdout(&self) -> bool {
        self.stderr == StreamSlot::Default(Stream::Stdout)
    }

    /// Whether this command reads the previous stage's output.
    pub fn reads_pipeline_input(&self) -> bool {
        self.stdin == StreamSlot::Default(Stream::Stdin)
    }
}

/// Apply `redirects` in order; later entries override earlier ones.
pub fn resolve(redirects: &[Redirect]) -> Result<ResolvedRedirects, ExecError> {
    let mut slots = [
        StreamSlot::Default(Stream::Stdin),
        StreamSlot::Default(Stream::Stdout),
        StreamSlot::Default(Stream::Stderr),
    ];
    let mut files = Vec::new();
    let mut open = |path: &str, mode: OpenMode| {
        files.push(FileTarget { path: path.to_string(), mode });
        StreamSlot::File(files.len() - 1)
    };
    let unsupported = |r: &Redirect| ExecError::UnsupportedRedirect { redirect: r.to_string() };

    for r in redirects {
        match (r.op, r.fd) {
            (RedirectOp::Out, None | Some(1)) => slots[1] = open(&r.target, OpenMode::Truncate),
            (RedirectOp::Append, None | Some(1)) => slots[1] = open(&r.target, OpenMode::Append),
            (RedirectOp::Out, Some(2)) => slots[2] = open(&r.target, OpenMode::Truncate),
            (RedirectOp::Append, Some(2)) => slots[2] = open(&r.target, OpenMode::Append),
            (RedirectOp::In, None | Some(0)) => slots[0] = open(&r.target, OpenMode::Read),
            (RedirectOp::DupOut, Some(2)) => {
                let source = Stream::from_target(&r.target).ok_or_else(|| unsupported(r))?;
                slots[2] = slots[source as usize];
            }
            (RedirectOp::DupOut, None) if Stream::from_target(&r.target).is_none() => {
                let slot = open(&r.target, OpenMode::Truncate);
                slots[1] = slot;
                slots[2] = slot;
            }
            (RedirectOp::Both, None) => {
                let slot = open(&r.target, OpenMode::Truncate);
                slots[1] = slot;
                slots[2] = slot;
            }
            _ => return Err(unsupported(r)),
        }
    }

    let [stdin, stdout, stderr] = slots;
    let resolved = ResolvedRedirects { stdin, stdout, stderr, files };
    validate(&resolved)?;
    Ok(resolved)
}

/// Reject endpoints no process can be given.
fn validate(resolved: &ResolvedRedirects) -> Result<(), ExecError> {
    let unsupported = |what: &str| ExecError::UnsupportedRedirect { redirect: what.to_string() };

    if let StreamSlot::File(i) = resolved.stdout {
        if resolved.files[i].mode == OpenMode::Read {
            return Err(unsupported("stdout redirected to an input file"));
        }
    }
    match resolved.stderr {
        StreamSlot::Default(Stream::Stdin) => Err(unsupported("stderr duplicated onto stdin")),
        StreamSlot::File(i) if resolved.files[i].mode == OpenMode::Read => {
            Err(unsupported("stderr duplicated onto an input file"))
        }
        _ => Ok(()),
    }
}

/// An opened redirect target.
#[derive(Debug)]
pub struct OpenedFile {
    pub file: File,
    /// `None` for a null-device substitute, which has no name.
    pub path: Option<PathBuf>,
}

impl OpenedFile {
    pub fn try_clone(&self) -> Result<File, ExecError> {
        self.file.try_clone().map_err(ExecError::io("duplicating redirect handle"))
    }
}

/// Open every file of `targets` relative to `cwd`, in table order.
pub fn open_targets(
    targets: &[FileTarget],
    cwd: &Path,
    host: &HostProfile,
) -> Result<Vec<OpenedFile>, ExecError> {
    targets.iter().map(|target| open_target(target, cwd, host)).collect()
}

fn open_target(target: &FileTarget, cwd: &Path, host: &HostProfile) -> Result<OpenedFile, ExecError> {
    if host.avoid_dev_null && target.path == NULL_DEVICE {
        // Anonymous and deleted on close; reads see an empty file.
        let file = tempfile::tempfile().map_err(ExecError::io("creating null-device substitute"))?;
        return Ok(OpenedFile { file, path: None });
    }

    let path = cwd.join(&target.path);
    let mut options = OpenOptions::new();
    match target.mode {
        OpenMode::Read => options.read(true),
        OpenMode::Truncate => options.write(true).create(true).truncate(true),
        OpenMode::Append => options.append(true).create(true),
    };
    let file = options
        .open(&path)
        .map_err(|source| ExecError::Redirect { path: path.clone(), source })?;
    Ok(OpenedFile { file, path: Some(path) })
}

#[cfg(test)]
#[path = "redirect_tests.rs"]
mod tests;

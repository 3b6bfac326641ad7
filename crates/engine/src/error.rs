// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine error types.

use std::path::PathBuf;

use rigor_shell::{RenderError, SimpleCommand};
use thiserror::Error;

/// Errors that abort a script execution.
///
/// Non-zero exits and stderr output are ordinary outcomes and never show up
/// here.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Program name did not resolve; raised before anything in the pipeline spawns.
    #[error("{message}")]
    CommandNotFound { command: SimpleCommand, message: String },

    #[error("unsupported redirect: {redirect}")]
    UnsupportedRedirect { redirect: String },

    #[error("unsupported shell feature: {feature}")]
    Unsupported { feature: String },

    /// A child died from SIGINT; the whole run stops.
    #[error("interrupted: '{command}' was killed by SIGINT")]
    Interrupted { command: String },

    #[error("file still in use after release poll: {}", path.display())]
    HandleRelease {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open redirect target {}: {source}", path.display())]
    Redirect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot render script for the external shell: {0}")]
    Render(#[from] RenderError),
}

impl ExecError {
    pub(crate) fn io(context: impl Into<String>) -> impl FnOnce(std::io::Error) -> ExecError {
        let context = context.into();
        move |source| ExecError::Io { context, source }
    }
}

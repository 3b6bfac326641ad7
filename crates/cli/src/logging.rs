// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics on stderr, filtered by `RIGOR_LOG` (then `RUST_LOG`).

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Filter directives from the environment, or the default.
pub fn filter_directives() -> String {
    ["RIGOR_LOG", "RUST_LOG"]
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

pub fn init() {
    let filter = EnvFilter::try_new(filter_directives()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use rigor_engine::TestVerdict;
use std::io::IsTerminal;

/// ANSI 256 palette.
pub mod codes {
    pub const HEADER: u8 = 74;
    pub const LITERAL: u8 = 250;
    pub const CONTEXT: u8 = 245;
    /// PASS and XFAIL
    pub const GOOD: u8 = 71;
    /// FAIL and XPASS
    pub const BAD: u8 = 167;
    pub const SKIPPED: u8 = 179;
}

/// `NO_COLOR=1` wins over `COLOR=1`; otherwise color only on a terminal.
pub fn should_colorize() -> bool {
    let is_one = |name: &str| std::env::var(name).is_ok_and(|v| v == "1");
    if is_one("NO_COLOR") {
        return false;
    }
    is_one("COLOR") || std::io::stdout().is_terminal()
}

fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

/// Help output styles for clap.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled().header(fg(codes::HEADER)).literal(fg(codes::LITERAL)).placeholder(fg(codes::CONTEXT))
}

const RESET: &str = "\x1b[0m";

/// The verdict name, colored by outcome when color is enabled.
pub fn verdict(verdict: TestVerdict) -> String {
    if !should_colorize() {
        return verdict.to_string();
    }
    let code = match verdict {
        TestVerdict::Pass | TestVerdict::XFail => codes::GOOD,
        TestVerdict::Fail | TestVerdict::XPass => codes::BAD,
        TestVerdict::Unsupported => codes::SKIPPED,
    };
    format!("\x1b[38;5;{code}m{verdict}{RESET}")
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script lines from a test file.

const RUN_MARKER: &str = "RUN:";

/// Lines to execute for the file contents `text`.
///
/// A file with `RUN:` markers contributes only the text after each marker;
/// a trailing `\` continues onto the next `RUN:` line. A file without markers
/// is a plain script: every non-blank line not starting with `#`.
pub fn script_lines(text: &str) -> Vec<String> {
    if !text.contains(RUN_MARKER) {
        return text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
    }

    let mut lines = Vec::new();
    let mut pending: Option<String> = None;
    for raw in text.lines() {
        let Some(idx) = raw.find(RUN_MARKER) else {
            continue;
        };
        let content = raw[idx + RUN_MARKER.len()..].trim();
        let line = match pending.take() {
            Some(head) if content.is_empty() => head,
            Some(head) => format!("{head} {content}"),
            None => content.to_string(),
        };
        match line.strip_suffix('\\') {
            Some(head) => pending = Some(head.trim_end().to_string()),
            None if line.is_empty() => {}
            None => lines.push(line),
        }
    }
    if let Some(head) = pending.filter(|h| !h.is_empty()) {
        lines.push(head);
    }
    lines
}

#[cfg(test)]
#[path = "script_file_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte ranges into a script line, and the caret diagnostics built on them.

/// Half-open byte range `start..end` of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Where a span starts: 1-based line, 0-based column in chars, and the
/// full text of that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub line: usize,
    pub column: usize,
    pub text: &'a str,
}

/// Find the line holding `span.start`. Offsets past the end clamp to the
/// end of the source.
pub fn locate_span(source: &str, span: Span) -> Location<'_> {
    let offset = span.start.min(source.len());
    let head = source.get(..offset).unwrap_or(source);
    let line_start = head.rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[line_start..].find('\n').map_or(source.len(), |i| line_start + i);

    Location {
        line: head.matches('\n').count() + 1,
        column: head[line_start..].chars().count(),
        text: &source[line_start..line_end],
    }
}

/// Render `message` with the offending line and a caret run under `span`:
///
/// ```text
/// error: unexpected '|'
///   --> line 1, column 9
///    |
///   1 | true && | x
///    |         ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let at = locate_span(source, span);
    let pad = " ".repeat(at.column);
    let carets = "^".repeat(span.len().max(1));
    format!(
        "error: {message}\n  --> line {line}, column {col}\n   |\n{line:>3} | {text}\n   | {pad}{carets}",
        line = at.line,
        col = at.column + 1,
        text = at.text,
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;

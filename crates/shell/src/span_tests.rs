// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    first_line = { "echo hello world", 5, 1, 5, "echo hello world" },
    second_line = { "true &&\necho world", 8, 2, 0, "echo world" },
    mid_second_line = { "a\nbc de", 5, 2, 3, "bc de" },
    past_end = { "abc", 10, 1, 3, "abc" },
    multibyte = { "é x", 3, 1, 2, "é x" },
)]
fn locates(source: &str, start: usize, line: usize, column: usize, text: &str) {
    assert_eq!(locate_span(source, Span::new(start, start)), Location { line, column, text });
}

#[test]
fn diagnostic_points_at_span() {
    let out = diagnostic_context("true && | x", Span::new(8, 9), "unexpected '|'");
    assert_eq!(
        out,
        "error: unexpected '|'\n  --> line 1, column 9\n   |\n  1 | true && | x\n   |         ^"
    );
}

#[test]
fn empty_span_still_gets_a_caret() {
    let out = diagnostic_context("echo >", Span::new(6, 6), "missing target");
    assert!(out.ends_with("|       ^"), "{out}");
    assert!(Span::new(6, 6).is_empty());
}

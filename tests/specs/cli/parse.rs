//! `rigor parse` prints command trees and rendered shell text.

use crate::prelude::*;

#[test]
fn prints_the_tree() {
    cli().args(&["parse", "echo hi | wc -l"]).passes().stdout_has("Pipeline").stdout_has("\"echo\"").stdout_has("\"wc\"");
}

#[test]
fn renders_shell_text() {
    cli().args(&["parse", "--render", "a && b"]).passes().stdout_has("a").stdout_has("&&").stdout_has("b");
}

#[test]
fn syntax_error_points_at_the_column() {
    cli().args(&["parse", "true && | x"]).fails().stderr_has("line 1, column 9").stderr_has("^");
}

#[test]
fn tcl_braces_render_as_one_word() {
    cli().args(&["parse", "--tcl", "--render", "echo {a b} | cat"]).passes().stdout_has("'echo' 'a b'|");
}

#[test]
fn tcl_control_token_is_rejected() {
    cli().args(&["parse", "--tcl", "echo a ; echo b"]).fails().stderr_has("is not allowed in");
}

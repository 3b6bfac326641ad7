//! Help and version output.

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("run").stdout_has("parse");
}

#[test]
fn run_help_lists_strategies() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--strategy")
        .stdout_has("internal")
        .stdout_has("external")
        .stdout_has("tcl");
}

#[test]
fn version_prints_name() {
    cli().args(&["--version"]).passes().stdout_has("rigor ");
}

#[test]
fn unknown_subcommand_is_rejected() {
    cli().args(&["frobnicate"]).exits(2).stderr_has("frobnicate");
}

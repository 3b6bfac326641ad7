// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rigor: run lit-style test scripts.

mod color;
mod commands;
mod exit_error;
mod logging;
mod output;
mod script_file;

use clap::{Parser, Subcommand};

use crate::commands::{parse, run};

#[derive(Parser)]
#[command(name = "rigor", version, about = "Run lit-style test scripts", styles = color::styles())]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one test script and print its verdict
    Run(run::RunArgs),
    /// Parse a script line and print the command tree
    Parse(parse::ParseArgs),
}

#[tokio::main]
async fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => run::handle(args).await,
        Commands::Parse(args) => parse::handle(args),
    };

    if let Err(err) = result {
        let (code, message) = exit_error::exit_status(&err);
        if !message.is_empty() {
            eprintln!("{message}");
        }
        std::process::exit(code);
    }
}

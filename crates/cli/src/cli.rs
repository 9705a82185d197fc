// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Command, CommandFactory, Parser};

use crate::config::defaults::CONFIG_ENV;

/// Configuration front end for the testforge test generator
#[derive(Debug, Parser)]
#[command(name = "testforge")]
#[command(version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = CONFIG_ENV, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress console output
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write log output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Build the argument parser consumed by
/// [`ConfigurationBuilder::build_from_cli_arguments`](crate::ConfigurationBuilder::build_from_cli_arguments).
pub fn create_argument_parser() -> Command {
    Cli::command()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

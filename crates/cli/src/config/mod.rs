// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration and its builder.
//!
//! A [`Configuration`] is only ever produced by [`ConfigurationBuilder::build`].
//! The builder can be seeded from a [`ConfigFile`] and then overlaid with
//! parsed command-line arguments.

pub mod defaults;
pub mod file;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{Command, FromArgMatches};

use crate::cli::Cli;
use crate::error::Result;

pub use file::ConfigFile;

/// Finalized, read-only configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    verbose: bool,
    quiet: bool,
    log_file: Option<PathBuf>,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

/// Accumulates options before producing a [`Configuration`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ConfigurationBuilder {
    verbose: bool,
    quiet: bool,
    log_file: Option<PathBuf>,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a builder with the values from a config file.
    pub fn from_config_file(file: &ConfigFile) -> Self {
        Self {
            verbose: file.verbose,
            quiet: file.quiet,
            log_file: file.log_file.clone(),
        }
    }

    pub fn set_quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    pub fn set_verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    pub fn set_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Overlay parsed command-line arguments.
    ///
    /// Flags only ever switch an option on; `--log-file` replaces any
    /// path already present.
    pub fn apply_cli(self, cli: &Cli) -> Self {
        let mut builder = self;
        if cli.quiet {
            builder = builder.set_quiet();
        }
        if cli.verbose {
            builder = builder.set_verbose();
        }
        if let Some(path) = &cli.log_file {
            builder = builder.set_log_file(path.clone());
        }
        builder
    }

    pub fn build(self) -> Configuration {
        Configuration {
            verbose: self.verbose,
            quiet: self.quiet,
            log_file: self.log_file,
        }
    }

    /// Run `parser` over `args` and build a configuration from the result.
    ///
    /// `args` excludes the program name. Unknown arguments are rejected
    /// by the parser and returned as [`Error::Cli`](crate::Error::Cli).
    pub fn build_from_cli_arguments<I, T>(parser: Command, args: I) -> Result<Configuration>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let program = OsString::from(parser.get_name());
        let argv = std::iter::once(program).chain(args.into_iter().map(Into::into));
        let matches = parser.try_get_matches_from(argv)?;
        let cli = Cli::from_arg_matches(&matches)?;
        tracing::trace!(?cli, "parsed command line");
        Ok(Self::new().apply_cli(&cli).build())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for configuration loading and logging setup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while assembling a [`Configuration`](crate::Configuration).
#[derive(Debug, Error)]
pub enum Error {
    /// The argument parser rejected the command line.
    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config version {version} in {} (expected {expected})", .path.display())]
    UnsupportedVersion {
        path: PathBuf,
        version: u32,
        expected: u32,
    },

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, Error>;

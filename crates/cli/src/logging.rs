// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.
//!
//! Console output goes to stderr unless `quiet` is set. When a log file is
//! configured, the same events are appended to it without ANSI colors.
//! `RUST_LOG` overrides the default level selection.

use std::env::{self, VarError};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Configuration;
use crate::config::defaults;
use crate::error::{Error, Result};

/// Install the global tracing subscriber for `config`.
pub fn init(config: &Configuration) -> Result<()> {
    let (filter, rejected) = resolve_filter(config, env::var(EnvFilter::DEFAULT_ENV));

    let console_layer = (!config.quiet()).then(|| fmt::layer().with_writer(std::io::stderr));

    let file_layer = match config.log_file() {
        Some(path) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    if let Some(reason) = rejected {
        tracing::warn!("ignoring {}: {}", EnvFilter::DEFAULT_ENV, reason);
    }
    Ok(())
}

/// Default directive for `config` when `RUST_LOG` is not usable.
pub fn default_directive(config: &Configuration) -> String {
    let crate_name = env!("CARGO_CRATE_NAME");
    if config.verbose() {
        defaults::log::verbose(crate_name)
    } else {
        defaults::log::normal(crate_name)
    }
}

/// Choose the filter from the user's `RUST_LOG` value, falling back to
/// [`default_directive`]. The second element explains a rejected value.
pub(crate) fn resolve_filter(
    config: &Configuration,
    user_directive: std::result::Result<String, VarError>,
) -> (EnvFilter, Option<String>) {
    let fallback = || EnvFilter::new(default_directive(config));
    match user_directive {
        Ok(directive) => match EnvFilter::builder().parse(&directive) {
            Ok(filter) => (filter, None),
            Err(err) => (fallback(), Some(err.to_string())),
        },
        Err(VarError::NotPresent) => (fallback(), None),
        Err(err @ VarError::NotUnicode(_)) => (fallback(), Some(err.to_string())),
    }
}

/// Open `path` for appending, creating missing parent directories.
pub(crate) fn open_log_file(path: &Path) -> Result<File> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `testforge.toml` file format.
//!
//! ```toml
//! version = 1
//! verbose = true
//! log_file = "logs/testforge.log"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::defaults::CONFIG_VERSION;
use crate::error::{Error, Result};

/// On-disk configuration layer, applied beneath the command line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// File format version (must be 1).
    pub version: u32,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub quiet: bool,

    /// Log file path. Relative paths resolve against the config file's directory.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

/// Parse config file content. `path` is used for error messages and
/// for resolving a relative `log_file`.
pub fn parse(content: &str, path: &Path) -> Result<ConfigFile> {
    let mut config: ConfigFile = toml::from_str(content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if config.version != CONFIG_VERSION {
        return Err(Error::UnsupportedVersion {
            path: path.to_path_buf(),
            version: config.version,
            expected: CONFIG_VERSION,
        });
    }

    config.log_file = config.log_file.map(|log_file| resolve_relative(path, log_file));
    Ok(config)
}

/// Read and parse a config file.
pub fn load(path: &Path) -> Result<ConfigFile> {
    tracing::debug!("loading config from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

fn resolve_relative(config_path: &Path, log_file: PathBuf) -> PathBuf {
    if log_file.is_absolute() {
        return log_file;
    }
    match config_path.parent() {
        Some(dir) => dir.join(log_file),
        None => log_file,
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;

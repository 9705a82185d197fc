// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from a start directory up to the git root looking for testforge.toml.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE_NAME;

/// Nearest testforge.toml in `start_dir` or one of its ancestors.
///
/// A directory holding `.git` is the last one searched. A directory that
/// happens to be named testforge.toml is skipped.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        current = current.parent()?;
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing console output.
//!
//! Writes to stderr. Status lines are hidden by `--quiet`; detail lines
//! additionally require `--verbose`.

use crate::config::Configuration;

pub struct Console {
    quiet: bool,
    verbose: bool,
}

impl Console {
    pub fn new(config: &Configuration) -> Self {
        Self {
            quiet: config.quiet(),
            verbose: config.verbose(),
        }
    }

    pub fn shows_status(&self) -> bool {
        !self.quiet
    }

    /// Quiet wins over verbose.
    pub fn shows_detail(&self) -> bool {
        self.verbose && !self.quiet
    }

    pub fn status(&self, msg: &str) {
        if self.shows_status() {
            eprintln!("{}", msg);
        }
    }

    /// Print a detail line (indented as content under a section).
    pub fn detail(&self, msg: &str) {
        if self.shows_detail() {
            eprintln!("  {}", msg);
        }
    }

    pub fn section(&self, title: &str) {
        if self.shows_detail() {
            eprintln!("\n{}:", title);
        }
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;

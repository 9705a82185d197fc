// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Name of the config file looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "testforge.toml";

/// The only config file format version understood by this release.
pub const CONFIG_VERSION: u32 = 1;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TESTFORGE_CONFIG";

/// Default log directives.
pub mod log {
    /// Directive used when `verbose` is off.
    pub fn normal(crate_name: &str) -> String {
        format!("warn,{crate_name}=info")
    }

    /// Directive used when `verbose` is on.
    pub fn verbose(crate_name: &str) -> String {
        format!("info,{crate_name}=debug")
    }
}

//! Behavioral specs for testforge.toml handling.
//!
//! Tests that testforge correctly handles:
//! - Discovered config files
//! - Explicit --config and TESTFORGE_CONFIG
//! - Command-line precedence over the file
//! - Invalid config (errors)

use crate::prelude::*;

// =============================================================================
// DISCOVERY
// =============================================================================

/// > testforge.toml at the git root is picked up from a subdirectory
#[test]
fn discovered_config_is_applied() {
    let temp = Project::empty();
    temp.config("version = 1\nverbose = true\n");
    temp.file("src/placeholder.txt", "");

    testforge_cmd()
        .current_dir(temp.path().join("src"))
        .assert()
        .success()
        .stderr(predicates::str::contains("verbose: true"))
        .stderr(predicates::str::contains("testforge.toml"));
}

/// > --config selects a file outside the discovery path
#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file("alt/custom.toml", "version = 1\nverbose = true\n");

    testforge_cmd()
        .args(["--config", "alt/custom.toml"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("config file: alt/custom.toml"));
}

/// > TESTFORGE_CONFIG acts like --config
#[test]
fn config_from_environment() {
    let temp = Project::empty();
    temp.file("alt/custom.toml", "version = 1\nverbose = true\n");

    testforge_cmd()
        .env("TESTFORGE_CONFIG", "alt/custom.toml")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("verbose: true"));
}

/// > Relative log_file resolves against the config file's directory
#[test]
fn config_log_file_is_relative_to_config() {
    let temp = Project::empty();
    temp.config("version = 1\nquiet = true\nlog_file = \"logs/run.log\"\n");
    temp.file("src/placeholder.txt", "");

    testforge_cmd()
        .current_dir(temp.path().join("src"))
        .assert()
        .success();

    assert!(temp.path().join("logs/run.log").is_file());
}

// =============================================================================
// PRECEDENCE
// =============================================================================

/// > Command-line flags layer over the file
#[test]
fn cli_quiet_overrides_file_verbose() {
    let temp = Project::empty();
    temp.config("version = 1\nverbose = true\n");

    testforge_cmd()
        .arg("--quiet")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}

// =============================================================================
// VALIDATION
// =============================================================================

/// > Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    let temp = Project::empty();
    temp.config("version = 1\nunknown_key = true\n");

    testforge_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown field"));
}

/// > Only version 1 is understood
#[test]
fn unsupported_version_fails() {
    let temp = Project::empty();
    temp.config("version = 2\n");

    testforge_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("unsupported config version 2"));
}

/// > A missing explicit config file is an error
#[test]
fn missing_explicit_config_fails() {
    let temp = Project::empty();

    testforge_cmd()
        .args(["--config", "nope.toml"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to read"));
}

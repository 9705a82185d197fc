// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use testforge::cli::Cli;
use testforge::config::{self, ConfigurationBuilder};
use testforge::console::Console;
use testforge::{discovery, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    // Explicit --config (or TESTFORGE_CONFIG) wins over discovery
    let config_path = cli.config.clone().or_else(|| discovery::find_config(&cwd));
    let builder = match &config_path {
        Some(path) => ConfigurationBuilder::from_config_file(&config::file::load(path)?),
        None => ConfigurationBuilder::new(),
    };
    let configuration = builder.apply_cli(&cli).build();

    logging::init(&configuration)?;
    tracing::debug!(?configuration, "resolved configuration");

    let console = Console::new(&configuration);
    console.status("testforge: configuration ready");
    console.section("Configuration");
    match &config_path {
        Some(path) => console.detail(&format!("config file: {}", path.display())),
        None => console.detail("config file: none"),
    }
    console.detail(&format!("verbose: {}", configuration.verbose()));
    console.detail(&format!("quiet: {}", configuration.quiet()));
    match configuration.log_file() {
        Some(path) => console.detail(&format!("log file: {}", path.display())),
        None => console.detail("log file: none"),
    }

    Ok(())
}

//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;
use crate::logging;
use crate::output::OutputFormat;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // Flag wins over config, config over the default
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Create context for commands
    let ctx = commands::Context {
        output_format,
        show_secrets: cli.show_secrets || config.show_secrets,
        config_path: cli.config,
        config,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Nameserver(args) => commands::nameserver::execute(&ctx, args),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

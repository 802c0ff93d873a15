//! `ultra config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(ctx, &key, &value),
        ConfigCommands::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(config)?);
        }
        _ => {
            println!("{}", "Current Configuration:".bold());
            println!();

            let format = config
                .output_format
                .map_or_else(|| "(not set)".dimmed().to_string(), |f| f.to_string());
            println!("  {} {}", "output_format:".bold(), format);
            println!("  {} {}", "show_secrets:".bold(), config.show_secrets);
            println!("  {} {}", "require_ip:".bold(), config.validation.require_ip);
            println!("  {} {}", "require_tsig:".bold(), config.validation.require_tsig);
        }
    }

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config: Config = ctx.config.clone();

    match key {
        "output_format" | "output" => {
            config.output_format = Some(value.parse()?);
            println!("{} Output format set to {}.", "Success:".green().bold(), value.cyan());
        }
        "show_secrets" => {
            config.show_secrets = value.parse()?;
            println!("{} show_secrets set to {}.", "Success:".green().bold(), value);
        }
        "require_ip" => {
            config.validation.require_ip = value.parse()?;
            println!("{} require_ip set to {}.", "Success:".green().bold(), value);
        }
        "require_tsig" => {
            config.validation.require_tsig = value.parse()?;
            println!("{} require_tsig set to {}.", "Success:".green().bold(), value);
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 output_format - Default output format (pretty/json/csv/yaml)\n  \
                 show_secrets  - Print TSIG key values unmasked (true/false)\n  \
                 require_ip    - Validation rejects records without an IP (true/false)\n  \
                 require_tsig  - Validation rejects records without a TSIG key (true/false)",
                key
            );
        }
    }

    config.save(ctx.config_override())?;

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    println!("{}", ctx.config_file()?.display());
    Ok(())
}

//! `ultra nameserver` - build, inspect, validate and compare records.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tracing::debug;
use ultra_core::{NameServer, Validator};

use super::Context;
use crate::cli::args::{NameserverArgs, NameserverCommands};
use crate::input::{self, Records};
use crate::output::{self, OutputFormat};

pub fn execute(ctx: &Context, args: NameserverArgs) -> Result<()> {
    match args.command {
        NameserverCommands::New {
            ip,
            tsig_key,
            tsig_key_value,
            validate,
        } => new_record(ctx, NameServer::new(ip, tsig_key, tsig_key_value), validate),
        NameserverCommands::Show { file } => show(ctx, file.as_deref()),
        NameserverCommands::Validate {
            file,
            require_tsig,
            allow_missing_ip,
        } => {
            let mut validator = ctx.validator();
            if require_tsig {
                validator.require_tsig = true;
            }
            if allow_missing_ip {
                validator.require_ip = false;
            }
            validate(ctx, file.as_deref(), validator)
        }
        NameserverCommands::Compare { a, b } => compare(ctx, &a, &b),
    }
}

fn new_record(ctx: &Context, ns: NameServer, validate: bool) -> Result<()> {
    if validate {
        ctx.validator().validate(&ns)?;
    }

    let records = Records::One(ns);
    output::emit(&output::render_records(
        &records,
        ctx.output_format,
        ctx.show_secrets,
    )?);
    Ok(())
}

fn show(ctx: &Context, file: Option<&str>) -> Result<()> {
    let records = input::read_records(file)?;

    if ctx.output_format == OutputFormat::Pretty {
        println!(
            "{} {}",
            "Name Servers:".bold().underline(),
            records.as_slice().len()
        );
    }
    output::emit(&output::render_records(
        &records,
        ctx.output_format,
        ctx.show_secrets,
    )?);
    Ok(())
}

/// Outcome of validating one record.
#[derive(Debug, Serialize)]
struct Report {
    index: usize,
    valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    issues: Vec<String>,
}

fn validate(ctx: &Context, file: Option<&str>, validator: Validator) -> Result<()> {
    let records = input::read_records(file)?;
    debug!(?validator, "validating name servers");

    let reports: Vec<Report> = records
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, ns)| {
            let issues: Vec<String> = validator
                .check(ns)
                .iter()
                .map(ToString::to_string)
                .collect();
            Report {
                index: i + 1,
                valid: issues.is_empty(),
                issues,
            }
        })
        .collect();

    match ctx.output_format {
        OutputFormat::Json => output::emit(&serde_json::to_string_pretty(&reports)?),
        OutputFormat::Yaml => output::emit(&serde_yaml::to_string(&reports)?),
        OutputFormat::Csv => output::emit(&output::to_csv(
            &["index", "valid", "issues"],
            reports.iter().map(|r| {
                [r.index.to_string(), r.valid.to_string(), r.issues.join("; ")]
            }),
        )?),
        OutputFormat::Pretty => {
            for (report, ns) in reports.iter().zip(records.as_slice()) {
                let shown = output::for_display(ns, ctx.show_secrets);
                if report.valid {
                    println!("  {} #{} {}", "ok".green().bold(), report.index, shown);
                } else {
                    println!("  {} #{} {}", "invalid".red().bold(), report.index, shown);
                    for issue in &report.issues {
                        println!("      - {}", issue.yellow());
                    }
                }
            }
        }
    }

    let failed = reports.iter().filter(|r| !r.valid).count();
    if failed > 0 {
        anyhow::bail!(
            "{} of {} name server records failed validation",
            failed,
            reports.len()
        );
    }

    Ok(())
}

/// Outcome of comparing two records.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Comparison {
    equal: bool,
    fingerprint_a: String,
    fingerprint_b: String,
    differing_fields: Vec<&'static str>,
}

fn compare(ctx: &Context, a: &str, b: &str) -> Result<()> {
    if a == "-" && b == "-" {
        anyhow::bail!("only one of the compared records can be read from stdin");
    }

    let left = input::read_records(Some(a))?.into_single(a)?;
    let right = input::read_records(Some(b))?.into_single(b)?;

    let comparison = Comparison {
        equal: left == right,
        fingerprint_a: format!("{:016x}", left.fingerprint()),
        fingerprint_b: format!("{:016x}", right.fingerprint()),
        differing_fields: left.differing_fields(&right),
    };

    match ctx.output_format {
        OutputFormat::Json => output::emit(&serde_json::to_string_pretty(&comparison)?),
        OutputFormat::Yaml => output::emit(&serde_yaml::to_string(&comparison)?),
        OutputFormat::Csv => output::emit(&output::to_csv(
            &["equal", "fingerprintA", "fingerprintB", "differingFields"],
            [[
                comparison.equal.to_string(),
                comparison.fingerprint_a.clone(),
                comparison.fingerprint_b.clone(),
                comparison.differing_fields.join(";"),
            ]],
        )?),
        OutputFormat::Pretty => {
            let show = |ns: &NameServer| output::for_display(ns, ctx.show_secrets);
            println!("  {} {}  {}", "A:".bold(), show(&left), comparison.fingerprint_a.dimmed());
            println!("  {} {}  {}", "B:".bold(), show(&right), comparison.fingerprint_b.dimmed());
            println!();
            if comparison.equal {
                println!("{}", "Records are equal.".green().bold());
            } else {
                println!(
                    "{} {}",
                    "Records differ in:".red().bold(),
                    comparison.differing_fields.join(", ")
                );
            }
        }
    }

    Ok(())
}

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde_json::Value;
use tracing::{debug, info};

use topodiff_diff::{diff_networks, Counts, DiffSummary};
use topodiff_model::Networks;
use topodiff_view::{render, render_networks, ViewConfig};

use crate::cli::*;
use crate::config::load_view_config;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_view_config(&cli)?;
    config.color.apply();
    let mut out = io::stdout().lock();
    match cli.command {
        Command::Diff(args) => cmd_diff(&args, &config, &mut out),
        Command::Show(args) => cmd_show(&args, &config, &mut out),
    }
}

fn cmd_diff(args: &DiffArgs, config: &ViewConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let lhs = load_networks(&args.lhs)?;
    let rhs = load_networks(&args.rhs)?;
    let result = diff_networks(&lhs, &rhs);
    let summary = DiffSummary::of(&result);
    info!(
        lhs = %args.lhs.display(),
        rhs = %args.rhs.display(),
        unchanged = summary.is_unchanged(),
        "diff complete"
    );

    match args.format {
        OutputFormat::Text => {
            writeln!(out, "{}", render_networks(&result, config))?;
            if args.summary {
                write_summary(out, &summary)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &result.to_value())?;
            writeln!(out)?;
            if args.summary {
                // stdout carries the document only
                write_summary(&mut io::stderr().lock(), &summary)?;
            }
        }
    }
    Ok(())
}

fn cmd_show(args: &ShowArgs, config: &ViewConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let value = read_json(&args.path)?;
    writeln!(out, "{}", render(&value, config))?;
    Ok(())
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn load_networks(path: &Path) -> anyhow::Result<Networks> {
    let value = read_json(path)?;
    let networks = Networks::from_value(&value)
        .with_context(|| format!("{} is not a topology document", path.display()))?;
    debug!(path = %path.display(), networks = networks.networks.len(), "loaded topology");
    Ok(networks)
}

fn write_summary(out: &mut impl Write, summary: &DiffSummary) -> anyhow::Result<()> {
    writeln!(out, "{}", "Summary".bold())?;
    for (label, counts) in summary.rows() {
        writeln!(out, "  {:<20}{}", format!("{label}:"), colored_counts(&counts))?;
    }
    if summary.is_unchanged() {
        writeln!(out, "{} No differences.", "✓".green().bold())?;
    }
    Ok(())
}

fn colored_counts(counts: &Counts) -> String {
    format!(
        "{} kept, {} added, {} deleted, {} changed",
        counts.kept,
        counts.added.to_string().green(),
        counts.deleted.to_string().red(),
        counts.changed.to_string().yellow()
    )
}

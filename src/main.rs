use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use tally::cli::{Cli, Commands};
use tally::report::{self, Report};
use tally::{hands, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Hours { save_report } => cmd_hours(save_report.as_deref()),
        Commands::Report { path, json } => cmd_report(&path, json),
        Commands::Hands => cmd_hands(),
    }
}

fn cmd_hours(save_report: Option<&Path>) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);

    let report =
        report::aggregate(stdin, &mut out).context("Failed to aggregate hours from stdin")?;
    out.flush()?;

    if let Some(path) = save_report {
        report
            .save(path)
            .with_context(|| format!("Failed to save report to {}", path.display()))?;
        eprintln!("{} report to {}", "Saved".green(), path.display());
    }

    Ok(())
}

fn cmd_report(path: &Path, json: bool) -> Result<()> {
    let report = Report::load(path)
        .with_context(|| format!("Failed to load report from {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn cmd_hands() -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);

    hands::run(stdin, &mut out).context("Failed to classify identifiers from stdin")?;
    out.flush()?;
    Ok(())
}

fn print_report(report: &Report) {
    println!(
        "{} {}",
        "Report".bold(),
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
    );
    println!("{}", report.header.join(" | ").bold());

    for entry in &report.entries {
        println!(
            "{} | {} | {} | {} | {}",
            entry.id.cyan(),
            entry.assignee,
            entry.priority,
            format!("{}", entry.hours).yellow(),
            entry.summary
        );
    }

    println!("{} {}", "Total hours:".bold(), format!("{}", report.total).yellow());
}

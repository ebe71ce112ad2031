//! `qadesk report` command - Generate text reports
//!
//! Reports render as markdown with tables; the inspection report is a
//! plain-text first-article preview of an uploaded measurement file.

use chrono::Utc;
use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::commands::open_desk;
use crate::cli::GlobalOpts;
use crate::entities::audit::AuditResult;
use crate::import::cmm;
use crate::store::ledger::AuditLedger;

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// First article inspection preview from a CMM file
    Inspection(InspectionArgs),

    /// Per-component audit answer summary
    Audit(AuditSummaryArgs),
}

#[derive(clap::Args, Debug)]
pub struct InspectionArgs {
    /// Measurement file (.csv or .dfq)
    pub file: PathBuf,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct AuditSummaryArgs {
    /// Limit to one component
    #[arg(long, short = 'c')]
    pub component: Option<String>,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Run a report subcommand
pub fn run(cmd: ReportCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ReportCommands::Inspection(args) => run_inspection(args, global),
        ReportCommands::Audit(args) => run_audit_summary(args, global),
    }
}

fn run_inspection(args: InspectionArgs, _global: &GlobalOpts) -> Result<()> {
    let rows = cmm::parse(&args.file).map_err(|e| miette::miette!("{}", e))?;

    let mut output = String::new();
    output.push_str("# First Article Inspection Report\n\n");
    output.push_str(&format!(
        "Generated: {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));

    let mut table = Builder::default();
    table.push_record(["Characteristic", "Nominal", "Measured", "Deviation", "Status"]);
    for row in &rows {
        table.push_record([
            row.characteristic.as_str(),
            row.nominal.as_str(),
            row.measured.as_str(),
            row.deviation.as_str(),
            row.status.as_str(),
        ]);
    }
    output.push_str(&table.build().with(Style::markdown()).to_string());
    output.push_str("\n\n*Preview only - electronic signature not applied.*\n");

    write_output(&output, args.output)
}

fn run_audit_summary(args: AuditSummaryArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let ledger = AuditLedger::new(desk.audits_path());

    let rows = ledger
        .list(args.component.as_deref())
        .map_err(|e| miette::miette!("{}", e))?;

    #[derive(Default)]
    struct Tally {
        total: usize,
        yes: usize,
        no: usize,
        na: usize,
        last: Option<chrono::NaiveDate>,
    }

    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
    for row in &rows {
        let tally = tallies.entry(row.component.clone()).or_default();
        tally.total += 1;
        match row.result {
            AuditResult::Yes => tally.yes += 1,
            AuditResult::No => tally.no += 1,
            AuditResult::NotApplicable => tally.na += 1,
        }
        tally.last = Some(tally.last.map_or(row.date, |d| d.max(row.date)));
    }

    let mut output = String::new();
    output.push_str("# Audit Summary\n\n");

    if tallies.is_empty() {
        output.push_str("No audit records found.\n");
        return write_output(&output, args.output);
    }

    let mut table = Builder::default();
    table.push_record(["Component", "Answers", "Tak", "Nie", "N/D", "Last audit"]);
    for (component, tally) in &tallies {
        table.push_record([
            component.clone(),
            tally.total.to_string(),
            tally.yes.to_string(),
            tally.no.to_string(),
            tally.na.to_string(),
            tally.last.map_or_else(|| "-".to_string(), |d| d.to_string()),
        ]);
    }
    output.push_str(&table.build().with(Style::markdown()).to_string());
    output.push('\n');

    write_output(&output, args.output)
}

/// Write a report to the given file, or stdout when none is given
fn write_output(content: &str, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            writer.flush().into_diagnostic()?;
            println!(
                "{} Report written to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

//! `qadesk cmm` command - Preview a CMM inspection file

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::escape_csv;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::import::cmm;

#[derive(clap::Args, Debug)]
pub struct CmmArgs {
    /// Measurement file (.csv or .dfq)
    pub file: PathBuf,
}

pub fn run(args: CmmArgs, global: &GlobalOpts) -> Result<()> {
    let rows = cmm::parse(&args.file).map_err(|e| miette::miette!("{}", e))?;

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("Characteristic,Nominal,Measured,Deviation,Status");
            for row in &rows {
                println!(
                    "{},{},{},{},{}",
                    escape_csv(&row.characteristic),
                    escape_csv(&row.nominal),
                    escape_csv(&row.measured),
                    escape_csv(&row.deviation),
                    escape_csv(&row.status)
                );
            }
        }
        OutputFormat::Md => {
            println!("| Characteristic | Nominal | Measured | Deviation | Status |");
            println!("|---|---|---|---|---|");
            for row in &rows {
                println!(
                    "| {} | {} | {} | {} | {} |",
                    row.characteristic, row.nominal, row.measured, row.deviation, row.status
                );
            }
        }
        _ => {
            println!(
                "{:<30} {:>10} {:>10} {:>10} {:<8}",
                style("CHARACTERISTIC").bold(),
                style("NOMINAL").bold(),
                style("MEASURED").bold(),
                style("DEVIATION").bold(),
                style("STATUS").bold()
            );
            println!("{}", "-".repeat(72));
            for row in &rows {
                let status = if row.status.eq_ignore_ascii_case("ok") {
                    style(row.status.clone()).green()
                } else if row.status == "?" {
                    style(row.status.clone()).dim()
                } else {
                    style(row.status.clone()).red().bold()
                };
                println!(
                    "{:<30} {:>10} {:>10} {:>10} {:<8}",
                    row.characteristic, row.nominal, row.measured, row.deviation, status
                );
            }
            if !global.quiet {
                println!();
                println!("{} measurement(s) parsed.", style(rows.len()).cyan());
            }
        }
    }

    Ok(())
}

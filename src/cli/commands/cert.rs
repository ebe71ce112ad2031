//! `qadesk cert` command - Certificate registry
//!
//! Listing annotates each certificate with its expiry status computed
//! against today's date; the status is never written back to the store.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use serde_json::json;

use crate::cli::commands::open_desk;
use crate::cli::helpers::escape_csv;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::certificate::{CertStatus, CertType, CertificateRecord};
use crate::store::certificates::CertificateBook;

#[derive(Subcommand, Debug)]
pub enum CertCommands {
    /// Add a certificate to the registry
    Add(AddArgs),

    /// List certificates with expiry status
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Certificate holder/site name
    pub name: String,

    /// Certificate scheme (iso9001, as9100, iso14001)
    #[arg(long, short = 't')]
    pub r#type: String,

    /// Issue date, YYYY-MM-DD
    #[arg(long)]
    pub issued: String,

    /// Expiry date, YYYY-MM-DD
    #[arg(long)]
    pub expires: String,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show only certificates expiring within 30 days
    #[arg(long)]
    pub expiring: bool,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Run a certificate subcommand
pub fn run(cmd: CertCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CertCommands::Add(args) => run_add(args, global),
        CertCommands::List(args) => run_list(args, global),
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    s.parse::<NaiveDate>()
        .map_err(|e| miette::miette!("invalid date '{}': {} (use YYYY-MM-DD)", s, e))
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let book = CertificateBook::new(desk.certificates_path());

    let cert_type: CertType = args.r#type.parse().map_err(|e| miette::miette!("{}", e))?;
    let record = CertificateRecord {
        name: args.name.clone(),
        cert_type,
        issued: parse_date(&args.issued)?,
        expires: parse_date(&args.expires)?,
    };

    book.add(record).map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Added {} certificate for {}",
        style("✓").green(),
        style(cert_type.to_string()).yellow(),
        style(&args.name).yellow()
    );
    Ok(())
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let book = CertificateBook::new(desk.certificates_path());

    let today = Local::now().date_naive();
    let mut listed = book.list(today).map_err(|e| miette::miette!("{}", e))?;

    if args.expiring {
        listed.retain(|(_, status)| *status == CertStatus::Expiring);
    }

    if args.count {
        println!("{}", listed.len());
        return Ok(());
    }

    if listed.is_empty() {
        println!("No certificates found.");
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            let entries: Vec<_> = listed
                .iter()
                .map(|(record, status)| {
                    json!({
                        "name": record.name,
                        "type": record.cert_type.to_string(),
                        "issued": record.issued,
                        "expires": record.expires,
                        "status": status,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("name,type,issued,expires,status");
            for (record, status) in &listed {
                println!(
                    "{},{},{},{},{}",
                    escape_csv(&record.name),
                    escape_csv(&record.cert_type.to_string()),
                    record.issued,
                    record.expires,
                    status
                );
            }
        }
        OutputFormat::Md => {
            println!("| Name | Type | Issued | Expires | Status |");
            println!("|---|---|---|---|---|");
            for (record, status) in &listed {
                println!(
                    "| {} | {} | {} | {} | {} |",
                    record.name, record.cert_type, record.issued, record.expires, status
                );
            }
        }
        _ => {
            println!(
                "{:<25} {:<10} {:<11} {:<11} {}",
                style("NAME").bold(),
                style("TYPE").bold(),
                style("ISSUED").bold(),
                style("EXPIRES").bold(),
                style("STATUS").bold()
            );
            println!("{}", "-".repeat(68));
            for (record, status) in &listed {
                let status_cell = match status {
                    CertStatus::Ok => style("OK").green(),
                    CertStatus::Expiring => style("Expiring").yellow().bold(),
                };
                println!(
                    "{:<25} {:<10} {:<11} {:<11} {}",
                    record.name, record.cert_type, record.issued, record.expires, status_cell
                );
            }
            if !global.quiet {
                println!();
                println!("{} certificate(s) found.", style(listed.len()).cyan());
            }
        }
    }

    Ok(())
}

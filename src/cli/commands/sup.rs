//! `qadesk sup` command - Supplier evaluation log

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::open_desk;
use crate::cli::helpers::{format_short_id, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::entities::supplier::{
    DeliveryRating, DocumentationRating, QualityRating, SupplierEvaluation,
};
use crate::store::suppliers::SupplierLog;

#[derive(Subcommand, Debug)]
pub enum SupCommands {
    /// Record a supplier evaluation
    Add(AddArgs),

    /// List supplier evaluations
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Supplier name
    pub supplier: String,

    /// Part quality (high, medium, low)
    #[arg(long, short = 'q')]
    pub quality: String,

    /// Delivery performance (on-time, sometimes-late, frequently-late)
    #[arg(long, short = 'd')]
    pub delivery: String,

    /// Documentation completeness (full, gaps, non-compliant)
    #[arg(long, short = 'D')]
    pub documentation: String,

    /// Free-text comments
    #[arg(long)]
    pub comments: Option<String>,

    /// Evaluation date, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Auditor name (default: configured auditor)
    #[arg(long)]
    pub auditor: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by supplier name (exact match)
    #[arg(long, short = 's')]
    pub supplier: Option<String>,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Run a supplier subcommand
pub fn run(cmd: SupCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        SupCommands::Add(args) => run_add(args, global),
        SupCommands::List(args) => run_list(args, global),
    }
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let config = Config::load();
    let log = SupplierLog::new(desk.suppliers_path());

    let quality: QualityRating = args.quality.parse().map_err(|e| miette::miette!("{}", e))?;
    let delivery: DeliveryRating = args.delivery.parse().map_err(|e| miette::miette!("{}", e))?;
    let documentation: DocumentationRating = args
        .documentation
        .parse()
        .map_err(|e| miette::miette!("{}", e))?;
    let date = match args.date.as_deref() {
        Some(s) => s
            .parse::<NaiveDate>()
            .map_err(|e| miette::miette!("invalid date '{}': {} (use YYYY-MM-DD)", s, e))?,
        None => Local::now().date_naive(),
    };

    let evaluation = SupplierEvaluation::new(
        args.supplier.clone(),
        args.auditor.unwrap_or_else(|| config.auditor()),
        date,
        quality,
        delivery,
        documentation,
        args.comments,
    );

    log.append(std::slice::from_ref(&evaluation))
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Recorded evaluation {} for {}",
        style("✓").green(),
        style(format_short_id(&evaluation.id)).cyan(),
        style(&args.supplier).yellow()
    );
    Ok(())
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let log = SupplierLog::new(desk.suppliers_path());

    let mut rows = log
        .list(args.supplier.as_deref())
        .map_err(|e| miette::miette!("{}", e))?;

    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }

    if args.count {
        println!("{}", rows.len());
        return Ok(());
    }

    if rows.is_empty() {
        println!("No supplier evaluations found.");
        return Ok(());
    }

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in &rows {
                wtr.serialize(row).into_diagnostic()?;
            }
            wtr.flush().into_diagnostic()?;
        }
        OutputFormat::Id => {
            for row in &rows {
                println!("{}", row.id);
            }
        }
        OutputFormat::Md => {
            println!("| ID | Supplier | Date | Quality | Delivery | Documentation |");
            println!("|---|---|---|---|---|---|");
            for row in &rows {
                println!(
                    "| {} | {} | {} | {} | {} | {} |",
                    row.id, row.supplier, row.date, row.quality, row.delivery, row.documentation
                );
            }
        }
        _ => {
            println!(
                "{:<17} {:<20} {:<11} {:<8} {:<15} {:<14} {}",
                style("ID").bold(),
                style("SUPPLIER").bold(),
                style("DATE").bold(),
                style("QUALITY").bold(),
                style("DELIVERY").bold(),
                style("DOCS").bold(),
                style("COMMENTS").bold()
            );
            println!("{}", "-".repeat(110));
            for row in &rows {
                let quality = match row.quality {
                    QualityRating::High => style("High").green(),
                    QualityRating::Medium => style("Medium").yellow(),
                    QualityRating::Low => style("Low").red().bold(),
                };
                println!(
                    "{:<17} {:<20} {:<11} {:<8} {:<15} {:<14} {}",
                    style(format_short_id(&row.id)).cyan(),
                    truncate_str(&row.supplier, 18),
                    row.date,
                    quality,
                    row.delivery,
                    row.documentation,
                    truncate_str(row.comments.as_deref().unwrap_or("-"), 30)
                );
            }
            if !global.quiet {
                println!();
                println!("{} evaluation(s) found.", style(rows.len()).cyan());
            }
        }
    }

    Ok(())
}

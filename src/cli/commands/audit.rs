//! `qadesk audit` command - Audit ledger management
//!
//! `audit new` runs one sitting: every question in the active set is
//! answered once, and the ledger gains one row per question, all stamped
//! with the same component/auditor/date/user/version.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::commands::open_desk;
use crate::cli::helpers::{format_short_id, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, Session};
use crate::entities::audit::{AuditRecord, AuditResult, AuditSubmission};
use crate::store::ledger::AuditLedger;
use crate::store::registry::NameRegistry;

#[derive(Subcommand, Debug)]
pub enum AuditCommands {
    /// Record a new audit sitting (one answer per question)
    #[command(disable_version_flag = true)]
    New(NewArgs),

    /// List ledger rows with filtering
    List(ListArgs),

    /// Correct the result of a recorded answer
    Patch(PatchArgs),

    /// Export the ledger as CSV
    Export(ExportArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Component to audit (must be in the component catalog)
    #[arg(long, short = 'c')]
    pub component: String,

    /// Audit date, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Document version the audit is run against
    #[arg(long)]
    pub version: Option<String>,

    /// Auditor name (default: configured auditor)
    #[arg(long)]
    pub auditor: Option<String>,

    /// Answer every question with this result (tak/nie/nd)
    #[arg(long, short = 'a')]
    pub all: Option<String>,

    /// Shared comment attached to every answer given with --all
    #[arg(long)]
    pub comment: Option<String>,

    /// Walk through the questions interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by component name (exact match)
    #[arg(long, short = 'c')]
    pub component: Option<String>,

    /// Filter by result (tak/nie/nd)
    #[arg(long, short = 'r')]
    pub result: Option<String>,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct PatchArgs {
    /// New result (tak/nie/nd)
    pub result: String,

    /// Record ID of the row to correct (AUD-...)
    #[arg(long)]
    pub id: Option<String>,

    /// Zero-based row position (legacy admin path; prefer --id)
    #[arg(long)]
    pub row: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Filter by component name
    #[arg(long, short = 'c')]
    pub component: Option<String>,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Run an audit subcommand
pub fn run(cmd: AuditCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        AuditCommands::New(args) => run_new(args, global),
        AuditCommands::List(args) => run_list(args, global),
        AuditCommands::Patch(args) => run_patch(args, global),
        AuditCommands::Export(args) => run_export(args, global),
    }
}

fn parse_date(s: Option<&str>) -> Result<NaiveDate> {
    match s {
        Some(s) => s
            .parse::<NaiveDate>()
            .map_err(|e| miette::miette!("invalid date '{}': {} (use YYYY-MM-DD)", s, e)),
        None => Ok(Local::now().date_naive()),
    }
}

fn parse_result(s: &str) -> Result<AuditResult> {
    s.parse::<AuditResult>().map_err(|e| miette::miette!("{}", e))
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let config = Config::load();

    // Submissions stamp the user field from the explicit session
    let session = Session::require(&desk).map_err(|e| miette::miette!("{}", e))?;

    let components =
        NameRegistry::open(desk.components_path()).map_err(|e| miette::miette!("{}", e))?;
    if !components.contains(&args.component) {
        return Err(miette::miette!(
            "'{}' is not in the component catalog. Add it with 'qadesk component add'.",
            args.component
        ));
    }

    let questions =
        NameRegistry::open(desk.questions_path()).map_err(|e| miette::miette!("{}", e))?;
    if questions.names().is_empty() {
        return Err(miette::miette!(
            "the question set is empty. Add questions with 'qadesk question add'."
        ));
    }

    let answers = if args.interactive {
        collect_interactive(questions.names())?
    } else {
        let result = match &args.all {
            Some(r) => parse_result(r)?,
            None => {
                return Err(miette::miette!(
                    "provide --all <result> or run with --interactive"
                ))
            }
        };
        questions
            .names()
            .iter()
            .map(|q| (q.clone(), result, args.comment.clone()))
            .collect()
    };

    let submission = AuditSubmission {
        component: args.component.clone(),
        auditor: args.auditor.unwrap_or_else(|| config.auditor()),
        date: parse_date(args.date.as_deref())?,
        user: session.email.clone(),
        version: args.version,
    };
    let records = submission.into_records(answers);

    let ledger = AuditLedger::new(desk.audits_path());
    ledger.append(&records).map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Recorded {} answer(s) for {}",
        style("✓").green(),
        style(records.len()).cyan(),
        style(&args.component).yellow()
    );

    Ok(())
}

fn collect_interactive(
    questions: &[String],
) -> Result<Vec<(String, AuditResult, Option<String>)>> {
    let theme = ColorfulTheme::default();
    let choices = ["Tak", "Nie", "N/D"];
    let mut answers = Vec::with_capacity(questions.len());

    for (i, question) in questions.iter().enumerate() {
        println!();
        println!(
            "{} {}",
            style(format!("[{}/{}]", i + 1, questions.len())).dim(),
            style(question).bold()
        );

        let idx = Select::with_theme(&theme)
            .items(&choices)
            .default(0)
            .interact()
            .into_diagnostic()?;
        let result = match idx {
            0 => AuditResult::Yes,
            1 => AuditResult::No,
            _ => AuditResult::NotApplicable,
        };

        let comment: String = Input::with_theme(&theme)
            .with_prompt("Comment (optional)")
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()?;
        let comment = if comment.trim().is_empty() {
            None
        } else {
            Some(comment)
        };

        answers.push((question.clone(), result, comment));
    }

    Ok(answers)
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let ledger = AuditLedger::new(desk.audits_path());

    let mut rows = ledger
        .list(args.component.as_deref())
        .map_err(|e| miette::miette!("{}", e))?;

    if let Some(ref result) = args.result {
        let wanted = parse_result(result)?;
        rows.retain(|r| r.result == wanted);
    }

    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }

    if args.count {
        println!("{}", rows.len());
        return Ok(());
    }

    if rows.is_empty() {
        println!("No audit records found.");
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
            write_csv(&rows, &mut std::io::stdout())?;
        }
        OutputFormat::Id => {
            for row in &rows {
                println!("{}", row.id);
            }
        }
        OutputFormat::Md => {
            println!("| ID | Date | Component | Question | Result | Auditor |");
            println!("|---|---|---|---|---|---|");
            for row in &rows {
                println!(
                    "| {} | {} | {} | {} | {} | {} |",
                    row.id,
                    row.date,
                    row.component,
                    row.question.replace('|', "\\|"),
                    row.result,
                    row.auditor
                );
            }
        }
        _ => {
            println!(
                "{:<17} {:<11} {:<20} {:<42} {:<5} {}",
                style("ID").bold(),
                style("DATE").bold(),
                style("COMPONENT").bold(),
                style("QUESTION").bold(),
                style("RES").bold(),
                style("AUDITOR").bold()
            );
            println!("{}", "-".repeat(105));
            for row in &rows {
                let result = match row.result {
                    AuditResult::Yes => style("Tak").green(),
                    AuditResult::No => style("Nie").red().bold(),
                    AuditResult::NotApplicable => style("N/D").dim(),
                };
                println!(
                    "{:<17} {:<11} {:<20} {:<42} {:<5} {}",
                    style(format_short_id(&row.id)).cyan(),
                    row.date,
                    truncate_str(&row.component, 18),
                    truncate_str(&row.question, 40),
                    result,
                    row.auditor
                );
            }
            println!();
            println!(
                "{} audit record(s) found. Correct one with {}.",
                style(rows.len()).cyan(),
                style("qadesk audit patch <result> --id <ID>").cyan()
            );
        }
    }

    Ok(())
}

fn run_patch(args: PatchArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let ledger = AuditLedger::new(desk.audits_path());
    let result = parse_result(&args.result)?;

    let patched = match (&args.id, args.row) {
        (Some(id), None) => ledger
            .patch_result_by_id(id, result)
            .map_err(|e| miette::miette!("{}", e))?,
        (None, Some(row)) => ledger
            .patch_result(row, result)
            .map_err(|e| miette::miette!("{}", e))?,
        _ => return Err(miette::miette!("provide exactly one of --id or --row")),
    };

    println!(
        "{} {} now reads {} for {}",
        style("✓").green(),
        style(patched.id.to_string()).cyan(),
        style(patched.result.to_string()).yellow(),
        truncate_str(&patched.question, 50)
    );

    Ok(())
}

fn run_export(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let ledger = AuditLedger::new(desk.audits_path());

    let rows = ledger
        .list(args.component.as_deref())
        .map_err(|e| miette::miette!("{}", e))?;

    match args.output {
        Some(path) => {
            let file = std::fs::File::create(&path).into_diagnostic()?;
            write_csv(&rows, file)?;
            println!(
                "{} Exported {} row(s) to {}",
                style("✓").green(),
                style(rows.len()).cyan(),
                style(path.display()).cyan()
            );
        }
        None => {
            write_csv(&rows, &mut std::io::stdout())?;
        }
    }

    Ok(())
}

fn write_csv<W: std::io::Write>(rows: &[AuditRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row).into_diagnostic()?;
    }
    wtr.flush().into_diagnostic()?;
    Ok(())
}

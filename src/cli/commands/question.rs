//! `qadesk question` command - Audit question set management
//!
//! The question set drives `audit new`: every sitting answers each
//! question in catalog order. Editing the set only affects future
//! sittings.

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::open_desk;
use crate::cli::helpers::escape_csv;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::store::registry::NameRegistry;

#[derive(Subcommand, Debug)]
pub enum QuestionCommands {
    /// List questions in the order they are asked
    List(ListArgs),

    /// Add a question to the set
    Add(AddArgs),

    /// Reword a question in place
    Rename(RenameArgs),

    /// Remove a question from the set
    Rm(RmArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Question text
    pub text: String,
}

#[derive(clap::Args, Debug)]
pub struct RenameArgs {
    /// Current question text
    pub old: String,

    /// New question text
    pub new: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Question text to remove
    pub text: String,
}

/// Run a question subcommand
pub fn run(cmd: QuestionCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        QuestionCommands::List(args) => run_list(args, global),
        QuestionCommands::Add(args) => run_add(args, global),
        QuestionCommands::Rename(args) => run_rename(args, global),
        QuestionCommands::Rm(args) => run_rm(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let registry =
        NameRegistry::open(desk.questions_path()).map_err(|e| miette::miette!("{}", e))?;
    let questions = registry.names();

    if args.count {
        println!("{}", questions.len());
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(questions).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("question");
            for q in questions {
                println!("{}", escape_csv(q));
            }
        }
        OutputFormat::Md => {
            println!("| # | Question |");
            println!("|---|---|");
            for (i, q) in questions.iter().enumerate() {
                println!("| {} | {} |", i + 1, q.replace('|', "\\|"));
            }
        }
        _ => {
            if questions.is_empty() {
                println!("The question set is empty. Add one with 'qadesk question add'.");
                return Ok(());
            }
            for (i, q) in questions.iter().enumerate() {
                println!("{:>3}. {}", style(i + 1).dim(), q);
            }
            if !global.quiet {
                println!();
                println!("{} question(s) in the set.", style(questions.len()).cyan());
            }
        }
    }

    Ok(())
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let mut registry =
        NameRegistry::open(desk.questions_path()).map_err(|e| miette::miette!("{}", e))?;

    registry.add(&args.text).map_err(|e| miette::miette!("{}", e))?;

    println!("{} Added question", style("✓").green());
    Ok(())
}

fn run_rename(args: RenameArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let mut registry =
        NameRegistry::open(desk.questions_path()).map_err(|e| miette::miette!("{}", e))?;

    registry
        .rename(&args.old, &args.new)
        .map_err(|e| miette::miette!("{}", e))?;

    println!("{} Reworded question", style("✓").green());
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let mut registry =
        NameRegistry::open(desk.questions_path()).map_err(|e| miette::miette!("{}", e))?;

    registry
        .remove(&args.text)
        .map_err(|e| miette::miette!("{}", e))?;

    println!("{} Removed question", style("✓").green());
    Ok(())
}

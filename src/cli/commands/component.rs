//! `qadesk component` command - Component catalog management
//!
//! The catalog is the ordered list of auditable component names that
//! populates the audit form. Removing a name never touches historical
//! ledger rows that reference it.

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::open_desk;
use crate::cli::helpers::escape_csv;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::store::registry::NameRegistry;

#[derive(Subcommand, Debug)]
pub enum ComponentCommands {
    /// List components in catalog order
    List(ListArgs),

    /// Add a component to the catalog
    Add(AddArgs),

    /// Rename a component in place
    Rename(RenameArgs),

    /// Remove a component from the catalog
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
    /// Component name
    pub name: String,
}

#[derive(clap::Args, Debug)]
pub struct RenameArgs {
    /// Current name
    pub old: String,

    /// New name
    pub new: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Component name to remove
    pub name: String,
}

/// Run a component subcommand
pub fn run(cmd: ComponentCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ComponentCommands::List(args) => run_list(args, global),
        ComponentCommands::Add(args) => run_add(args, global),
        ComponentCommands::Rename(args) => run_rename(args, global),
        ComponentCommands::Rm(args) => run_rm(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let registry =
        NameRegistry::open(desk.components_path()).map_err(|e| miette::miette!("{}", e))?;
    let names = registry.names();

    if args.count {
        println!("{}", names.len());
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(names).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("name");
            for name in names {
                println!("{}", escape_csv(name));
            }
        }
        OutputFormat::Md => {
            println!("| Component |");
            println!("|---|");
            for name in names {
                println!("| {} |", name.replace('|', "\\|"));
            }
        }
        _ => {
            if names.is_empty() {
                println!("No components in the catalog.");
                return Ok(());
            }
            for name in names {
                println!("{}", name);
            }
            if !global.quiet {
                println!();
                println!("{} component(s) in the catalog.", style(names.len()).cyan());
            }
        }
    }

    Ok(())
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let mut registry =
        NameRegistry::open(desk.components_path()).map_err(|e| miette::miette!("{}", e))?;

    registry.add(&args.name).map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Added component {}",
        style("✓").green(),
        style(args.name.trim()).yellow()
    );
    Ok(())
}

fn run_rename(args: RenameArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let mut registry =
        NameRegistry::open(desk.components_path()).map_err(|e| miette::miette!("{}", e))?;

    registry
        .rename(&args.old, &args.new)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Renamed {} to {}",
        style("✓").green(),
        style(&args.old).dim(),
        style(args.new.trim()).yellow()
    );
    if !global.quiet {
        println!("   Historical audit records keep the old name.");
    }
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;
    let mut registry =
        NameRegistry::open(desk.components_path()).map_err(|e| miette::miette!("{}", e))?;

    registry
        .remove(&args.name)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Removed component {}",
        style("✓").green(),
        style(&args.name).yellow()
    );
    if !global.quiet {
        println!("   Historical audit records keep the name.");
    }
    Ok(())
}

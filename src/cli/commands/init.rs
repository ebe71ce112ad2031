//! `qadesk init` command - Create a new desk

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::core::desk::{Desk, DeskError};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    pub path: Option<PathBuf>,

    /// Re-initialize even if a desk already exists
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(|| PathBuf::from("."));

    let result = if args.force {
        Desk::init_force(&path)
    } else {
        Desk::init(&path)
    };

    let desk = match result {
        Ok(desk) => desk,
        Err(DeskError::AlreadyExists(root)) => {
            println!(
                "{} QADesk already exists at {}. Use --force to re-initialize.",
                style("!").yellow(),
                style(root.display()).cyan()
            );
            return Ok(());
        }
        Err(e) => return Err(miette::miette!("{}", e)),
    };

    println!(
        "{} Initialized QADesk in {}",
        style("✓").green(),
        style(desk.root().display()).cyan()
    );
    println!("   {}", style(desk.qadesk_dir().join("config.yaml").display()).dim());
    println!("   {} (seeded with the default ISO 9001 question set)", style(desk.questions_path().display()).dim());
    println!("   {} (demo allow-list - edit before real use)", style(desk.users_path().display()).dim());
    println!();
    println!("Next: {} then {}",
        style("qadesk login -e demo@example.com").cyan(),
        style("qadesk component add <name>").cyan()
    );

    Ok(())
}

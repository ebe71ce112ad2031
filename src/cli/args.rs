//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    audit::AuditCommands,
    cert::CertCommands,
    cmm::CmmArgs,
    completions::CompletionsArgs,
    component::ComponentCommands,
    emission::EmissionCommands,
    init::InitArgs,
    login::LoginArgs,
    question::QuestionCommands,
    report::ReportCommands,
    sup::SupCommands,
};

#[derive(Parser)]
#[command(name = "qadesk")]
#[command(author, version, about = "QADesk audit desk")]
#[command(long_about = "A Unix-style ISO 9001 audit desk: component catalogs, audit ledgers, supplier evaluations and emission accounting kept as plain text files.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Desk root (default: auto-detect by finding .qadesk/)
    #[arg(long, global = true)]
    pub desk: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new desk
    Init(InitArgs),

    /// Log in against the users.json allow-list
    Login(LoginArgs),

    /// End the active session
    Logout,

    /// Show the active session
    Whoami,

    /// Component catalog management
    #[command(subcommand)]
    Component(ComponentCommands),

    /// Audit question set management
    #[command(subcommand)]
    Question(QuestionCommands),

    /// Audit ledger: record sittings, list and correct answers
    #[command(subcommand)]
    Audit(AuditCommands),

    /// Certificate registry with expiry tracking
    #[command(subcommand)]
    Cert(CertCommands),

    /// Supplier evaluation log
    #[command(subcommand)]
    Sup(SupCommands),

    /// CO2e emission accounting
    #[command(subcommand)]
    Emission(EmissionCommands),

    /// Preview a CMM inspection file (.csv or .dfq)
    Cmm(CmmArgs),

    /// Generate text reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (tsv for lists)
    #[default]
    Auto,
    /// JSON format (for programming)
    Json,
    /// Tab-separated values (for piping)
    Tsv,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}

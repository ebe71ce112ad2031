//! `qadesk login` / `logout` / `whoami` - session management
//!
//! Login checks credentials against the users.json allow-list by plaintext
//! equality (a demo-grade scheme, see store::users) and persists an
//! explicit session at .qadesk/session.yaml. Commands that stamp a `user`
//! field require that session.

use console::style;
use dialoguer::{theme::ColorfulTheme, Password};
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::open_desk;
use crate::cli::GlobalOpts;
use crate::core::Session;
use crate::store::users::UserDirectory;

#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    /// Email to log in as
    #[arg(long, short = 'e')]
    pub email: String,

    /// Password (prompted when omitted)
    #[arg(long, short = 'p')]
    pub password: Option<String>,
}

pub fn run_login(args: LoginArgs, global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;

    let password = match args.password {
        Some(p) => p,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()
            .into_diagnostic()?,
    };

    let directory = UserDirectory::open(&desk.users_path()).map_err(|e| miette::miette!("{}", e))?;
    let user = directory
        .authenticate(&args.email, &password)
        .map_err(|e| miette::miette!("{}", e))?;

    let session = Session::start(&user.email, &user.name);
    session.save(&desk).map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Logged in as {} <{}>",
        style("✓").green(),
        style(&user.name).yellow(),
        user.email
    );

    Ok(())
}

pub fn run_logout(global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;

    match Session::load(&desk).map_err(|e| miette::miette!("{}", e))? {
        Some(session) => {
            Session::clear(&desk).map_err(|e| miette::miette!("{}", e))?;
            println!(
                "{} Logged out {} <{}>",
                style("✓").green(),
                style(&session.name).yellow(),
                session.email
            );
        }
        None => println!("Not logged in."),
    }

    Ok(())
}

pub fn run_whoami(global: &GlobalOpts) -> Result<()> {
    let desk = open_desk(global)?;

    match Session::load(&desk).map_err(|e| miette::miette!("{}", e))? {
        Some(session) => {
            println!(
                "{} <{}> since {}",
                style(&session.name).yellow(),
                session.email,
                session.started.format("%Y-%m-%d %H:%M UTC")
            );
        }
        None => println!("Not logged in."),
    }

    Ok(())
}

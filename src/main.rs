use clap::Parser;
use miette::Result;
use qadesk::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    // This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .wrap_lines(false)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Init(args) => qadesk::cli::commands::init::run(args),
        Commands::Login(args) => qadesk::cli::commands::login::run_login(args, &global),
        Commands::Logout => qadesk::cli::commands::login::run_logout(&global),
        Commands::Whoami => qadesk::cli::commands::login::run_whoami(&global),
        Commands::Component(cmd) => qadesk::cli::commands::component::run(cmd, &global),
        Commands::Question(cmd) => qadesk::cli::commands::question::run(cmd, &global),
        Commands::Audit(cmd) => qadesk::cli::commands::audit::run(cmd, &global),
        Commands::Cert(cmd) => qadesk::cli::commands::cert::run(cmd, &global),
        Commands::Sup(cmd) => qadesk::cli::commands::sup::run(cmd, &global),
        Commands::Emission(cmd) => qadesk::cli::commands::emission::run(cmd, &global),
        Commands::Cmm(args) => qadesk::cli::commands::cmm::run(args, &global),
        Commands::Report(cmd) => qadesk::cli::commands::report::run(cmd, &global),
        Commands::Completions(args) => qadesk::cli::commands::completions::run(args),
    }
}

//! CLI entry point - the composition root.
//!
//! Parses arguments, installs logging, wires the SDK client via bootstrap
//! and dispatches to handlers. Handler failures become process exit codes.

use clap::{CommandFactory, Parser};

use argus_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Err(err) = run(&cli, command).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }

    Ok(())
}

async fn run(cli: &Cli, command: &Commands) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::User(args) => {
            let config = CliConfig::from_cli(cli)?;
            let ctx = bootstrap(&config)?;
            handlers::user::execute(&ctx, args, &mut stdout).await
        }
        Commands::Example { kind } => handlers::example::execute(*kind, &mut stdout),
    }
}

//! CLI entry point - the composition root.
//!
//! Wiring happens in `bootstrap`; this file parses arguments, sets up
//! logging and dispatches to handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pokedex_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_logging(verbose: bool) {
    // RUST_LOG wins; otherwise -v decides
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "info" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config).await?;

    match command {
        Commands::List { search } => handlers::list::execute(&ctx, search.as_deref())?,
        Commands::Show { id } => handlers::show::execute(&ctx, *id).await?,
        Commands::Count => handlers::count::execute(&ctx)?,
        Commands::Shell => handlers::shell::execute(&ctx).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env before parsing so clap's env fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}

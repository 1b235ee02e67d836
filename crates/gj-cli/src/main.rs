use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gj_cli::commands::{edit, edits, journal, log};
use gj_cli::{Cli, Commands, Config};

fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Some(Commands::Log { repo, limit, json }) => {
            let config = load_config(&cli)?;
            log::run(repo, *limit, *json, &config)?;
        }
        Some(Commands::Journal { repo, limit, json }) => {
            let config = load_config(&cli)?;
            journal::run(repo, *limit, *json, &config)?;
        }
        Some(Commands::Edit {
            commit,
            message,
            minutes,
        }) => {
            let config = load_config(&cli)?;
            edit::run(&config, commit, message.clone(), *minutes)?;
        }
        Some(Commands::Unedit { commit }) => {
            let config = load_config(&cli)?;
            edit::run_unedit(&config, commit)?;
        }
        Some(Commands::Edits { json }) => {
            let config = load_config(&cli)?;
            edits::run(&config, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}

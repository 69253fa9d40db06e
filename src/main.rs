mod cli;
mod client;
mod commands;
mod config;
mod error;
mod output;
mod router;
mod store;
mod types;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::Level;

use cli::{Cli, Commands, ProjectCommands};
use client::ApiClient;
use config::Config;
use error::Result;
use router::Router;
use store::ProjectStore;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli).await {
        for line in error_report(&e, verbose) {
            eprintln!("{line}");
        }
        std::process::exit(1);
    }
}

/// The error line, followed by its source chain when verbose.
fn error_report(error: &dyn Error, verbose: bool) -> Vec<String> {
    let mut lines = vec![format!("Error: {error}")];

    if verbose {
        let mut source = error.source();
        while let Some(cause) = source {
            lines.push(format!("Caused by: {cause}"));
            source = cause.source();
        }
    }

    lines
}

async fn run(cli: Cli) -> Result<()> {
    // Logs go to stderr so table/JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require the backend
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "project-builder", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        Commands::Route { path } => {
            let config = Config::load()?;
            let router = Router::new(&config.base_url());
            commands::route::run(&router, &path);
        }
        // Commands that require config and store
        command => {
            let config = Config::load()?;
            let store = ProjectStore::new(ApiClient::new(config.api_url()?));
            let mut router = Router::new(&config.base_url());

            match command {
                Commands::Open { path } => {
                    commands::open::run(&store, &mut router, path).await?;
                }
                Commands::Projects => {
                    commands::projects::list(&store).await?;
                }
                Commands::Project { action } => match action {
                    ProjectCommands::List => {
                        commands::projects::list(&store).await?;
                    }
                    ProjectCommands::Add(args) => {
                        commands::projects::add(&store, args).await?;
                    }
                },
                Commands::Completions { .. } | Commands::Init | Commands::Route { .. } => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}

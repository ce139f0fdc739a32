//! QA Edit CLI - edit question & answer posts from the terminal
//!
//! Runs the same load / populate / submit flow as the edit page against a
//! live backend, using a headless form.

mod cli;
mod commands;
mod error;


use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::completions::run_completions;
use crate::commands::edit::run_edit;
use crate::commands::show::run_show;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("qa_edit=info".parse().unwrap())
                .add_directive("qa_core=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = cli.base_url.as_deref();

    match cli.command {
        Commands::Show {
            target,
            json,
            save_preview,
        } => run_show(&target, json, save_preview.as_deref(), base_url).await?,
        Commands::Edit(args) => run_edit(&args, base_url).await?,
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref())?,
    }

    Ok(())
}

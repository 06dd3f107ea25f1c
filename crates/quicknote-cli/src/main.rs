//! quicknote CLI - a command-line front end for the quicknote note store
//!
//! Every invocation loads the store, performs one action, and exits.

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::common::AppContext;
use crate::commands::config::run_config;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::commands::theme::run_theme;
use crate::error::CliError;

/// Default log level for quicknote crates, overridable through `RUST_LOG`.
pub(crate) const LOG_DIRECTIVE: &str = "quicknote=info";

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let ctx = AppContext::resolve(cli.data_dir, cli.config)?;
    tracing::debug!("Using data directory {}", ctx.data_dir.display());

    match cli.command {
        Some(Commands::Add { content }) => run_add(&content, &ctx)?,
        Some(Commands::List { json }) => run_list(json, &ctx)?,
        Some(Commands::Edit { id, text }) => run_edit(&id, &text, &ctx)?,
        Some(Commands::Delete { id, yes }) => run_delete(&id, yes, &ctx)?,
        Some(Commands::Theme { mode }) => run_theme(mode.map(Into::into), &ctx)?,
        Some(Commands::Config { command }) => run_config(command, &ctx)?,
        None => {
            // Quick capture mode: quicknote "my note"
            if cli.note.is_empty() {
                Cli::command().print_help().map_err(CliError::Io)?;
                println!();
            } else {
                run_add(&cli.note, &ctx)?;
            }
        }
    }

    Ok(())
}

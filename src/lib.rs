//! Done library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Settings;
use errors::AppResult;
use store::Store;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, store: &Store) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, store),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, store),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, store),
        Commands::Done { .. } => cli::commands::toggle::handle(&cli.command, store),
        Commands::Priority { .. } => cli::commands::priority::handle(&cli.command, store),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, store),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, store),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, store),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, store),
        Commands::Export { .. } => cli::commands::export::handle(cli, store),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, store),
        Commands::Backup { .. } => cli::commands::backup::handle(cli, store),
        Commands::Wipe { .. } => cli::commands::wipe::handle(cli, store),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, store),
        Commands::Store { .. } => cli::commands::store::handle(&cli.command, store),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // resolve the store directory once: CLI override wins over the default
    let dir = match &cli.store {
        Some(custom) => utils::path::expand_tilde(custom),
        None => Settings::store_dir(),
    };

    let store = Store::new(dir);

    dispatch(&cli, &store)
}

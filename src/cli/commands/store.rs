use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::store::{Store, info};
use crate::ui::messages;

/// Inspect the store files.
pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Store { info: show_info, check } = cmd {
        if *show_info {
            info::print_store_info(store)?;
        }

        if *check {
            if !info::check_store(store)? {
                return Err(AppError::Store("store check failed".into()));
            }
        }

        if !show_info && !check {
            messages::info("Use 'done store --info' or 'done store --check'.");
        }
    }
    Ok(())
}

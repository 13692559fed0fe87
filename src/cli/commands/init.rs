use crate::cli::parser::Cli;
use crate::errors::AppResult;
use crate::store::{Store, log::dlog};
use crate::ui::messages::success;

/// Initialize the store directory and both records.
pub fn handle(_cli: &Cli, store: &Store) -> AppResult<()> {
    store.init()?;

    success(format!("Tasks record:    {:?}", store.tasks_file()));
    success(format!("Settings record: {:?}", store.settings_file()));

    let _ = dlog(store, "init", &store.dir().display().to_string(), "Store initialized");

    Ok(())
}

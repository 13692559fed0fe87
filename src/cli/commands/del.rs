use crate::cli::parser::Commands;
use crate::core::tasks;
use crate::errors::AppResult;
use crate::store::{Store, log::dlog};
use crate::ui::messages::success;

/// Delete a task by id.
pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut all = store.load_tasks()?;
        let removed = tasks::delete_task(&mut all, *id)?;
        store.save_tasks(&all)?;

        let _ = dlog(
            store,
            "del",
            &id.to_string(),
            &format!("Removed '{}'", removed.text),
        );
        success(format!("Task removed: {}", removed.text));
    }
    Ok(())
}

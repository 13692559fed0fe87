use crate::cli::parser::Commands;
use crate::core::tasks;
use crate::errors::AppResult;
use crate::store::{Store, log::dlog};
use crate::ui::messages::success;

/// Toggle a task's completion state.
pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Done { id } = cmd {
        let mut all = store.load_tasks()?;
        let now_completed = tasks::toggle_task(&mut all, *id)?;
        store.save_tasks(&all)?;

        let msg = if now_completed {
            "Task completed"
        } else {
            "Task reopened"
        };
        let _ = dlog(store, "toggle", &id.to_string(), msg);
        success(format!("{msg} ({id})"));
    }
    Ok(())
}

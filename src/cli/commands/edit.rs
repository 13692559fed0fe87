use crate::cli::parser::{Commands, parse_label};
use crate::core::tasks;
use crate::errors::AppResult;
use crate::store::{Store, log::dlog};
use crate::ui::messages::success;

/// Edit a task's text, label, or mood.
pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Edit {
        id,
        text,
        label,
        no_label,
        mood,
        no_mood,
    } = cmd
    {
        // outer None = leave alone, inner None = clear
        let label_change = if *no_label {
            Some(None)
        } else {
            match label {
                Some(code) => Some(Some(parse_label(code)?)),
                None => None,
            }
        };

        let mood_change = if *no_mood {
            Some(None)
        } else {
            mood.clone().map(Some)
        };

        let mut all = store.load_tasks()?;
        tasks::edit_task(&mut all, *id, text.as_deref(), label_change, mood_change)?;
        store.save_tasks(&all)?;

        let _ = dlog(store, "edit", &id.to_string(), "Task updated");
        success(format!("Task {} updated", id));
    }
    Ok(())
}

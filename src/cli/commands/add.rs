use crate::cli::parser::{Commands, parse_label, parse_priority};
use crate::core::tasks;
use crate::errors::AppResult;
use crate::models::priority::Priority;
use crate::store::{Store, log::dlog};
use crate::ui::messages::success;

/// Add a task.
pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Add {
        text,
        priority,
        label,
        mood,
    } = cmd
    {
        //
        // 1. Parse priority (default = normal)
        //
        let priority_final = match priority {
            Some(code) => parse_priority(code)?,
            None => Priority::Normal,
        };

        //
        // 2. Parse label (optional)
        //
        let label_final = match label {
            Some(code) => Some(parse_label(code)?),
            None => None,
        };

        //
        // 3. Apply. Empty or whitespace-only text is silently ignored.
        //
        let mut all = store.load_tasks()?;

        match tasks::add_task(&mut all, text, priority_final, label_final, mood.clone()) {
            Some(id) => {
                store.save_tasks(&all)?;
                let _ = dlog(store, "add", &id.to_string(), &format!("Added '{}'", text.trim()));
                success(format!("Task added ({})", id));
            }
            None => {
                // no-op by contract
            }
        }
    }

    Ok(())
}

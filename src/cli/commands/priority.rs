use crate::cli::parser::{Commands, parse_priority};
use crate::core::tasks;
use crate::errors::AppResult;
use crate::store::{Store, log::dlog};
use crate::ui::messages::success;
use crate::utils::colors::RESET;
use crate::utils::formatting::describe_priority;

/// Cycle or set a task's priority.
pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Priority { id, set } = cmd {
        let mut all = store.load_tasks()?;

        let new_priority = match set {
            Some(code) => {
                let p = parse_priority(code)?;
                tasks::set_priority(&mut all, *id, p)?;
                p
            }
            None => tasks::cycle_priority(&mut all, *id)?,
        };

        store.save_tasks(&all)?;

        let _ = dlog(
            store,
            "priority",
            &id.to_string(),
            &format!("Priority set to {}", new_priority.as_str()),
        );

        let (name, color) = describe_priority(new_priority);
        success(format!("Priority for {id} is now {color}{name}{RESET}"));
    }
    Ok(())
}

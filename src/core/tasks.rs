//! Reducer-style task mutations. Each function takes the in-memory task
//! array, applies one change, and leaves persistence to the caller.

use crate::errors::{AppError, AppResult};
use crate::models::{label::Label, priority::Priority, task::Task};
use crate::utils::date;

/// Next task id: the creation timestamp in milliseconds, bumped past the
/// current maximum so ids stay unique and strictly increasing even when
/// tasks are added faster than the clock ticks.
pub fn next_id(tasks: &[Task]) -> i64 {
    let max_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
    date::now_ms().max(max_id + 1)
}

/// Add a task at the front of the stored array (stored order is
/// newest-first). Empty or whitespace-only text is silently ignored and
/// yields None.
pub fn add_task(
    tasks: &mut Vec<Task>,
    text: &str,
    priority: Priority,
    label: Option<Label>,
    mood: Option<String>,
) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let id = next_id(tasks);
    let mut task = Task::new(id, text);
    task.priority = priority;
    task.label = label;
    task.mood = mood;

    tasks.insert(0, task);
    Some(id)
}

fn find_mut(tasks: &mut [Task], id: i64) -> AppResult<&mut Task> {
    tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(AppError::TaskNotFound(id))
}

/// Toggle completion. Completing stamps `completed_at`; un-completing
/// clears it.
pub fn toggle_task(tasks: &mut [Task], id: i64) -> AppResult<bool> {
    let task = find_mut(tasks, id)?;

    task.completed = !task.completed;
    task.completed_at = if task.completed {
        Some(date::now_ms())
    } else {
        None
    };

    Ok(task.completed)
}

/// Advance the task's priority one step along the fixed cycle.
pub fn cycle_priority(tasks: &mut [Task], id: i64) -> AppResult<Priority> {
    let task = find_mut(tasks, id)?;
    task.priority = task.priority.cycled();
    Ok(task.priority)
}

pub fn set_priority(tasks: &mut [Task], id: i64, priority: Priority) -> AppResult<()> {
    let task = find_mut(tasks, id)?;
    task.priority = priority;
    Ok(())
}

/// Field updates for an existing task. `label`/`mood` use a double Option:
/// outer None leaves the field alone, inner None clears it.
pub fn edit_task(
    tasks: &mut [Task],
    id: i64,
    text: Option<&str>,
    label: Option<Option<Label>>,
    mood: Option<Option<String>>,
) -> AppResult<()> {
    let task = find_mut(tasks, id)?;

    if let Some(new_text) = text {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Err(AppError::EmptyText);
        }
        task.text = new_text.to_string();
    }

    if let Some(new_label) = label {
        task.label = new_label;
    }

    if let Some(new_mood) = mood {
        task.mood = new_mood;
    }

    Ok(())
}

/// Remove exactly the task with the given id; every other task keeps all
/// of its field values.
pub fn delete_task(tasks: &mut Vec<Task>, id: i64) -> AppResult<Task> {
    let index = tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or(AppError::TaskNotFound(id))?;
    Ok(tasks.remove(index))
}

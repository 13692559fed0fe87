use crate::models::task::Task;
use std::cmp::Ordering;

/// Display-order comparator: incomplete before completed, then descending
/// priority weight, then descending id (newest first).
pub fn display_cmp(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| b.priority.weight().cmp(&a.priority.weight()))
        .then_with(|| b.id.cmp(&a.id))
}

/// Return the tasks in display order. The stored array is left untouched;
/// ordering is a view concern.
pub fn display_order(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(display_cmp);
    sorted
}

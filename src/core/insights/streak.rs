use crate::models::task::Task;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Consecutive calendar days with at least one completed task, counting
/// back from `today` and stopping at the first gap. Distinct local dates
/// are deduplicated before counting.
pub fn streak(tasks: &[Task], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = tasks
        .iter()
        .filter(|t| t.completed)
        .filter_map(|t| t.completed_date())
        .collect();

    let mut count = 0;
    let mut day = today;

    while days.contains(&day) {
        count += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }

    count
}

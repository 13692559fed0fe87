use crate::models::task::Task;
use chrono::{Datelike, NaiveDate};

/// Seven buckets covering the trailing week, one per calendar day, with
/// today as the rightmost bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyChart {
    /// Completion counts, oldest day first.
    pub counts: [u32; 7],
    /// Short weekday names matching `counts`.
    pub labels: [&'static str; 7],
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Bucket completions of the trailing 7 days (today inclusive) by day.
pub fn weekly_chart(tasks: &[Task], today: NaiveDate) -> WeeklyChart {
    let window_start = today - chrono::Duration::days(6);

    let mut counts = [0u32; 7];
    for task in tasks.iter().filter(|t| t.completed) {
        if let Some(day) = task.completed_date() {
            if day >= window_start && day <= today {
                let offset = (day - window_start).num_days() as usize;
                counts[offset] += 1;
            }
        }
    }

    let mut labels = [""; 7];
    for (i, label) in labels.iter_mut().enumerate() {
        let day = window_start + chrono::Duration::days(i as i64);
        *label = WEEKDAYS[day.weekday().num_days_from_monday() as usize];
    }

    WeeklyChart { counts, labels }
}

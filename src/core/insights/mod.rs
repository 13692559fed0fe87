pub mod streak;
pub mod weekly;

use crate::models::{label::Label, task::Task};
use chrono::NaiveDate;
use weekly::WeeklyChart;

/// Aggregate statistics for the insights panel.
#[derive(Debug, Clone)]
pub struct Insights {
    pub total: usize,
    pub completed: usize,
    /// round(100 × completed / total); 0 for an empty task set.
    pub completion_rate: u32,
    pub high_priority: usize,
    pub label_counts: Vec<(Label, usize)>,
    pub streak: u32,
    pub weekly: WeeklyChart,
}

impl Insights {
    pub fn build(tasks: &[Task], today: NaiveDate) -> Insights {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();

        let label_counts = Label::ALL
            .iter()
            .map(|label| {
                let n = tasks.iter().filter(|t| t.label == Some(*label)).count();
                (*label, n)
            })
            .collect();

        Insights {
            total,
            completed,
            completion_rate: completion_rate(completed, total),
            high_priority: tasks.iter().filter(|t| t.priority.is_high()).count(),
            label_counts,
            streak: streak::streak(tasks, today),
            weekly: weekly::weekly_chart(tasks, today),
        }
    }
}

/// Percentage of completed tasks, rounded to the nearest integer.
/// Defined as 0 when there are no tasks.
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u32
}

//! Library-level tests for the pure core: ordering, cycling, streaks,
//! aggregates, and the settings merge.

use chrono::{Duration, NaiveDate, TimeZone};
use done::config::{Settings, Theme};
use done::core::insights::{Insights, completion_rate, streak::streak, weekly::weekly_chart};
use done::core::sort::display_order;
use done::core::tasks::next_id;
use done::models::priority::Priority;
use done::models::task::Task;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Millisecond timestamp at local noon of the given date, so local-date
/// round-trips are timezone-proof.
fn noon_ms(date: NaiveDate) -> i64 {
    chrono::Local
        .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
        .single()
        .unwrap()
        .timestamp_millis()
}

fn completed_on(id: i64, date: NaiveDate) -> Task {
    let mut t = Task::new(id, format!("task {id}"));
    t.completed = true;
    t.completed_at = Some(noon_ms(date));
    t
}

#[test]
fn completed_tasks_sort_after_incomplete_regardless_of_priority() {
    let mut high_done = Task::new(10, "urgent but finished");
    high_done.priority = Priority::High;
    high_done.completed = true;

    let normal_open = Task::new(5, "mundane but open");

    let ordered = display_order(&[high_done, normal_open]);
    assert!(!ordered[0].completed);
    assert!(ordered[1].completed);
}

#[test]
fn priority_weight_orders_within_completion_group() {
    let mut a = Task::new(1, "normal");
    a.priority = Priority::Normal;
    let mut b = Task::new(2, "high");
    b.priority = Priority::High;
    let mut c = Task::new(3, "medium");
    c.priority = Priority::Medium;

    let ordered = display_order(&[a, b, c]);
    let priorities: Vec<Priority> = ordered.iter().map(|t| t.priority).collect();
    assert_eq!(
        priorities,
        vec![Priority::High, Priority::Medium, Priority::Normal]
    );
}

#[test]
fn equal_priority_breaks_ties_by_newest_id_first() {
    let older = Task::new(100, "older");
    let newer = Task::new(200, "newer");

    let ordered = display_order(&[older, newer]);
    assert_eq!(ordered[0].id, 200);
    assert_eq!(ordered[1].id, 100);
}

#[test]
fn priority_cycle_returns_to_origin_after_three_steps() {
    for start in [Priority::Normal, Priority::Medium, Priority::High] {
        assert_eq!(start.cycled().cycled().cycled(), start);
    }
    assert_eq!(Priority::Normal.cycled(), Priority::Medium);
    assert_eq!(Priority::Medium.cycled(), Priority::High);
    assert_eq!(Priority::High.cycled(), Priority::Normal);
}

#[test]
fn completion_rate_rounds_and_handles_empty() {
    assert_eq!(completion_rate(0, 0), 0);
    assert_eq!(completion_rate(2, 3), 67);
    assert_eq!(completion_rate(1, 3), 33);
    assert_eq!(completion_rate(3, 3), 100);
}

#[test]
fn streak_counts_consecutive_days_back_from_today() {
    let today = day(2026, 8, 7);

    let tasks = vec![
        completed_on(1, today),
        completed_on(2, today - Duration::days(1)),
        // gap at two days ago
        completed_on(3, today - Duration::days(3)),
    ];

    assert_eq!(streak(&tasks, today), 2);
}

#[test]
fn streak_is_zero_without_a_completion_today() {
    let today = day(2026, 8, 7);

    assert_eq!(streak(&[], today), 0);

    let tasks = vec![completed_on(1, today - Duration::days(1))];
    assert_eq!(streak(&tasks, today), 0);
}

#[test]
fn streak_deduplicates_same_day_completions() {
    let today = day(2026, 8, 7);

    let tasks = vec![
        completed_on(1, today),
        completed_on(2, today),
        completed_on(3, today),
    ];

    assert_eq!(streak(&tasks, today), 1);
}

#[test]
fn weekly_chart_buckets_trailing_week_today_rightmost() {
    let today = day(2026, 8, 7);

    let tasks = vec![
        completed_on(1, today),
        completed_on(2, today),
        completed_on(3, today - Duration::days(3)),
        // outside the trailing window
        completed_on(4, today - Duration::days(8)),
    ];

    let chart = weekly_chart(&tasks, today);
    assert_eq!(chart.counts[6], 2);
    assert_eq!(chart.counts[3], 1);
    assert_eq!(chart.counts.iter().sum::<u32>(), 3);

    // 2026-08-07 is a Friday
    assert_eq!(chart.labels[6], "Fri");
    assert_eq!(chart.labels[0], "Sat");
}

#[test]
fn insights_aggregate_counts_labels_and_high_priority() {
    let today = day(2026, 8, 7);

    let mut a = Task::new(1, "a");
    a.priority = Priority::High;
    a.label = Some(done::models::label::Label::Work);
    let mut b = Task::new(2, "b");
    b.label = Some(done::models::label::Label::Work);
    let c = completed_on(3, today);

    let insights = Insights::build(&[a, b, c], today);
    assert_eq!(insights.total, 3);
    assert_eq!(insights.completed, 1);
    assert_eq!(insights.completion_rate, 33);
    assert_eq!(insights.high_priority, 1);

    let work = insights
        .label_counts
        .iter()
        .find(|(l, _)| *l == done::models::label::Label::Work)
        .unwrap();
    assert_eq!(work.1, 2);
}

#[test]
fn unknown_priority_strings_default_to_normal_weight() {
    let json = r#"{"id": 1, "text": "a", "priority": "urgent", "completed": false}"#;
    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.priority, Priority::Normal);

    let json = r#"{"id": 2, "text": "b", "completed": false}"#;
    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.priority, Priority::Normal);
}

#[test]
fn settings_overlay_merges_shallowly() {
    let current = Settings {
        theme: Theme::Light,
        ..Default::default()
    };

    let overlay = serde_json::json!({ "haptics": false });
    let merged = current.apply_overlay(&overlay).unwrap();

    assert!(!merged.haptics);
    // keys absent from the overlay keep their previous values
    assert_eq!(merged.theme, Theme::Light);
    assert!(merged.auto_sort);
}

#[test]
fn settings_overlay_rejects_ill_typed_values() {
    let current = Settings::default();
    let overlay = serde_json::json!({ "haptics": "loud" });
    assert!(current.apply_overlay(&overlay).is_err());

    let overlay = serde_json::json!(42);
    assert!(current.apply_overlay(&overlay).is_err());
}

#[test]
fn next_id_stays_above_existing_ids() {
    // a store whose newest id is far in the future must not collide
    let future = Task::new(i64::MAX - 10, "from the future");
    let id = next_id(&[future]);
    assert_eq!(id, i64::MAX - 9);

    assert!(next_id(&[]) > 0);
}

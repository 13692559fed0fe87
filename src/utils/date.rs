use chrono::{Local, NaiveDate, TimeZone};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current wall-clock time in milliseconds since the epoch.
pub fn now_ms() -> i64 {
    Local::now().timestamp_millis()
}

/// Local calendar date of a millisecond timestamp.
pub fn local_date_of_ms(ms: i64) -> Option<NaiveDate> {
    Local.timestamp_millis_opt(ms).single().map(|dt| dt.date_naive())
}

/// Format a millisecond timestamp as a local "YYYY-MM-DD HH:MM" string.
pub fn fmt_ms(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => "--".to_string(),
    }
}

use super::{label::Label, priority::Priority};
use crate::utils::date::local_date_of_ms;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A single to-do item.
///
/// The id is the millisecond timestamp at creation and doubles as the
/// newest-first sort tiebreak, so ids must stay unique and monotonically
/// increasing within a store (see `core::tasks::next_id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub text: String,
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

/// Unknown or missing priority strings weigh 0, so they map to Normal
/// instead of rejecting the whole record.
fn lenient_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(Priority::from_str_lossy).unwrap_or_default())
}

impl Task {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            priority: Priority::Normal,
            completed: false,
            created_at: Some(id),
            completed_at: None,
            label: None,
            mood: None,
        }
    }

    /// Creation timestamp in milliseconds (the id, unless an explicit
    /// created_at was imported).
    pub fn created_ms(&self) -> i64 {
        self.created_at.unwrap_or(self.id)
    }

    /// Local calendar date of creation.
    pub fn created_date(&self) -> Option<NaiveDate> {
        local_date_of_ms(self.created_ms())
    }

    /// Local calendar date of completion, if completed.
    pub fn completed_date(&self) -> Option<NaiveDate> {
        self.completed_at.and_then(local_date_of_ms)
    }

    pub fn created_date_str(&self) -> String {
        match self.created_date() {
            Some(d) => d.to_string(),
            None => "--".to_string(),
        }
    }

    pub fn completed_date_str(&self) -> String {
        match self.completed_date() {
            Some(d) => d.to_string(),
            None => String::new(),
        }
    }
}

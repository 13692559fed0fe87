use crate::config::Settings;
use crate::models::task::Task;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// The round-trip payload: `{version, exportedAt, tasks, settings}`.
/// Import accepts the same shape with every field optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Archive {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(
        rename = "exportedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub exported_at: Option<String>,
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
    /// Kept as a raw JSON object so import can shallow-merge partial
    /// settings instead of requiring the full record.
    #[serde(default)]
    pub settings: Option<serde_json::Value>,
}

impl Archive {
    /// Snapshot the current store content for export.
    pub fn snapshot(tasks: &[Task], settings: &Settings) -> serde_json::Result<Archive> {
        Ok(Archive {
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
            exported_at: Some(Local::now().to_rfc3339()),
            tasks: Some(tasks.to_vec()),
            settings: Some(serde_json::to_value(settings)?),
        })
    }
}

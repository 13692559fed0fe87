use serde::{Deserialize, Serialize};

/// Task priority. Three states, ordered by weight for display sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Medium,
    High,
}

impl Priority {
    /// Ordinal weight used by the display sort (normal=0, medium=1, high=2).
    pub fn weight(&self) -> u8 {
        match self {
            Priority::Normal => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }

    /// Advance one step along the fixed cycle normal → medium → high → normal.
    pub fn cycled(&self) -> Self {
        match self {
            Priority::Normal => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Convert stored string → enum. Unknown values weigh 0, so they map
    /// to Normal rather than failing the whole record.
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Normal,
        }
    }

    /// Helper: parse input code from CLI ("n"/"m"/"h" or full names).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "n" | "normal" => Some(Priority::Normal),
            "m" | "medium" => Some(Priority::Medium),
            "h" | "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, Priority::High)
    }
}

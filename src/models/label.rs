use serde::{Deserialize, Serialize};

/// Optional task label. One-letter codes on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Work,     // w
    Personal, // p
    Health,   // h
    Ideas,    // i
}

impl Label {
    pub const ALL: [Label; 4] = [Label::Work, Label::Personal, Label::Health, Label::Ideas];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Work => "work",
            Label::Personal => "personal",
            Label::Health => "health",
            Label::Ideas => "ideas",
        }
    }

    /// Helper: convert input code from CLI (one-letter or full name).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "w" | "work" => Some(Label::Work),
            "p" | "personal" => Some(Label::Personal),
            "h" | "health" => Some(Label::Health),
            "i" | "ideas" => Some(Label::Ideas),
            _ => None,
        }
    }
}

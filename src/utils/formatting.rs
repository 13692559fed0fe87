//! Formatting utilities used for CLI and export outputs.

use crate::models::{label::Label, priority::Priority};

/// Status glyph used in listings and the plain-text export.
pub fn status_glyph(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Textual description and ANSI color for a priority.
pub fn describe_priority(priority: Priority) -> (String, &'static str) {
    match priority {
        Priority::High => ("High".into(), "\x1b[31m"),
        Priority::Medium => ("Medium".into(), "\x1b[33m"),
        Priority::Normal => ("Normal".into(), "\x1b[0m"),
    }
}

/// Textual description and ANSI color for a label.
pub fn describe_label(label: Label) -> (String, &'static str) {
    match label {
        Label::Work => ("Work".into(), "\x1b[34m"),
        Label::Personal => ("Personal".into(), "\x1b[36m"),
        Label::Health => ("Health".into(), "\x1b[32m"),
        Label::Ideas => ("Ideas".into(), "\x1b[35m"),
    }
}

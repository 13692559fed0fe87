//! ANSI color helpers for terminal output.

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::priority::Priority;

/// Priority color:
/// high → red, medium → yellow, normal → reset.
pub fn color_for_priority(priority: Priority) -> &'static str {
    match priority {
        Priority::High => RED,
        Priority::Medium => YELLOW,
        Priority::Normal => RESET,
    }
}

/// Completed tasks render dimmed.
pub fn colorize_status(value: &str, completed: bool) -> String {
    if completed {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

use crate::export::ExportFormat;
use crate::models::priority::Priority;
use crate::models::view::View;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Done
/// CLI application to manage a minimalist to-do list
#[derive(Parser)]
#[command(
    name = "done",
    version = env!("CARGO_PKG_VERSION"),
    about = "A minimalist to-do CLI: capture tasks, cycle priorities, and track completion insights",
    long_about = None
)]
pub struct Cli {
    /// Override the store directory (useful for tests or portable setups)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (non-interactive: overwrite prompts auto-confirm)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store directory and records
    Init,

    /// Add a task
    Add {
        /// Task text (empty or whitespace-only input is ignored)
        text: String,

        /// Priority: n=normal, m=medium, h=high
        #[arg(long = "priority", short = 'p', value_name = "PRIORITY")]
        priority: Option<String>,

        /// Label: w=work, p=personal, h=health, i=ideas
        #[arg(long = "label", short = 'l', value_name = "LABEL")]
        label: Option<String>,

        /// Free-form mood note attached to the task
        #[arg(long = "mood", value_name = "MOOD")]
        mood: Option<String>,
    },

    /// List tasks in display order
    List {
        /// Show only incomplete tasks
        #[arg(long = "pending")]
        pending: bool,

        /// Show only completed tasks
        #[arg(long = "completed")]
        completed: bool,

        /// Dense single-line rendering
        #[arg(long = "compact")]
        compact: bool,
    },

    /// Toggle a task's completion state
    Done {
        /// Task id
        id: i64,
    },

    /// Cycle a task's priority (normal → medium → high → normal)
    Priority {
        /// Task id
        id: i64,

        /// Set the priority directly instead of cycling
        #[arg(long = "set", value_name = "PRIORITY")]
        set: Option<String>,
    },

    /// Edit a task's text, label, or mood
    Edit {
        /// Task id
        id: i64,

        /// New task text
        #[arg(long = "text", value_name = "TEXT")]
        text: Option<String>,

        /// New label: w=work, p=personal, h=health, i=ideas
        #[arg(long = "label", value_name = "LABEL", conflicts_with = "no_label")]
        label: Option<String>,

        /// Remove the label
        #[arg(long = "no-label")]
        no_label: bool,

        /// New mood note
        #[arg(long = "mood", value_name = "MOOD", conflicts_with = "no_mood")]
        mood: Option<String>,

        /// Remove the mood note
        #[arg(long = "no-mood")]
        no_mood: bool,
    },

    /// Delete a task by id
    Del {
        /// Task id
        id: i64,
    },

    /// Render one of the three panels
    Show {
        /// Panel to render
        #[arg(value_enum, default_value = "tasks")]
        view: View,
    },

    /// Manage the settings record (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current settings")]
        print_config: bool,

        /// Set a settings key, e.g. --set theme=light --set haptics=off
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        #[arg(
            long = "edit",
            help = "Edit the settings file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Export tasks and settings
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by creation year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import an archive file (replaces tasks, merges settings)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Create a backup copy of the store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Wipe everything: delete all tasks and reset settings
    Wipe {
        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Print the activity log
    Log {
        #[arg(long = "print", help = "Print the activity log")]
        print: bool,
    },

    /// Inspect the store files
    Store {
        #[arg(long = "info", help = "Show store file information")]
        info: bool,

        #[arg(long = "check", help = "Validate that both records parse")]
        check: bool,
    },
}

/// Parse the priority CLI code shared by `add` and `priority --set`.
pub fn parse_priority(code: &str) -> crate::errors::AppResult<Priority> {
    Priority::from_code(code)
        .ok_or_else(|| crate::errors::AppError::InvalidPriority(code.to_string()))
}

/// Parse the Label CLI code shared by `add` and `edit`.
pub fn parse_label(code: &str) -> crate::errors::AppResult<crate::models::label::Label> {
    crate::models::label::Label::from_code(code)
        .ok_or_else(|| crate::errors::AppError::InvalidLabel(code.to_string()))
}

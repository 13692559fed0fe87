use crate::errors::{AppError, AppResult};
use crate::export::archive::Archive;
use crate::store::{Store, log::dlog};
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

/// What an import actually changed.
#[derive(Debug, Clone, Copy)]
pub struct ImportOutcome {
    pub tasks_replaced: Option<usize>,
    pub settings_merged: bool,
}

/// High-level business logic for the `import` command.
pub struct ImportLogic;

impl ImportLogic {
    /// Import an archive file.
    ///
    /// - A `tasks` field replaces the stored task array wholesale.
    /// - A `settings` field shallow-merges into the current settings
    ///   (imported keys win, absent keys keep their previous values).
    /// - Malformed input fails before anything is written, leaving the
    ///   store unchanged.
    pub fn apply(store: &Store, path: &Path) -> AppResult<ImportOutcome> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Import(format!("cannot read {}: {e}", path.display())))?;

        let archive: Archive = serde_json::from_str(&content)
            .map_err(|e| AppError::Import(format!("invalid archive: {e}")))?;

        // Resolve everything up front so a bad payload cannot leave the
        // store half-updated.
        let current = store.load_settings()?;
        let merged = match &archive.settings {
            Some(overlay) => Some(current.apply_overlay(overlay)?),
            None => None,
        };

        if let Some(tasks) = &archive.tasks {
            store.save_tasks(tasks)?;
        }
        if let Some(settings) = &merged {
            store.save_settings(settings)?;
        }

        let outcome = ImportOutcome {
            tasks_replaced: archive.tasks.as_ref().map(|t| t.len()),
            settings_merged: merged.is_some(),
        };

        let _ = dlog(
            store,
            "import",
            &path.display().to_string(),
            &match outcome.tasks_replaced {
                Some(n) => format!("Imported {n} tasks"),
                None => "Imported settings only".to_string(),
            },
        );

        match outcome.tasks_replaced {
            Some(n) => success(format!("Imported {} tasks from {}", n, path.display())),
            None => success(format!("Imported settings from {}", path.display())),
        }

        Ok(outcome)
    }
}

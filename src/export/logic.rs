use crate::core::sort::display_order;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::archive::Archive;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::TaskExport;
use crate::export::range::parse_range;
use crate::export::{json_csv, pdf, text, xlsx};
use crate::models::task::Task;
use crate::store::Store;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export dispatcher.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the store content.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or a creation-date filter:
    ///   `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or `start:end` spans thereof
    ///
    /// The json format writes the round-trip archive (tasks + settings);
    /// the table formats write the tasks in display order.
    pub fn export(
        store: &Store,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let tasks = filter_by_creation(store.load_tasks()?, date_bounds);

        if let ExportFormat::Json = format {
            let settings = store.load_settings()?;
            let archive = Archive::snapshot(&tasks, &settings)
                .map_err(|e| AppError::Export(e.to_string()))?;
            return json_csv::export_json(&archive, path);
        }

        if tasks.is_empty() {
            warning("No tasks found for selected range.");
            return Ok(());
        }

        let rows: Vec<TaskExport> = display_order(&tasks)
            .iter()
            .map(TaskExport::from_task)
            .collect();

        match format {
            ExportFormat::Json => unreachable!("handled above"),
            ExportFormat::Txt => text::export_txt(&rows, path, &build_title(range))?,
            ExportFormat::Csv => json_csv::export_csv(&rows, path)?,
            ExportFormat::Xlsx => xlsx::export_xlsx(&rows, path)?,
            ExportFormat::Pdf => pdf::export_pdf(&rows, path, &build_title(range))?,
        }

        Ok(())
    }
}

fn filter_by_creation(tasks: Vec<Task>, bounds: Option<(NaiveDate, NaiveDate)>) -> Vec<Task> {
    match bounds {
        None => tasks,
        Some((start, end)) => tasks
            .into_iter()
            .filter(|t| {
                t.created_date()
                    .map(|d| d >= start && d <= end)
                    .unwrap_or(false)
            })
            .collect(),
    }
}

/// Title for the human-readable exports, derived from the period filter.
fn build_title(period: &Option<String>) -> String {
    match period {
        None => "Saved tasks".to_string(),
        Some(p) if p.eq_ignore_ascii_case("all") => "Saved tasks".to_string(),
        Some(p) if p.contains(':') => {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                format!("Saved tasks from {} to {}", parts[0].trim(), parts[1].trim())
            } else {
                "Saved tasks".to_string()
            }
        }
        Some(p) => format!("Saved tasks for {}", p.trim()),
    }
}

//! File-backed store: two JSON-serialized records under well-known names
//! inside the store directory, mirroring the original pair of storage keys.

pub mod info;
pub mod log;

use crate::config::Settings;
use crate::errors::{AppError, AppResult};
use crate::models::task::Task;
use std::fs;
use std::path::{Path, PathBuf};

pub const TASKS_FILE: &str = "done_tasks.json";
pub const SETTINGS_FILE: &str = "done_settings.json";
pub const LOG_FILE: &str = "done_log.jsonl";

pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.dir.join(TASKS_FILE)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    pub fn log_file(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }

    /// Create the store directory and both records. Existing records are
    /// left untouched, so init is idempotent.
    pub fn init(&self) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;

        if !self.tasks_file().exists() {
            self.save_tasks(&[])?;
        }
        if !self.settings_file().exists() {
            self.save_settings(&Settings::default())?;
        }

        Ok(())
    }

    /// Load the task array. A missing file is an empty store; a file that
    /// fails to parse is reported without being touched.
    pub fn load_tasks(&self) -> AppResult<Vec<Task>> {
        let path = self.tasks_file();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Malformed(TASKS_FILE.to_string(), e.to_string()))
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(self.tasks_file(), json)?;
        Ok(())
    }

    /// Load the settings record, defaulted then overlaid by whatever was
    /// persisted (missing keys keep their defaults via serde).
    pub fn load_settings(&self) -> AppResult<Settings> {
        let path = self.settings_file();
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Malformed(SETTINGS_FILE.to_string(), e.to_string()))
    }

    pub fn save_settings(&self, settings: &Settings) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(self.settings_file(), json)?;
        Ok(())
    }

    /// Reset both records: empty task array, default settings.
    pub fn wipe(&self) -> AppResult<()> {
        self.save_tasks(&[])?;
        self.save_settings(&Settings::default())
    }
}

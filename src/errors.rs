//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Store(String),

    #[error("Malformed record in {0}: {1}")]
    Malformed(String, String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid priority code: {0}")]
    InvalidPriority(String),

    #[error("Invalid label code: {0}")]
    InvalidLabel(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No task found with id {0}")]
    TaskNotFound(i64),

    #[error("Task text must not be empty")]
    EmptyText,

    // ---------------------------
    // Settings errors
    // ---------------------------
    #[error("Settings error: {0}")]
    Config(String),

    // ---------------------------
    // Import/export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Import error: {0}")]
    Import(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Store(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

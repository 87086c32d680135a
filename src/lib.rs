//! Stint - a task list that tracks how long each task took.
//!
//! This library provides the core functionality for the `stn` CLI tool:
//! the task store, its filter projection, and JSON persistence.

pub mod action_log;
pub mod cli;
pub mod commands;
pub mod duration;
pub mod id;
pub mod models;
pub mod storage;
pub mod store;

/// Library-level error type for Stint operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Task cannot be empty")]
    EmptyText,

    #[error("Cannot edit a completed task: {0} (toggle it active first)")]
    EditCompleted(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Stint operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Data models for Stint entities.
//!
//! This module defines the core data structures:
//! - `Task` - A to-do item with completion-time tracking
//! - `Filter` - Which subset of tasks a view shows
//!
//! Tasks serialize with camelCase field names and integer-millisecond
//! timestamps. That shape is the persisted format, so it must stay stable
//! across releases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Which subset of tasks a view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether a task belongs to this filter's subset.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

/// Parse a filter string into Filter.
pub fn parse_filter(s: &str) -> Result<Filter> {
    match s.to_lowercase().as_str() {
        "all" => Ok(Filter::All),
        "active" => Ok(Filter::Active),
        "completed" | "done" => Ok(Filter::Completed),
        _ => Err(Error::Other(format!("Invalid filter: {}", s))),
    }
}

/// A to-do item tracked by Stint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier (e.g., "st-1756000000000-a1b2c3d")
    pub id: String,

    /// Task text, trimmed of surrounding whitespace
    pub text: String,

    /// Whether the task is completed
    pub completed: bool,

    /// When the current active stretch started.
    /// Reset to "now" whenever the task goes back to active.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub creation_time: DateTime<Utc>,

    /// When the task was completed; cleared while active
    #[serde(with = "chrono::serde::ts_milliseconds_option", default)]
    pub completion_time: Option<DateTime<Utc>>,

    /// Milliseconds from creation to completion; cleared while active
    #[serde(default)]
    pub duration_ms: Option<i64>,
}

impl Task {
    /// Create a new active task with the given ID and text.
    pub fn new(id: String, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            creation_time: Utc::now(),
            completion_time: None,
            duration_ms: None,
        }
    }
}

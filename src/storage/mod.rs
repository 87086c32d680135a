//! Storage layer for Stint data.
//!
//! All tasks live in a single JSON document, `tasks.json`, under the
//! Stint data directory. Saves rewrite the whole document through a
//! temp file in the same directory, so a crash never leaves behind a
//! half-written slot. Loads are forgiving: a missing or unreadable file,
//! or contents that do not parse as an array of task records, all load
//! as an empty collection.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::models::Task;
use crate::{Error, Result};

const TASKS_FILE: &str = "tasks.json";
const ACTION_LOG_FILE: &str = "action.log";

/// Storage manager for the task collection.
pub struct Storage {
    /// Root directory for Stint data
    pub root: PathBuf,
}

impl Storage {
    /// Open storage rooted at the resolved data directory, creating the
    /// directory if needed.
    pub fn open(data_dir: Option<&Path>) -> Result<Self> {
        let root = resolve_data_dir(data_dir)?;
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Path of the task document.
    pub fn tasks_path(&self) -> PathBuf {
        self.root.join(TASKS_FILE)
    }

    /// Path of the action log.
    pub fn log_path(&self) -> PathBuf {
        self.root.join(ACTION_LOG_FILE)
    }

    /// Load the full task collection.
    ///
    /// Never fails: anything that cannot be read and parsed as an array
    /// of task records comes back as an empty collection. Records that
    /// do parse pass through verbatim, with no further validation.
    pub fn load(&self) -> Vec<Task> {
        let Ok(bytes) = fs::read(self.tasks_path()) else {
            return Vec::new();
        };
        serde_json::from_slice(&bytes).unwrap_or_default()
    }

    /// Save the full task collection, replacing the previous contents
    /// entirely.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;

        // Write-then-rename keeps the slot whole under interruption
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(self.tasks_path()).map_err(|e| Error::Io(e.error))?;

        Ok(())
    }
}

/// Resolve the Stint data directory.
///
/// An explicit path (the `--data-dir` flag, also fed by STINT_DATA_DIR)
/// wins; otherwise tasks live under `<platform data dir>/stint/`.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    let data_dir = dirs::data_dir()
        .ok_or_else(|| Error::Other("Could not determine data directory".to_string()))?;
    Ok(data_dir.join("stint"))
}

//! Command implementations for the Stint CLI.
//!
//! Each command loads the task collection, applies one store operation,
//! persists on success, and returns a result struct that renders as
//! JSON (the default) or human-readable text.
//!
//! Persistence after a successful mutation is fire-and-forget: a failed
//! write warns on stderr and the command result stands.

use serde::Serialize;

use crate::Result;
use crate::action_log::{self, ActionLog};
use crate::duration::format_duration_opt;
use crate::models::{Filter, Task};
use crate::storage::Storage;
use crate::store::{EditOutcome, TaskStore};

/// Command results that can be serialized to JSON or formatted for
/// humans.
pub trait Output: Serialize {
    /// Serialize to JSON string.
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// One display line for a task: checkbox, ID, text, and the elapsed
/// duration for completed tasks.
fn task_line(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    let mut line = format!("[{}] {}  {}", mark, task.id, task.text);
    if task.completed {
        let elapsed = format_duration_opt(task.duration_ms);
        if !elapsed.is_empty() {
            line.push_str(&format!(" ({})", elapsed));
        }
    }
    line
}

fn save_or_warn(storage: &Storage, store: &TaskStore) {
    if let Err(e) = storage.save(store.tasks()) {
        eprintln!("Warning: Failed to save tasks: {}", e);
    }
}

// === add ===

#[derive(Debug, Serialize)]
pub struct AddResult {
    pub task: Task,
}

impl Output for AddResult {
    fn to_human(&self) -> String {
        format!("Task added successfully!\n{}", task_line(&self.task))
    }
}

/// Add a new task.
pub fn add(storage: &Storage, text: &str) -> Result<AddResult> {
    let mut store = TaskStore::from_tasks(storage.load());
    let task = store.add(text)?;
    save_or_warn(storage, &store);
    Ok(AddResult { task })
}

// === list ===

#[derive(Debug, Serialize)]
pub struct ListResult {
    pub filter: Filter,
    pub tasks: Vec<Task>,
    pub active: usize,
    pub completed: usize,
}

impl Output for ListResult {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "{} active, {} completed",
            self.active, self.completed
        )];
        if self.tasks.is_empty() {
            lines.push("No tasks to show.".to_string());
        } else {
            lines.extend(self.tasks.iter().map(task_line));
        }
        lines.join("\n")
    }
}

/// List tasks matching the filter, in insertion order, with counts over
/// the whole collection.
pub fn list(storage: &Storage, filter: Filter) -> Result<ListResult> {
    let store = TaskStore::from_tasks(storage.load());
    let tasks = store.filtered(filter).into_iter().cloned().collect();

    Ok(ListResult {
        filter,
        tasks,
        active: store.count_active(),
        completed: store.count_completed(),
    })
}

// === toggle ===

#[derive(Debug, Serialize)]
pub struct ToggleResult {
    pub task: Task,
}

impl Output for ToggleResult {
    fn to_human(&self) -> String {
        let message = if self.task.completed {
            "Task completed!"
        } else {
            "Task marked active!"
        };
        format!("{}\n{}", message, task_line(&self.task))
    }
}

/// Toggle a task between active and completed.
pub fn toggle(storage: &Storage, id: &str) -> Result<ToggleResult> {
    let mut store = TaskStore::from_tasks(storage.load());
    let task = store.toggle(id)?;
    save_or_warn(storage, &store);
    Ok(ToggleResult { task })
}

// === edit ===

#[derive(Debug, Serialize)]
pub struct EditResult {
    pub task: Task,
    pub changed: bool,
}

impl Output for EditResult {
    fn to_human(&self) -> String {
        let message = if self.changed {
            "Task updated successfully!"
        } else {
            "Task unchanged."
        };
        format!("{}\n{}", message, task_line(&self.task))
    }
}

/// Replace the text of an active task. An edit that matches the current
/// text is reported as unchanged, not as an error.
pub fn edit(storage: &Storage, id: &str, text: &str) -> Result<EditResult> {
    let mut store = TaskStore::from_tasks(storage.load());
    match store.edit_text(id, text)? {
        EditOutcome::Updated(task) => {
            save_or_warn(storage, &store);
            Ok(EditResult {
                task,
                changed: true,
            })
        }
        EditOutcome::Unchanged(task) => Ok(EditResult {
            task,
            changed: false,
        }),
    }
}

// === rm ===

#[derive(Debug, Serialize)]
pub struct RemoveResult {
    pub id: String,
    pub removed: bool,
}

impl Output for RemoveResult {
    fn to_human(&self) -> String {
        if self.removed {
            "Task deleted successfully!".to_string()
        } else {
            format!("No task with ID {}.", self.id)
        }
    }
}

/// Delete a task. Deleting an absent ID reports `removed: false` rather
/// than failing.
pub fn remove(storage: &Storage, id: &str) -> Result<RemoveResult> {
    let mut store = TaskStore::from_tasks(storage.load());
    let removed = store.remove(id);
    if removed {
        save_or_warn(storage, &store);
    }
    Ok(RemoveResult {
        id: id.to_string(),
        removed,
    })
}

// === clear ===

#[derive(Debug, Serialize)]
pub struct ClearResult {
    pub removed: usize,
}

impl Output for ClearResult {
    fn to_human(&self) -> String {
        if self.removed == 0 {
            "No completed tasks to clear.".to_string()
        } else {
            format!("Completed tasks cleared! ({} removed)", self.removed)
        }
    }
}

/// Remove all completed tasks. When nothing is completed this skips the
/// persistence write entirely.
pub fn clear(storage: &Storage) -> Result<ClearResult> {
    let mut store = TaskStore::from_tasks(storage.load());
    let removed = store.clear_completed();
    if removed > 0 {
        save_or_warn(storage, &store);
    }
    Ok(ClearResult { removed })
}

// === stats ===

#[derive(Debug, Serialize)]
pub struct StatsResult {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl Output for StatsResult {
    fn to_human(&self) -> String {
        format!(
            "{} tasks: {} active, {} completed",
            self.total, self.active, self.completed
        )
    }
}

/// Report task counts.
pub fn stats(storage: &Storage) -> Result<StatsResult> {
    let store = TaskStore::from_tasks(storage.load());
    Ok(StatsResult {
        total: store.len(),
        active: store.count_active(),
        completed: store.count_completed(),
    })
}

// === log ===

#[derive(Debug, Serialize)]
pub struct LogResult {
    pub entries: Vec<ActionLog>,
}

impl Output for LogResult {
    fn to_human(&self) -> String {
        if self.entries.is_empty() {
            return "No log entries.".to_string();
        }
        self.entries
            .iter()
            .map(|e| {
                let status = if e.success { "ok" } else { "failed" };
                let mut line = format!(
                    "{} {} {} ({}ms)",
                    e.timestamp.format("%Y-%m-%dT%H:%M:%SZ"),
                    e.command,
                    status,
                    e.duration_ms
                );
                if let Some(err) = &e.error {
                    line.push_str(&format!(": {}", err));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Show the most recent action log entries, oldest first.
pub fn log(storage: &Storage, limit: usize) -> Result<LogResult> {
    let entries = action_log::read_log(&storage.log_path(), limit);
    Ok(LogResult { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp = TempDir::new().unwrap();
        let storage = Storage::open(Some(temp.path())).unwrap();
        (temp, storage)
    }

    #[test]
    fn test_add_persists_task() {
        let (_temp, storage) = test_storage();

        let result = add(&storage, "Buy milk").unwrap();
        assert_eq!(result.task.text, "Buy milk");

        let stored = storage.load();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, result.task.id);
    }

    #[test]
    fn test_add_empty_rejected_without_write() {
        let (_temp, storage) = test_storage();

        assert!(matches!(add(&storage, "   "), Err(Error::EmptyText)));
        assert!(!storage.tasks_path().exists());
    }

    #[test]
    fn test_list_filters_and_counts() {
        let (_temp, storage) = test_storage();
        let a = add(&storage, "a").unwrap().task;
        add(&storage, "b").unwrap();
        toggle(&storage, &a.id).unwrap();

        let all = list(&storage, Filter::All).unwrap();
        assert_eq!(all.tasks.len(), 2);
        assert_eq!(all.active, 1);
        assert_eq!(all.completed, 1);

        let active = list(&storage, Filter::Active).unwrap();
        assert_eq!(active.tasks.len(), 1);
        assert_eq!(active.tasks[0].text, "b");
        // Counts stay global even for a filtered view
        assert_eq!(active.completed, 1);
    }

    #[test]
    fn test_toggle_round_trip_persists() {
        let (_temp, storage) = test_storage();
        let task = add(&storage, "Buy milk").unwrap().task;

        let completed = toggle(&storage, &task.id).unwrap().task;
        assert!(completed.completed);
        assert!(completed.duration_ms.unwrap() >= 0);
        assert!(storage.load()[0].completed);

        let active = toggle(&storage, &task.id).unwrap().task;
        assert!(!active.completed);
        assert_eq!(active.duration_ms, None);
        assert!(!storage.load()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let (_temp, storage) = test_storage();
        assert!(matches!(
            toggle(&storage, "st-nope"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_edit_updates_and_persists() {
        let (_temp, storage) = test_storage();
        let task = add(&storage, "Buy milk").unwrap().task;

        let result = edit(&storage, &task.id, "Buy oat milk").unwrap();
        assert!(result.changed);
        assert_eq!(storage.load()[0].text, "Buy oat milk");
    }

    #[test]
    fn test_edit_unchanged_is_noop() {
        let (_temp, storage) = test_storage();
        let task = add(&storage, "Buy milk").unwrap().task;

        let result = edit(&storage, &task.id, " Buy milk ").unwrap();
        assert!(!result.changed);
        assert_eq!(storage.load()[0].text, "Buy milk");
    }

    #[test]
    fn test_edit_completed_rejected() {
        let (_temp, storage) = test_storage();
        let task = add(&storage, "Buy milk").unwrap().task;
        toggle(&storage, &task.id).unwrap();

        assert!(matches!(
            edit(&storage, &task.id, "anything"),
            Err(Error::EditCompleted(_))
        ));
    }

    #[test]
    fn test_remove_reports_outcome() {
        let (_temp, storage) = test_storage();
        let task = add(&storage, "Buy milk").unwrap().task;

        let result = remove(&storage, &task.id).unwrap();
        assert!(result.removed);
        assert!(storage.load().is_empty());

        let again = remove(&storage, &task.id).unwrap();
        assert!(!again.removed);
    }

    #[test]
    fn test_clear_skips_write_when_nothing_completed() {
        let (_temp, storage) = test_storage();
        add(&storage, "active task").unwrap();

        // Drop the slot so a skipped write is observable
        std::fs::remove_file(storage.tasks_path()).unwrap();

        let result = clear(&storage).unwrap();
        assert_eq!(result.removed, 0);
        assert!(!storage.tasks_path().exists());
    }

    #[test]
    fn test_clear_removes_completed_and_persists() {
        let (_temp, storage) = test_storage();
        let a = add(&storage, "a").unwrap().task;
        add(&storage, "b").unwrap();
        toggle(&storage, &a.id).unwrap();

        let result = clear(&storage).unwrap();
        assert_eq!(result.removed, 1);

        let remaining = storage.load();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].text, "b");
    }

    #[test]
    fn test_stats_counts() {
        let (_temp, storage) = test_storage();
        let a = add(&storage, "a").unwrap().task;
        add(&storage, "b").unwrap();
        add(&storage, "c").unwrap();
        toggle(&storage, &a.id).unwrap();

        let result = stats(&storage).unwrap();
        assert_eq!(result.total, 3);
        assert_eq!(result.active, 2);
        assert_eq!(result.completed, 1);
    }

    #[test]
    fn test_task_line_shows_duration_for_completed() {
        let mut task = Task::new("st-1".to_string(), "Buy milk".to_string());
        assert_eq!(task_line(&task), "[ ] st-1  Buy milk");

        task.completed = true;
        task.duration_ms = Some(65_000);
        assert_eq!(task_line(&task), "[x] st-1  Buy milk (1m 5s)");

        // Sub-second durations format as empty and get no parens
        task.duration_ms = Some(500);
        assert_eq!(task_line(&task), "[x] st-1  Buy milk");
    }
}

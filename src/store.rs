//! The task store: an ordered, in-memory collection of tasks.
//!
//! The store owns every task record. All mutation goes through its
//! operations, which keep the invariants: insertion order is preserved
//! and is the display order for every filter, IDs are unique and never
//! reused, and completion bookkeeping (`completion_time`, `duration_ms`)
//! is consistent with the `completed` flag.

use chrono::Utc;

use crate::id;
use crate::models::{Filter, Task};
use crate::{Error, Result};

/// Outcome of an edit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Text replaced.
    Updated(Task),
    /// Trimmed text matched the current text; nothing changed.
    Unchanged(Task),
}

impl EditOutcome {
    /// The task the edit targeted, in its post-edit state.
    pub fn task(&self) -> &Task {
        match self {
            EditOutcome::Updated(task) | EditOutcome::Unchanged(task) => task,
        }
    }
}

/// An ordered collection of tasks.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an existing collection, preserving its order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by ID.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Add a new active task with the given text, trimmed.
    ///
    /// Empty or whitespace-only text is rejected and the store is left
    /// unchanged.
    pub fn add(&mut self, text: &str) -> Result<Task> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyText);
        }

        let task = Task::new(id::next_id(), trimmed.to_string());
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Flip a task between active and completed.
    ///
    /// Completing stamps `completion_time` and computes `duration_ms`
    /// from the current active stretch. Reactivating clears both and
    /// restarts the clock by resetting `creation_time`.
    pub fn toggle(&mut self, id: &str) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let now = Utc::now();
        if task.completed {
            task.completed = false;
            task.creation_time = now;
            task.completion_time = None;
            task.duration_ms = None;
        } else {
            task.completed = true;
            // Whole-millisecond difference: stored times truncate to millis
            task.duration_ms =
                Some(now.timestamp_millis() - task.creation_time.timestamp_millis());
            task.completion_time = Some(now);
        }

        Ok(task.clone())
    }

    /// Replace the text of an active task.
    ///
    /// Completed tasks must be toggled active first. An edit whose
    /// trimmed text equals the current text is a no-op, not an error.
    pub fn edit_text(&mut self, id: &str, new_text: &str) -> Result<EditOutcome> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        if task.completed {
            return Err(Error::EditCompleted(id.to_string()));
        }

        let trimmed = new_text.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyText);
        }

        if trimmed == task.text {
            return Ok(EditOutcome::Unchanged(task.clone()));
        }

        task.text = trimmed.to_string();
        Ok(EditOutcome::Updated(task.clone()))
    }

    /// Delete a task. Returns whether a deletion occurred; an absent ID
    /// is not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() < before
    }

    /// Remove all completed tasks, preserving the order of the rest.
    /// Returns the number removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    /// Number of active tasks, recomputed from current state.
    pub fn count_active(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Number of completed tasks, recomputed from current state.
    pub fn count_completed(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// The subsequence of tasks matching the filter, in insertion order.
    pub fn filtered(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }
}

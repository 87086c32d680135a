//! Task ID generation.

use chrono::Utc;
use uuid::Uuid;

/// Generate a unique ID for a task.
///
/// Format: `st-<epoch millis>-<7 hex chars>`. The timestamp keeps IDs
/// roughly sortable by creation; the random suffix separates tasks
/// created within the same millisecond. Uniqueness is probabilistic,
/// which is plenty for single-user task volumes.
pub fn next_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("st-{}-{}", millis, &suffix[..7])
}

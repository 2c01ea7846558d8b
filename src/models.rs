// Data models for todolist

use serde::{Deserialize, Serialize};

/// Row id assigned by the store. Monotonically increasing, never reused.
pub type TaskId = i64;

/// A single to-do item as stored in the `tasks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub completed: bool,
}

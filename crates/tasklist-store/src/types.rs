/*
[INPUT]:  Task title text and ids handed out by TaskStore
[OUTPUT]: TaskId and Task value records
[POS]:    Data layer - task model shared by store, row editor, and views
[UPDATE]: When task fields change
*/

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a task, unique for the lifetime of the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            done: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copy of this task with `done` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Copy of this task carrying `title`.
    pub fn retitled(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            updated_at: Utc::now(),
            ..self.clone()
        }
    }
}

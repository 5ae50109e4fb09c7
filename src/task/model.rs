// src/task/model.rs

use serde::{Deserialize, Serialize};

use crate::types::TaskStatus;

/// A unit of work, as stored by the persistence service.
///
/// ```json
/// {
///   "id": "task-2",
///   "name": "Write parser",
///   "description": "",
///   "status": 1,
///   "users": ["ana"],
///   "tags": ["backend"],
///   "depends_on": ["task-1"]
/// }
/// ```
///
/// The core never mutates a `Task` in place; operations that change the
/// graph return a fresh snapshot (`Vec<Task>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Caller-assigned identity. Immutable after creation.
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub status: TaskStatus,

    /// Assigned users. Order carries no meaning.
    #[serde(default)]
    pub users: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Ids of tasks that must be done before this one can start.
    ///
    /// Each entry is an edge `dependency -> self` in the task graph.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            status: TaskStatus::default(),
            users: Vec::new(),
            tags: Vec::new(),
            depends_on: Vec::new(),
        }
    }

    pub fn depends_on_id(&self, id: &str) -> bool {
        self.depends_on.iter().any(|d| d == id)
    }

    pub fn has_user(&self, user: &str) -> bool {
        self.users.iter().any(|u| u == user)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

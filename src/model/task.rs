use serde::{Deserialize, Serialize};

use crate::store::Collection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task_id: String,
    pub task_name: String,
    pub assigned_to: String,
    pub status: String,
}

impl Task {
    /// Apply a partial update, field by field. Absent fields keep their value.
    pub fn merge(&mut self, update: TaskUpdate) {
        if let Some(task_name) = update.task_name {
            self.task_name = task_name;
        }
        if let Some(assigned_to) = update.assigned_to {
            self.assigned_to = assigned_to;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

/// Partial update body for `PUT /edit-task`; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub task_name: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
}

/// Assigned tasks/projects, keyed by `taskId` on the edit and delete paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tasks(pub Vec<Task>);

impl Collection for Tasks {
    const NAME: &'static str = "tasks";

    fn initial() -> Self {
        Self(Vec::new())
    }
}

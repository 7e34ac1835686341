//! UpdateTask command

use crate::error::KanbanError;
use crate::operation::{Execute, ExecutionResult, Operation};
use crate::store::BoardStore;
use crate::types::{ActorId, Notice, Task, TaskFields, TaskId};
use serde::{Deserialize, Serialize};

/// Replace the editable fields of an existing task
///
/// Title, description, assignee, due date, priority and tags are all
/// overwritten. Status, comments, attachments and history are untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    /// New field values
    pub fields: TaskFields,
}

impl UpdateTask {
    pub fn new(id: impl Into<TaskId>, fields: TaskFields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

impl Operation for UpdateTask {
    fn verb(&self) -> &'static str {
        "update"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute<BoardStore> for UpdateTask {
    type Output = Task;

    fn execute(&self, ctx: &mut BoardStore, actor: &ActorId) -> ExecutionResult<Task> {
        let Some(task) = ctx.task_mut(self.id) else {
            return ExecutionResult::Declined {
                reason: KanbanError::TaskNotFound { id: self.id },
            };
        };

        task.apply_fields(&self.fields);
        // Logged even when every field is unchanged
        let entry = task.record(actor.clone(), "Updated task details");

        ExecutionResult::Logged {
            value: task.clone(),
            entry,
            notice: Notice::success("Task updated."),
        }
    }
}

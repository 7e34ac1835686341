//! AddTask command

use crate::error::KanbanError;
use crate::operation::{Execute, ExecutionResult, Operation};
use crate::store::BoardStore;
use crate::types::{ActorId, Notice, Task, TaskFields};
use serde::{Deserialize, Serialize};

/// Add a new task to the first column of the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTask {
    /// Form fields; `title` and `due_date` are required
    pub fields: TaskFields,
}

impl AddTask {
    pub fn new(fields: TaskFields) -> Self {
        Self { fields }
    }
}

impl Operation for AddTask {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute<BoardStore> for AddTask {
    type Output = Task;

    fn execute(&self, ctx: &mut BoardStore, actor: &ActorId) -> ExecutionResult<Task> {
        if self.fields.title.trim().is_empty() {
            return ExecutionResult::Declined {
                reason: KanbanError::missing_field("title"),
            };
        }
        if self.fields.due_date.trim().is_empty() {
            return ExecutionResult::Declined {
                reason: KanbanError::missing_field("due_date"),
            };
        }

        let id = ctx.allocate_id();
        let status = ctx.config().initial_column().to_string();
        let mut task = Task::from_fields(id, &self.fields, status);
        let entry = task.record(actor.clone(), "Created task");
        let notice = Notice::success(format!("Task '{}' added.", task.title));

        ctx.insert_task(task.clone());
        ExecutionResult::Logged {
            value: task,
            entry,
            notice,
        }
    }
}

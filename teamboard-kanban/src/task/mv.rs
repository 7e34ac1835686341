//! MoveTask command

use crate::error::KanbanError;
use crate::operation::{Execute, ExecutionResult, Operation};
use crate::store::BoardStore;
use crate::types::{ActorId, Notice, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Move a task to a different column
///
/// Moving a task onto the column it already occupies changes nothing and
/// records nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// Target column name
    pub status: String,
}

impl MoveTask {
    pub fn new(id: impl Into<TaskId>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
        }
    }
}

impl Operation for MoveTask {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute<BoardStore> for MoveTask {
    type Output = Task;

    fn execute(&self, ctx: &mut BoardStore, actor: &ActorId) -> ExecutionResult<Task> {
        let known_column = ctx.config().is_column(&self.status);

        let Some(task) = ctx.task_mut(self.id) else {
            return ExecutionResult::Declined {
                reason: KanbanError::TaskNotFound { id: self.id },
            };
        };

        if task.status == self.status {
            return ExecutionResult::Unlogged {
                value: task.clone(),
                notice: None,
            };
        }

        if !known_column {
            return ExecutionResult::Declined {
                reason: KanbanError::ColumnNotFound {
                    name: self.status.clone(),
                },
            };
        }

        let from = std::mem::replace(&mut task.status, self.status.clone());
        let entry = task.record(
            actor.clone(),
            format!("Moved from {} to {}", from, self.status),
        );

        ExecutionResult::Logged {
            value: task.clone(),
            entry,
            notice: Notice::info(format!("Task moved to {}", self.status)),
        }
    }
}

//! DuplicateTask command

use crate::error::KanbanError;
use crate::operation::{Execute, ExecutionResult, Operation};
use crate::store::BoardStore;
use crate::types::{ActorId, Notice, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Suffix appended to the title of a duplicated task
pub const COPY_SUFFIX: &str = " (Copy)";

/// Copy a task under a fresh id at the end of the board
///
/// Everything is copied (status, tags, comments, attachments) except the
/// history, which restarts with a single creation entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateTask {
    /// The task ID to copy
    pub id: TaskId,
}

impl DuplicateTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for DuplicateTask {
    fn verb(&self) -> &'static str {
        "duplicate"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute<BoardStore> for DuplicateTask {
    type Output = Task;

    fn execute(&self, ctx: &mut BoardStore, actor: &ActorId) -> ExecutionResult<Task> {
        let Some(source) = ctx.get_task(self.id).cloned() else {
            return ExecutionResult::Declined {
                reason: KanbanError::TaskNotFound { id: self.id },
            };
        };

        let notice = Notice::info(format!("Task '{}' duplicated.", source.title));
        let mut copy = Task {
            id: ctx.allocate_id(),
            title: format!("{}{}", source.title, COPY_SUFFIX),
            history: Vec::new(),
            ..source
        };
        let entry = copy.record(actor.clone(), "Created task from duplicate");

        ctx.insert_task(copy.clone());
        ExecutionResult::Logged {
            value: copy,
            entry,
            notice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskFields;

    #[test]
    fn test_duplicate_task() {
        let mut store = BoardStore::default();
        let actor = ActorId::from("jane.doe@example.com");
        let original = store
            .add_task(
                TaskFields::new("Write docs", "2024-08-25")
                    .with_assignee("john.smith@example.com")
                    .with_tags("Documentation"),
                &actor,
            )
            .unwrap();
        store.move_task(original.id, "In Progress", &actor);
        store.add_comment(original.id, "Started", &actor);
        store.take_notices();

        let copy = store
            .process(&DuplicateTask::new(original.id), &actor)
            .into_result()
            .unwrap();

        assert_ne!(copy.id, original.id);
        assert_eq!(copy.title, "Write docs (Copy)");
        assert_eq!(copy.status, "In Progress");
        assert_eq!(copy.assignee, "john.smith@example.com");
        assert_eq!(copy.tags, vec!["Documentation"]);
        assert_eq!(copy.comments.len(), 1);
        assert_eq!(copy.history.len(), 1);
        assert_eq!(copy.history[0].action, "Created task from duplicate");

        // Source untouched
        let source = store.get_task(original.id).unwrap();
        assert_eq!(source.title, "Write docs");
        assert_eq!(source.history.len(), 3);

        assert_eq!(
            store.take_notices()[0].message,
            "Task 'Write docs' duplicated."
        );
        assert_eq!(store.tasks().last().map(|t| t.id), Some(copy.id));
    }

    #[test]
    fn test_duplicate_missing_task() {
        let mut store = BoardStore::default();
        let actor = ActorId::from("jane.doe@example.com");

        assert!(store.duplicate_task(TaskId::new(1), &actor).is_none());
        assert!(store.is_empty());
    }
}

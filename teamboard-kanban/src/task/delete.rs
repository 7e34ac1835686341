//! DeleteTask command

use crate::operation::{Execute, ExecutionResult, Operation};
use crate::store::BoardStore;
use crate::types::{ActorId, Notice, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Remove a task unconditionally
///
/// The task's history goes with it, so nothing is recorded. Deleting an id
/// that is not on the board succeeds with `None` and queues no notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for DeleteTask {
    fn verb(&self) -> &'static str {
        "delete"
    }

    fn noun(&self) -> &'static str {
        "task"
    }
}

impl Execute<BoardStore> for DeleteTask {
    type Output = Option<Task>;

    fn execute(&self, ctx: &mut BoardStore, _actor: &ActorId) -> ExecutionResult<Option<Task>> {
        let removed = ctx.remove_task(self.id);
        let notice = removed.as_ref().map(|_| Notice::error("Task deleted."));

        ExecutionResult::Unlogged {
            value: removed,
            notice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NoticeLevel, TaskFields};

    #[test]
    fn test_delete_task() {
        let mut store = BoardStore::default();
        let actor = ActorId::from("admin@example.com");
        let task = store
            .add_task(TaskFields::new("Doomed", "2024-08-01"), &actor)
            .unwrap();
        store.take_notices();

        let removed = store
            .process(&DeleteTask::new(task.id), &actor)
            .into_result()
            .unwrap();

        assert_eq!(removed.map(|t| t.title), Some("Doomed".to_string()));
        assert!(store.get_task(task.id).is_none());

        let notices = store.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
    }

    #[test]
    fn test_delete_missing_task_is_noop() {
        let mut store = BoardStore::default();
        let actor = ActorId::from("admin@example.com");

        let result = store.process(&DeleteTask::new(TaskId::new(5)), &actor);
        assert!(!result.is_declined());
        assert!(result.into_result().unwrap().is_none());
        assert!(store.take_notices().is_empty());
    }

    #[test]
    fn test_deleted_id_is_not_reused() {
        let mut store = BoardStore::default();
        let actor = ActorId::from("admin@example.com");
        store
            .add_task(TaskFields::new("One", "2024-08-01"), &actor)
            .unwrap();
        let two = store
            .add_task(TaskFields::new("Two", "2024-08-01"), &actor)
            .unwrap();

        store.delete_task(two.id, &actor);
        let three = store
            .add_task(TaskFields::new("Three", "2024-08-01"), &actor)
            .unwrap();

        assert_eq!(three.id, TaskId::new(3));
    }
}

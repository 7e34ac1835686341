//! AddComment command

use crate::error::KanbanError;
use crate::operation::{Execute, ExecutionResult, Operation};
use crate::store::BoardStore;
use crate::types::{ActorId, Comment, Notice, TaskId};
use serde::{Deserialize, Serialize};

/// Add a comment to a task, authored by the acting user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddComment {
    /// The task ID to comment on
    pub task_id: TaskId,
    /// The comment text; blank text is declined
    pub text: String,
}

impl AddComment {
    pub fn new(task_id: impl Into<TaskId>, text: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            text: text.into(),
        }
    }
}

impl Operation for AddComment {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "comment"
    }
}

impl Execute<BoardStore> for AddComment {
    type Output = Comment;

    fn execute(&self, ctx: &mut BoardStore, actor: &ActorId) -> ExecutionResult<Comment> {
        if self.text.trim().is_empty() {
            return ExecutionResult::Declined {
                reason: KanbanError::EmptyComment,
            };
        }

        let Some(task) = ctx.task_mut(self.task_id) else {
            return ExecutionResult::Declined {
                reason: KanbanError::TaskNotFound { id: self.task_id },
            };
        };

        // Stored as typed; only the emptiness check trims
        let comment = Comment::new(actor.clone(), self.text.clone());
        task.comments.push(comment.clone());
        let entry = task.record(actor.clone(), "Added a comment");

        ExecutionResult::Logged {
            value: comment,
            entry,
            notice: Notice::success("Comment added."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskFields;

    fn setup() -> (BoardStore, ActorId, TaskId) {
        let mut store = BoardStore::default();
        let actor = ActorId::from("admin@example.com");
        let task = store
            .add_task(TaskFields::new("Task", "2024-08-01"), &actor)
            .unwrap();
        store.take_notices();
        (store, actor, task.id)
    }

    #[test]
    fn test_add_comment() {
        let (mut store, actor, id) = setup();

        let comment = store
            .process(&AddComment::new(id, "Let's use a blue color scheme."), &actor)
            .into_result()
            .unwrap();
        assert_eq!(comment.author, actor);

        let task = store.get_task(id).unwrap();
        assert_eq!(task.comments.len(), 1);
        assert_eq!(task.comments[0].text, "Let's use a blue color scheme.");
        assert_eq!(task.history.len(), 2);
        assert_eq!(task.history[1].action, "Added a comment");
        assert_eq!(store.take_notices()[0].message, "Comment added.");
    }

    #[test]
    fn test_blank_comment_is_declined() {
        let (mut store, actor, id) = setup();

        let result = store.process(&AddComment::new(id, "   \n"), &actor);
        assert!(matches!(
            result.into_result(),
            Err(KanbanError::EmptyComment)
        ));

        let task = store.get_task(id).unwrap();
        assert!(task.comments.is_empty());
        assert_eq!(task.history.len(), 1);
    }

    #[test]
    fn test_comment_on_missing_task() {
        let (mut store, actor, _) = setup();
        assert!(store
            .add_comment(TaskId::new(42), "hello", &actor)
            .is_none());
        assert!(store.take_notices().is_empty());
    }

    #[test]
    fn test_comments_append_in_order() {
        let (mut store, actor, id) = setup();
        let other = ActorId::from("jane.doe@example.com");

        store.add_comment(id, "first", &actor);
        store.add_comment(id, "second", &other);

        let task = store.get_task(id).unwrap();
        let texts: Vec<&str> = task.comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(task.comments[1].author, other);
        assert_eq!(task.history[2].user, other);
    }
}

//! Operation traits and execution results
//!
//! Every mutation is a struct whose fields ARE its parameters. The struct
//! names itself through [`Operation`] and does its work in [`Execute`].
//!
//! ```
//! use teamboard_kanban::{task::AddTask, ActorId, BoardStore, TaskFields};
//!
//! let mut store = BoardStore::default();
//! let actor = ActorId::from("admin@example.com");
//! let result = store.process(&AddTask::new(TaskFields::new("Ship it", "2024-08-30")), &actor);
//! assert!(result.should_log());
//! ```

use crate::error::KanbanError;
use crate::types::{ActorId, HistoryEntry, Notice};

/// Canonical naming of an operation ("move task", "add comment")
pub trait Operation {
    fn verb(&self) -> &'static str;
    fn noun(&self) -> &'static str;

    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run an operation against a context on behalf of an actor
pub trait Execute<C>: Operation {
    type Output;

    fn execute(&self, ctx: &mut C, actor: &ActorId) -> ExecutionResult<Self::Output>;
}

/// Result of executing an operation
///
/// Distinguishes between:
/// - Logged: the task's history gained exactly one entry
/// - Unlogged: succeeded without a history entry (delete)
/// - Declined: nothing changed (unknown id, blank comment, ...)
#[derive(Debug)]
pub enum ExecutionResult<T> {
    /// Mutation applied and recorded in the task history
    Logged {
        value: T,
        entry: HistoryEntry,
        notice: Notice,
    },
    /// Mutation applied (or was a no-op) without a history entry
    Unlogged { value: T, notice: Option<Notice> },
    /// Operation declined; state is untouched
    Declined { reason: KanbanError },
}

impl<T> ExecutionResult<T> {
    /// Extract the result (Ok or Err)
    pub fn into_result(self) -> Result<T, KanbanError> {
        match self {
            Self::Logged { value, .. } => Ok(value),
            Self::Unlogged { value, .. } => Ok(value),
            Self::Declined { reason } => Err(reason),
        }
    }

    /// The value, dropping the decline reason
    pub fn ok(self) -> Option<T> {
        self.into_result().ok()
    }

    /// Check if this recorded a history entry
    pub fn should_log(&self) -> bool {
        matches!(self, Self::Logged { .. })
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, Self::Declined { .. })
    }

    pub fn history_entry(&self) -> Option<&HistoryEntry> {
        match self {
            Self::Logged { entry, .. } => Some(entry),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Logged { notice, .. } => Some(notice),
            Self::Unlogged { notice, .. } => notice.as_ref(),
            Self::Declined { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskId;

    #[test]
    fn test_logged_result() {
        let result = ExecutionResult::Logged {
            value: 1,
            entry: HistoryEntry::new(ActorId::from("a"), "Created task"),
            notice: Notice::success("done"),
        };
        assert!(result.should_log());
        assert_eq!(result.history_entry().unwrap().action, "Created task");
        assert_eq!(result.notice().unwrap().message, "done");
        assert_eq!(result.into_result().unwrap(), 1);
    }

    #[test]
    fn test_declined_result() {
        let result: ExecutionResult<()> = ExecutionResult::Declined {
            reason: KanbanError::TaskNotFound { id: TaskId::new(9) },
        };
        assert!(result.is_declined());
        assert!(!result.should_log());
        assert!(result.notice().is_none());
        assert!(matches!(
            result.into_result(),
            Err(KanbanError::TaskNotFound { .. })
        ));
    }
}

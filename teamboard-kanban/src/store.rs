//! BoardStore - the in-memory task collection
//!
//! The store provides storage primitives and runs operations. Commands in
//! [`crate::task`] and [`crate::comment`] do the actual work; the methods at
//! the bottom of this file are the silent, fire-and-forget wrappers the
//! presentation layer calls from its event handlers.

use crate::comment::AddComment;
use crate::config::BoardConfig;
use crate::error::{KanbanError, Result};
use crate::operation::{Execute, ExecutionResult};
use crate::task::{AddTask, DeleteTask, DuplicateTask, MoveTask, UpdateTask};
use crate::types::{ActorId, Comment, Notice, Task, TaskFields, TaskId};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

/// Owns every task on the board, keyed by id in insertion order
#[derive(Debug, Clone)]
pub struct BoardStore {
    config: BoardConfig,
    tasks: IndexMap<TaskId, Task>,
    /// Highest id ever handed out or loaded; never decreases
    last_id: u64,
    notices: Vec<Notice>,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::empty(BoardConfig::default())
    }
}

impl BoardStore {
    /// Create an empty board. Fails if `config` does not validate.
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    /// Empty board over an already validated config
    fn empty(config: BoardConfig) -> Self {
        info!(columns = ?config.columns, "Created empty board");
        Self {
            config,
            tasks: IndexMap::new(),
            last_id: 0,
            notices: Vec::new(),
        }
    }

    /// Create a board pre-populated with existing task records
    ///
    /// Records keep their ids and history. A task whose status is not a
    /// configured column is kept, but no column view will show it.
    pub fn with_tasks(config: BoardConfig, tasks: impl IntoIterator<Item = Task>) -> Result<Self> {
        let mut store = Self::new(config)?;

        for task in tasks {
            if store.tasks.contains_key(&task.id) {
                return Err(KanbanError::DuplicateId { id: task.id });
            }
            if !store.config.is_column(&task.status) {
                warn!(
                    task_id = %task.id,
                    status = %task.status,
                    "Task status is not a board column; it will not appear in column views"
                );
            }
            store.insert_task(task);
        }

        info!(tasks = store.tasks.len(), "Loaded board");
        Ok(store)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Column names in display order
    pub fn columns(&self) -> &[String] {
        &self.config.columns
    }

    /// Look up a task by id
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // =========================================================================
    // Primitives used by commands
    // =========================================================================

    pub(crate) fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(&id)
    }

    /// Hand out the next id: one past the highest id ever seen
    pub(crate) fn allocate_id(&mut self) -> TaskId {
        self.last_id += 1;
        TaskId::new(self.last_id)
    }

    /// Append a task at the end of the collection
    pub(crate) fn insert_task(&mut self, task: Task) {
        self.last_id = self.last_id.max(task.id.get());
        self.tasks.insert(task.id, task);
    }

    /// Remove a task, keeping the relative order of the rest
    pub(crate) fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        self.tasks.shift_remove(&id)
    }

    // =========================================================================
    // Notices
    // =========================================================================

    /// Notices queued since the last call, oldest first
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Peek at queued notices without draining them
    pub fn pending_notices(&self) -> &[Notice] {
        &self.notices
    }

    // =========================================================================
    // Operation processing
    // =========================================================================

    /// Run an operation on behalf of `actor`, queue its notice and trace it
    pub fn process<O>(&mut self, operation: &O, actor: &ActorId) -> ExecutionResult<O::Output>
    where
        O: Execute<Self>,
    {
        let op = operation.op_string();
        let result = operation.execute(self, actor);

        match &result {
            ExecutionResult::Logged { entry, .. } => {
                debug!(op = %op, actor = %actor, action = %entry.action, "Operation recorded")
            }
            ExecutionResult::Unlogged { .. } => {
                debug!(op = %op, actor = %actor, "Operation applied without history")
            }
            ExecutionResult::Declined { reason } => {
                debug!(op = %op, actor = %actor, reason = %reason, "Operation declined")
            }
        }

        if let Some(notice) = result.notice() {
            self.notices.push(notice.clone());
        }
        result
    }

    // =========================================================================
    // Event-handler API
    // =========================================================================

    /// Create a task in the first column. Fails only on a blank title or due date.
    pub fn add_task(&mut self, fields: TaskFields, actor: &ActorId) -> Result<Task> {
        self.process(&AddTask::new(fields), actor).into_result()
    }

    /// Move a task to another column. Silent when the id is unknown, the
    /// column is unknown, or the task is already there.
    pub fn move_task(&mut self, id: TaskId, new_status: &str, actor: &ActorId) {
        self.process(&MoveTask::new(id, new_status), actor);
    }

    /// Replace the editable fields of a task. Silent when the id is unknown.
    pub fn update_task(&mut self, id: TaskId, fields: TaskFields, actor: &ActorId) {
        self.process(&UpdateTask::new(id, fields), actor);
    }

    /// Remove a task if present
    pub fn delete_task(&mut self, id: TaskId, actor: &ActorId) {
        self.process(&DeleteTask::new(id), actor);
    }

    /// Copy a task under a new id. `None` when the source is unknown.
    pub fn duplicate_task(&mut self, id: TaskId, actor: &ActorId) -> Option<Task> {
        self.process(&DuplicateTask::new(id), actor).ok()
    }

    /// Comment on a task as `actor`. Silent on blank text or an unknown id.
    pub fn add_comment(
        &mut self,
        id: TaskId,
        text: impl Into<String>,
        actor: &ActorId,
    ) -> Option<Comment> {
        self.process(&AddComment::new(id, text), actor).ok()
    }
}

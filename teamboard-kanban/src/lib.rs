//! In-memory kanban board engine
//!
//! This crate holds the task board behind the team workspace: an ordered
//! collection of tasks, a fixed set of columns, and a per-task audit
//! history. The presentation layer calls the store directly from its event
//! handlers and renders the derived views.
//!
//! ## Overview
//!
//! - **One owner** - a [`BoardStore`] is owned by the application and
//!   mutated through `&mut self`; every change is visible immediately
//! - **Audited** - every create, update, move, duplicate and comment appends
//!   exactly one [`HistoryEntry`] naming the acting user
//! - **Forgiving** - unknown ids and blank comments are silent no-ops in
//!   the event-handler API; [`BoardStore::process`] reports why
//!
//! ## Basic Usage
//!
//! ```rust
//! use teamboard_kanban::{ActorId, BoardStore, TaskFields, TaskFilter};
//!
//! let mut store = BoardStore::default();
//! let actor = ActorId::from("admin@example.com");
//!
//! let task = store
//!     .add_task(
//!         TaskFields::new("Implement feature X", "2024-08-30").with_tags("Backend, API"),
//!         &actor,
//!     )
//!     .unwrap();
//!
//! store.move_task(task.id, "In Progress", &actor);
//! store.add_comment(task.id, "Started on this", &actor);
//!
//! let columns = store.tasks_by_column(&TaskFilter::all());
//! assert_eq!(columns["In Progress"].len(), 1);
//! assert_eq!(store.get_task(task.id).unwrap().history.len(), 3);
//! ```

pub mod board;
pub mod comment;
pub mod config;
pub mod defaults;
mod error;
pub mod filter;
mod operation;
mod store;
pub mod tag_parser;
pub mod task;
pub mod types;

pub use config::BoardConfig;
pub use error::{KanbanError, Result};
pub use filter::{FilterValue, TaskFilter, ALL_SENTINEL};
pub use operation::{Execute, ExecutionResult, Operation};
pub use store::BoardStore;

// Re-export commonly used types
pub use types::{
    ActorId, Comment, HistoryEntry, Notice, NoticeLevel, Priority, Task, TaskFields, TaskId,
};

//! Core types for the kanban engine

mod history;
mod ids;
mod notice;
mod task;

// Re-export all types
pub use history::HistoryEntry;
pub use ids::{ActorId, TaskId};
pub use notice::{Notice, NoticeLevel};
pub use task::{Comment, Priority, Task, TaskFields};

//! Task commands

mod add;
mod delete;
mod duplicate;
mod mv;
mod update;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use duplicate::{DuplicateTask, COPY_SUFFIX};
pub use mv::MoveTask;
pub use update::UpdateTask;

//! Derived board views: filtering, column grouping, tag and due-date summaries

mod view;

pub use view::{BoardView, ColumnView};

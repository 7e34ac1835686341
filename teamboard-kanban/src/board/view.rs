//! Read-only queries over the board
//!
//! Nothing here is cached: every call derives its answer from the current
//! task collection, so mutations are visible immediately.

use crate::filter::TaskFilter;
use crate::store::BoardStore;
use crate::types::Task;
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Date format due dates are entered in
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One column of the rendered board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnView {
    pub name: String,
    pub count: usize,
    pub tasks: Vec<Task>,
}

/// Everything the board page renders for one filter selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub filter: TaskFilter,
    pub columns: Vec<ColumnView>,
    pub all_tags: Vec<String>,
    pub due_today: usize,
}

impl BoardStore {
    /// Tasks passing `filter`, in insertion order
    pub fn filtered_tasks(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.tasks().filter(|task| filter.matches(task)).collect()
    }

    /// Filtered tasks grouped by column, one bucket per configured column
    ///
    /// Buckets follow column order and may be empty. A task whose status is
    /// not a configured column lands in no bucket.
    pub fn tasks_by_column(&self, filter: &TaskFilter) -> IndexMap<String, Vec<&Task>> {
        let mut buckets: IndexMap<String, Vec<&Task>> = self
            .columns()
            .iter()
            .map(|column| (column.clone(), Vec::new()))
            .collect();

        for task in self.filtered_tasks(filter) {
            if let Some(bucket) = buckets.get_mut(&task.status) {
                bucket.push(task);
            }
        }
        buckets
    }

    /// Number of filtered tasks per column, in column order
    pub fn column_counts(&self, filter: &TaskFilter) -> IndexMap<String, usize> {
        self.tasks_by_column(filter)
            .into_iter()
            .map(|(column, tasks)| (column, tasks.len()))
            .collect()
    }

    /// Every tag used on the board, deduplicated and sorted ascending
    pub fn all_tags(&self) -> Vec<String> {
        self.tasks()
            .flat_map(|task| task.tags.iter())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Unfinished tasks due on today's local date
    pub fn due_today_count(&self) -> usize {
        self.due_count_on(Local::now().date_naive())
    }

    /// Unfinished tasks whose due date string equals `date` as `YYYY-MM-DD`
    ///
    /// The comparison is textual: a due date entered in any other format
    /// never matches.
    pub fn due_count_on(&self, date: NaiveDate) -> usize {
        let day = date.format(DUE_DATE_FORMAT).to_string();
        let terminal = &self.config().terminal_column;

        self.tasks()
            .filter(|task| task.due_date == day && &task.status != terminal)
            .count()
    }

    /// Snapshot of the whole board page for `filter`
    pub fn board_view(&self, filter: &TaskFilter) -> BoardView {
        let columns = self
            .tasks_by_column(filter)
            .into_iter()
            .map(|(name, tasks)| ColumnView {
                name,
                count: tasks.len(),
                tasks: tasks.into_iter().cloned().collect(),
            })
            .collect();

        BoardView {
            filter: filter.clone(),
            columns,
            all_tags: self.all_tags(),
            due_today: self.due_today_count(),
        }
    }
}

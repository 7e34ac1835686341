//! Board filters: assignee and tag, each either "All" or one exact value.

use crate::types::Task;
use serde::{Deserialize, Serialize};

/// The reserved filter value meaning "no restriction"
pub const ALL_SENTINEL: &str = "All";

/// One filter dimension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    #[default]
    All,
    Only(String),
}

impl FilterValue {
    /// Map a select-box value to a filter. `"All"` is the sentinel.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SENTINEL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The select-box value this filter came from
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Only(value) => value,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Assignee + tag filter applied to board listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    pub assignee: FilterValue,
    pub tag: FilterValue,
}

impl TaskFilter {
    /// Build a filter from raw select-box values
    pub fn new(assignee: impl Into<FilterValue>, tag: impl Into<FilterValue>) -> Self {
        Self {
            assignee: assignee.into(),
            tag: tag.into(),
        }
    }

    /// A filter that lets every task through
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_assignee(mut self, assignee: impl Into<FilterValue>) -> Self {
        self.assignee = assignee.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<FilterValue>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Both dimensions must match
    pub fn matches(&self, task: &Task) -> bool {
        let assignee_ok = match &self.assignee {
            FilterValue::All => true,
            FilterValue::Only(assignee) => &task.assignee == assignee,
        };
        let tag_ok = match &self.tag {
            FilterValue::All => true,
            FilterValue::Only(tag) => task.has_tag(tag),
        };
        assignee_ok && tag_ok
    }
}

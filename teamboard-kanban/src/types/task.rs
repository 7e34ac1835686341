//! Task types: Task, Comment, Priority, TaskFields

use super::history::HistoryEntry;
use super::ids::{ActorId, TaskId};
use crate::error::KanbanError;
use crate::tag_parser::{join_tags, parse_tags};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A task/card on the kanban board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assignee: String,
    /// Calendar date as entered (`YYYY-MM-DD`); compared as a plain string
    pub due_date: String,
    /// Ordered, duplicates allowed
    #[serde(default)]
    pub tags: Vec<String>,
    /// Name of the column the task sits in
    pub status: String,
    #[serde(default)]
    pub priority: Priority,
    /// Opaque attachment URLs
    #[serde(default)]
    pub attachments: Vec<String>,
    /// Discussion thread, append-only
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Audit trail, append-only
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl Task {
    /// Build a fresh task from form fields. Tags are parsed from the comma list.
    pub fn from_fields(id: TaskId, fields: &TaskFields, status: impl Into<String>) -> Self {
        Self {
            id,
            title: fields.title.clone(),
            description: fields.description.clone(),
            assignee: fields.assignee.clone(),
            due_date: fields.due_date.clone(),
            tags: parse_tags(&fields.tags),
            status: status.into(),
            priority: fields.priority,
            attachments: Vec::new(),
            comments: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Overwrite the editable fields. Tags are replaced, never merged.
    pub fn apply_fields(&mut self, fields: &TaskFields) {
        self.title = fields.title.clone();
        self.description = fields.description.clone();
        self.assignee = fields.assignee.clone();
        self.due_date = fields.due_date.clone();
        self.priority = fields.priority;
        self.tags = parse_tags(&fields.tags);
    }

    /// Add an attachment URL
    pub fn with_attachment(mut self, url: impl Into<String>) -> Self {
        self.attachments.push(url.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Append one history entry and hand back a copy of it
    pub fn record(&mut self, user: ActorId, action: impl Into<String>) -> HistoryEntry {
        let entry = HistoryEntry::new(user, action);
        self.history.push(entry.clone());
        entry
    }
}

/// A comment on a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: ActorId,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    /// Create a comment stamped with the current time
    pub fn new(author: ActorId, text: impl Into<String>) -> Self {
        Self {
            author,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            other => Err(KanbanError::invalid_value(
                "priority",
                format!("expected Low, Medium or High, got '{}'", other),
            )),
        }
    }
}

/// The editable fields of a task, as submitted by the add/edit forms
///
/// `tags` is the raw comma-separated input; it is parsed when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assignee: String,
    pub due_date: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub tags: String,
}

impl TaskFields {
    /// Create fields with the two values every new task needs
    pub fn new(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            due_date: due_date.into(),
            ..Default::default()
        }
    }

    /// Prefill an edit form from an existing task
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            assignee: task.assignee.clone(),
            due_date: task.due_date.clone(),
            priority: task.priority,
            tags: join_tags(&task.tags),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the raw comma-separated tag list
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }
}

//! Per-task audit history

use super::ids::ActorId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One audit record on a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Who performed the action
    pub user: ActorId,

    /// Free-text description (e.g. "Moved from To Do to Done")
    pub action: String,

    /// When the action happened
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time
    pub fn new(user: ActorId, action: impl Into<String>) -> Self {
        Self {
            user,
            action: action.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create an entry with an explicit timestamp (seed data)
    pub fn at(user: ActorId, action: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            user,
            action: action.into(),
            timestamp,
        }
    }
}

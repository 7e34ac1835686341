//! Error types for the kanban engine

use crate::types::TaskId;
use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
///
/// Most of these never reach a caller of the convenience methods on
/// [`BoardStore`](crate::BoardStore); they surface through
/// [`ExecutionResult::Declined`](crate::ExecutionResult::Declined) when a
/// command is run with [`BoardStore::process`](crate::BoardStore::process).
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: TaskId },

    /// Column not found
    #[error("column not found: {name}")]
    ColumnNotFound { name: String },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Comment text was blank after trimming
    #[error("comment text is empty")]
    EmptyComment,

    /// Duplicate ID
    #[error("duplicate task ID: {id}")]
    DuplicateId { id: TaskId },

    /// Board configuration is inconsistent
    #[error("invalid board configuration: {message}")]
    InvalidConfig { message: String },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl KanbanError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether this error is a lookup miss rather than bad input
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound { .. } | Self::ColumnNotFound { .. }
        )
    }
}

impl From<figment::Error> for KanbanError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KanbanError::TaskNotFound { id: TaskId::new(42) };
        assert_eq!(err.to_string(), "task not found: 42");
    }

    #[test]
    fn test_missing_field() {
        let err = KanbanError::missing_field("due_date");
        assert_eq!(err.to_string(), "missing required field: due_date");
    }

    #[test]
    fn test_not_found_classification() {
        assert!(KanbanError::TaskNotFound { id: TaskId::new(1) }.is_not_found());
        assert!(KanbanError::ColumnNotFound {
            name: "Blocked".into()
        }
        .is_not_found());
        assert!(!KanbanError::EmptyComment.is_not_found());
    }
}

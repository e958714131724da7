//! Error types for the kanban board engine

use std::path::PathBuf;
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum KanbanError {
    /// User-supplied fields failed a precondition
    #[error("invalid value for {field}: {message}")]
    Validation { field: String, message: String },

    /// Task not found in the addressed column (or anywhere on the board)
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// A drag ended over something that is neither a column nor a task
    #[error("drop target not found: {id}")]
    DropTargetNotFound { id: String },

    /// Column is not part of the board's fixed column set
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Explicitly requested configuration file does not exist
    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration could not be extracted
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    pub fn task_not_found(id: impl ToString) -> Self {
        Self::TaskNotFound { id: id.to_string() }
    }

    pub fn column_not_found(id: impl ToString) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    /// Errors a presentation layer may swallow without telling the user.
    ///
    /// A drag can legitimately end outside any droppable area.
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::DropTargetNotFound { .. })
    }
}

impl From<figment::Error> for KanbanError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}

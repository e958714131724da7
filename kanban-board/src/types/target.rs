//! Drop targets and drag-end events

use super::board::Board;
use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What was under the pointer when a drag ended.
///
/// Columns and tasks are kept apart explicitly so a task whose ID happens to
/// equal a column name is never mistaken for the column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DropTarget {
    /// Empty area of a column
    Column(ColumnId),
    /// Another task card
    Task(TaskId),
}

impl DropTarget {
    pub fn column(id: impl Into<ColumnId>) -> Self {
        Self::Column(id.into())
    }

    pub fn task(id: impl Into<TaskId>) -> Self {
        Self::Task(id.into())
    }

    /// True when this target is the given task itself
    pub fn is_task(&self, id: &TaskId) -> bool {
        matches!(self, Self::Task(t) if t == id)
    }

    /// The raw identifier, whichever kind it is
    pub fn id_str(&self) -> &str {
        match self {
            Self::Column(c) => c.as_str(),
            Self::Task(t) => t.as_str(),
        }
    }
}

impl fmt::Display for DropTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(c) => write!(f, "column '{}'", c),
            Self::Task(t) => write!(f, "task '{}'", t),
        }
    }
}

/// A concluded drag gesture: the dragged task and what it was released over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub active: TaskId,
    /// `None` when released outside any droppable area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over: Option<DropTarget>,
}

impl DragEnd {
    pub fn new(active: impl Into<TaskId>, over: DropTarget) -> Self {
        Self {
            active: active.into(),
            over: Some(over),
        }
    }

    /// A drag released outside every droppable area
    pub fn dropped_outside(active: impl Into<TaskId>) -> Self {
        Self {
            active: active.into(),
            over: None,
        }
    }

    /// Build an event from raw string IDs, classifying `over` against the
    /// board's column set.
    pub fn from_raw(board: &Board, active: &str, over: Option<&str>) -> Self {
        Self {
            active: TaskId::from_string(active),
            over: over.map(|raw| board.classify_target(raw)),
        }
    }
}

//! AddTask command

use crate::error::{KanbanError, Result};
use crate::operation::{run_logged, Applied, Execute, ExecutionResult, Operation};
use crate::types::{Board, ColumnId, Priority, TaskFields, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Add a new task to the end of a column
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddTask {
    /// Target column
    pub column: ColumnId,
    #[serde(flatten)]
    pub fields: TaskFields,
}

impl AddTask {
    /// Create a new AddTask command with just a column and title
    pub fn new(column: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            fields: TaskFields::new(title),
        }
    }

    /// Create from a prepared field set
    pub fn with_fields(column: impl Into<ColumnId>, fields: TaskFields) -> Self {
        Self {
            column: column.into(),
            fields,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.fields.priority = Some(priority);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.fields.date = Some(date);
        self
    }

    pub fn with_comments(mut self, comments: u32) -> Self {
        self.fields.comments = Some(comments);
        self
    }

    pub fn with_attachments(mut self, attachments: u32) -> Self {
        self.fields.attachments = Some(attachments);
        self
    }

    /// Validate, append the task, and return the new board along with the
    /// generated ID.
    pub fn apply(&self, board: &Board) -> Result<(Board, TaskId)> {
        let existing = board.require_column(&self.column)?;
        let task = self.fields.clone().into_task(fresh_id(board))?;
        let id = task.id.clone();

        let mut tasks = existing.to_vec();
        tasks.push(task);
        debug!(task = %id, column = %self.column, "added task");
        Ok((board.replace_columns([(self.column.clone(), tasks)]), id))
    }
}

/// A ULID that no task on the board already uses.
fn fresh_id(board: &Board) -> TaskId {
    loop {
        let id = TaskId::new();
        if !board.contains_task(&id) {
            return id;
        }
    }
}

impl Operation for AddTask {
    fn verb(&self) -> &'static str {
        "add"
    }
}

impl Execute for AddTask {
    fn execute(&self, board: &Board) -> ExecutionResult<Board, KanbanError> {
        run_logged(self, || {
            let (next, id) = self.apply(board)?;
            let output = next
                .find_task(&id)
                .map(|loc| serde_json::to_value(loc.task))
                .transpose()?
                .unwrap_or_default();
            Ok(Applied::Changed(next, output))
        })
    }
}

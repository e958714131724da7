//! Task commands and the plain-function mutation API built on them.

mod add;
mod delete;
mod mv;
mod update;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use mv::MoveTask;
pub use update::UpdateTask;

use crate::error::Result;
use crate::types::{Board, ColumnId, TaskFields, TaskId, TaskPatch};

/// Append a new task to `column`. Rejects blank titles and unknown columns.
pub fn create(board: &Board, column: &ColumnId, fields: TaskFields) -> Result<Board> {
    AddTask::with_fields(column, fields)
        .apply(board)
        .map(|(next, _)| next)
}

/// Merge `patch` into the task `id` found in `column`.
pub fn update(board: &Board, column: &ColumnId, id: &TaskId, patch: TaskPatch) -> Result<Board> {
    UpdateTask::new(column, id).with_patch(patch).apply(board)
}

/// Remove task `id` from `column`. A task that is not there is not an error.
pub fn remove(board: &Board, column: &ColumnId, id: &TaskId) -> Result<Board> {
    DeleteTask::new(column, id).apply(board)
}

//! Kanban board state with a drag-and-drop reorder engine
//!
//! A board is a fixed, ordered set of columns, each holding an ordered list of
//! task cards. Boards are immutable values: every mutation returns a new
//! board and leaves the old one intact, sharing untouched columns.
//!
//! ## Overview
//!
//! - **Reorder engine** - `reorder` turns a drag-end event into the next board
//! - **Mutations** - `create`, `update` and `remove` for task cards
//! - **Operations** - the same mutations as structs implementing [`Execute`],
//!   driven by a [`BoardProcessor`] that keeps an activity log
//! - **Configuration** - columns, seed tasks and drag threshold via figment
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_board::{reorder, Board, BoardConfig, DropTarget, TaskId};
//!
//! # fn example() -> kanban_board::Result<()> {
//! let board = Board::from_config(&BoardConfig::default())?;
//!
//! // Drag "Mockup" onto "Create Wireframe"
//! let next = reorder(
//!     &board,
//!     &TaskId::from("done-1"),
//!     Some(&DropTarget::task("progress-1")),
//! )?;
//!
//! let ids: Vec<&str> = next
//!     .tasks(&"In Progress".into())
//!     .unwrap_or_default()
//!     .iter()
//!     .map(|t| t.id.as_str())
//!     .collect();
//! assert_eq!(ids, ["done-1", "progress-1"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod drag;
mod error;
mod operation;
mod processor;
pub mod reorder;
pub mod task;
pub mod types;

pub use config::{BoardConfig, SeedTask};
pub use drag::DragSensor;
pub use error::{KanbanError, Result};
pub use operation::{Execute, ExecutionResult, Operation};
pub use processor::{BoardProcessor, DEFAULT_ACTIVITY_CAPACITY};
pub use reorder::{reorder, resolve_drop, resolve_move, MovePlan};
pub use task::{create, remove, update, AddTask, DeleteTask, MoveTask, UpdateTask};
pub use types::{
    today, Board, ColumnId, DragEnd, DropTarget, LogEntry, Priority, Task, TaskFields, TaskId,
    TaskLocation, TaskPatch,
};

//! Core types for the kanban board

mod board;
mod fields;
mod ids;
mod log;
mod target;
mod task;

// Re-export all types
pub use board::{Board, TaskLocation};
pub use fields::{TaskFields, TaskPatch};
pub use ids::{ColumnId, TaskId};
pub use log::LogEntry;
pub use target::{DragEnd, DropTarget};
pub use task::{today, Priority, Task};

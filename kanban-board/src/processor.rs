//! Operation processor owning the current board

use crate::error::Result;
use crate::operation::Execute;
use crate::types::{Board, LogEntry};
use std::collections::VecDeque;
use tracing::{info, warn};

/// Default number of activity entries kept in memory
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 200;

/// Holds the single current board and replaces it as operations succeed.
///
/// Every logged outcome, success or failure, is kept in a bounded in-memory
/// activity log, newest first. A failed operation never touches the board.
#[derive(Debug)]
pub struct BoardProcessor {
    board: Board,
    actor: Option<String>,
    activity: VecDeque<LogEntry>,
    capacity: usize,
}

impl BoardProcessor {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            actor: None,
            activity: VecDeque::new(),
            capacity: DEFAULT_ACTIVITY_CAPACITY,
        }
    }

    /// Attribute recorded entries to `actor`
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Keep at most `capacity` activity entries
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self.activity.truncate(capacity);
        self
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Execute `op` against the current board and commit its result.
    pub fn process<O: Execute>(&mut self, op: &O) -> Result<Board> {
        let (result, log_entry) = op.execute(&self.board).split();

        if let Some(entry) = log_entry {
            self.record(entry);
        }

        match result {
            Ok(next) => {
                if next != self.board {
                    info!(op = %op.op_string(), tasks = next.len(), "board updated");
                }
                self.board = next;
                Ok(self.board.clone())
            }
            Err(error) => {
                warn!(op = %op.op_string(), "operation rejected: {}", error);
                Err(error)
            }
        }
    }

    /// Recorded entries, newest first
    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.activity.iter()
    }

    /// Entries for failed operations only
    pub fn failures(&self) -> impl Iterator<Item = &LogEntry> {
        self.activity.iter().filter(|e| e.is_failure())
    }

    fn record(&mut self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        let entry = match &self.actor {
            Some(actor) => entry.with_actor(actor.clone()),
            None => entry,
        };
        self.activity.push_front(entry);
        self.activity.truncate(self.capacity);
    }
}

impl From<Board> for BoardProcessor {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}

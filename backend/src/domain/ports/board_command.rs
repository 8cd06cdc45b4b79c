//! Driving port for board mutations.

use async_trait::async_trait;

use crate::domain::{Board, BoardDraft, BoardId, Error, TaskDraft};

/// Write-side use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardCommand: Send + Sync {
    /// Create a board. Any identifier the caller had in mind is ignored.
    async fn create_board(&self, draft: BoardDraft) -> Result<Board, Error>;

    /// Rename a board. Only the title changes.
    async fn update_board(&self, id: BoardId, title: String) -> Result<Board, Error>;

    /// Delete a board together with its tasks.
    async fn delete_board(&self, id: BoardId) -> Result<(), Error>;

    /// Store a task under a board and return the board with the task appended.
    ///
    /// The returned board is the one loaded before the insert plus the new
    /// task. Tasks stored concurrently in between are absent from it until
    /// the board is fetched again.
    async fn create_task(&self, board_id: BoardId, draft: TaskDraft) -> Result<Board, Error>;
}

//! Driving port for board reads.

use async_trait::async_trait;

use crate::domain::{Board, BoardId, Error, Task};

/// Read-side use cases exposed to inbound adapters.
///
/// Lookups that miss return an [`Error`] with
/// [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound); every other
/// failure is [`ErrorCode::InternalError`](crate::domain::ErrorCode::InternalError).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardQuery: Send + Sync {
    /// Every board with its tasks.
    async fn list_boards(&self) -> Result<Vec<Board>, Error>;

    /// A single board by id.
    async fn get_board(&self, id: BoardId) -> Result<Board, Error>;

    /// The first board whose title matches exactly.
    async fn find_board_by_title(&self, title: &str) -> Result<Board, Error>;

    /// Tasks owned by a board.
    async fn list_tasks(&self, board_id: BoardId) -> Result<Vec<Task>, Error>;
}

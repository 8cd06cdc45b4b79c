//! Driven port for board persistence.

use async_trait::async_trait;

use crate::domain::{Board, BoardDraft, BoardId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by board repository adapters.
    pub enum BoardRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "board repository connection failed: {message}",
        /// A query or mutation failed while executing.
        Query { message: String } =>
            "board repository query failed: {message}",
    }
}

/// Port for reading and writing boards together with their tasks.
///
/// Every board returned by an adapter carries its full task list ordered by
/// ascending task id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// All boards ordered by ascending id.
    async fn list(&self) -> Result<Vec<Board>, BoardRepositoryError>;

    /// Look a board up by id.
    async fn find_by_id(&self, id: BoardId) -> Result<Option<Board>, BoardRepositoryError>;

    /// Lowest-id board whose title equals `title` exactly.
    async fn find_first_by_title(
        &self,
        title: &str,
    ) -> Result<Option<Board>, BoardRepositoryError>;

    /// Store a new board and return it with its assigned id.
    async fn insert(&self, draft: &BoardDraft) -> Result<Board, BoardRepositoryError>;

    /// Replace a board title. Returns `None` when the board no longer exists.
    async fn update_title(
        &self,
        id: BoardId,
        title: &str,
    ) -> Result<Option<Board>, BoardRepositoryError>;

    /// Remove a board and every task it owns. Returns whether a row was removed.
    async fn delete(&self, id: BoardId) -> Result<bool, BoardRepositoryError>;
}

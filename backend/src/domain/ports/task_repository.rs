//! Driven port for task persistence.

use async_trait::async_trait;

use crate::domain::{BoardId, Task, TaskDraft};

use super::define_port_error;

define_port_error! {
    /// Errors raised by task repository adapters.
    pub enum TaskRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "task repository connection failed: {message}",
        /// A query or mutation failed, including inserts against a missing board.
        Query { message: String } =>
            "task repository query failed: {message}",
    }
}

/// Port for storing tasks under an existing board.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Store a task owned by `board_id` and return it with its assigned id.
    async fn insert(
        &self,
        board_id: BoardId,
        draft: &TaskDraft,
    ) -> Result<Task, TaskRepositoryError>;
}

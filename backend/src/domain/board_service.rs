//! Board domain service.
//!
//! Implements the board driving ports on top of the board and task
//! repositories. The service only copies fields and chooses between
//! not-found and internal failures; repositories own all persistence.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{
    BoardCommand, BoardQuery, BoardRepository, BoardRepositoryError, TaskRepository,
    TaskRepositoryError,
};
use crate::domain::{Board, BoardDraft, BoardId, Error, Task, TaskDraft};

fn board_not_found(id: BoardId) -> Error {
    Error::not_found(format!("No kanban found with id: {id}"))
}

fn board_title_not_found(title: &str) -> Error {
    Error::not_found(format!("No kanban found with a title: {title}"))
}

fn map_board_repository_error(error: BoardRepositoryError) -> Error {
    Error::internal(format!("board repository error: {error}"))
}

fn map_task_repository_error(error: TaskRepositoryError) -> Error {
    Error::internal(format!("task repository error: {error}"))
}

/// Board service implementing [`BoardCommand`] and [`BoardQuery`].
///
/// Repositories are injected at construction; the service holds no other
/// state.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use kanban_backend::domain::BoardService;
/// use kanban_backend::outbound::memory::InMemoryKanbanStore;
///
/// let store = Arc::new(InMemoryKanbanStore::new());
/// let _service = BoardService::new(store.clone(), store);
/// ```
#[derive(Clone)]
pub struct BoardService<B, T> {
    boards: Arc<B>,
    tasks: Arc<T>,
}

impl<B, T> BoardService<B, T> {
    /// Create a service over the given repositories.
    pub fn new(boards: Arc<B>, tasks: Arc<T>) -> Self {
        Self { boards, tasks }
    }
}

impl<B, T> BoardService<B, T>
where
    B: BoardRepository,
{
    async fn require_board(&self, id: BoardId) -> Result<Board, Error> {
        self.boards
            .find_by_id(id)
            .await
            .map_err(map_board_repository_error)?
            .ok_or_else(|| board_not_found(id))
    }
}

#[async_trait]
impl<B, T> BoardQuery for BoardService<B, T>
where
    B: BoardRepository,
    T: TaskRepository,
{
    async fn list_boards(&self) -> Result<Vec<Board>, Error> {
        self.boards.list().await.map_err(map_board_repository_error)
    }

    async fn get_board(&self, id: BoardId) -> Result<Board, Error> {
        self.require_board(id).await
    }

    async fn find_board_by_title(&self, title: &str) -> Result<Board, Error> {
        self.boards
            .find_first_by_title(title)
            .await
            .map_err(map_board_repository_error)?
            .ok_or_else(|| board_title_not_found(title))
    }

    async fn list_tasks(&self, board_id: BoardId) -> Result<Vec<Task>, Error> {
        Ok(self.require_board(board_id).await?.into_tasks())
    }
}

#[async_trait]
impl<B, T> BoardCommand for BoardService<B, T>
where
    B: BoardRepository,
    T: TaskRepository,
{
    async fn create_board(&self, draft: BoardDraft) -> Result<Board, Error> {
        self.boards
            .insert(&draft)
            .await
            .map_err(map_board_repository_error)
    }

    async fn update_board(&self, id: BoardId, title: String) -> Result<Board, Error> {
        let existing = self.require_board(id).await?;
        self.boards
            .update_title(existing.id(), &title)
            .await
            .map_err(map_board_repository_error)?
            .ok_or_else(|| board_not_found(id))
    }

    async fn delete_board(&self, id: BoardId) -> Result<(), Error> {
        let existing = self.require_board(id).await?;
        let removed = self
            .boards
            .delete(existing.id())
            .await
            .map_err(map_board_repository_error)?;
        if !removed {
            debug!(board_id = %id, "board disappeared before delete");
        }
        Ok(())
    }

    async fn create_task(&self, board_id: BoardId, draft: TaskDraft) -> Result<Board, Error> {
        // A missing board is reported as an internal failure, not a 404.
        let mut board = self
            .boards
            .find_by_id(board_id)
            .await
            .map_err(map_board_repository_error)?
            .ok_or_else(|| {
                error!(board_id = %board_id, "task creation targeted a missing board");
                Error::internal(format!("board {board_id} missing during task creation"))
            })?;

        let task = self
            .tasks
            .insert(board.id(), &draft)
            .await
            .map_err(map_task_repository_error)?;
        board
            .push_task(task)
            .map_err(|err| Error::internal(err.to_string()))?;
        Ok(board)
    }
}

#[cfg(test)]
#[path = "board_service_tests.rs"]
mod tests;

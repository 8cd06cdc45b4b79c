//! In-memory board and task store.
//!
//! Used when no database is configured and by the HTTP and behaviour tests.
//! One store implements both repository ports so boards and their tasks share
//! a single lock and identifier sequence per entity.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{
    BoardRepository, BoardRepositoryError, TaskRepository, TaskRepositoryError,
};
use crate::domain::{Board, BoardDraft, BoardId, Task, TaskDraft, TaskId};

/// Thread-safe in-memory board store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKanbanStore {
    state: Arc<RwLock<StoreState>>,
}

#[derive(Debug, Default)]
struct StoreState {
    boards: BTreeMap<BoardId, String>,
    tasks: BTreeMap<TaskId, Task>,
    last_board_id: i64,
    last_task_id: i64,
}

impl StoreState {
    fn assemble(&self, id: BoardId) -> Result<Option<Board>, BoardRepositoryError> {
        let Some(title) = self.boards.get(&id) else {
            return Ok(None);
        };
        let tasks = self
            .tasks
            .values()
            .filter(|task| task.board_id() == id)
            .cloned()
            .collect();
        Board::new(id, title.clone(), tasks)
            .map(Some)
            .map_err(|err| BoardRepositoryError::query(err.to_string()))
    }
}

impl InMemoryKanbanStore {
    /// Creates an empty store. The first board and first task both get id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn board_lock_error(err: impl std::fmt::Display) -> BoardRepositoryError {
    BoardRepositoryError::connection(format!("store lock poisoned: {err}"))
}

fn task_lock_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::connection(format!("store lock poisoned: {err}"))
}

#[async_trait]
impl BoardRepository for InMemoryKanbanStore {
    async fn list(&self) -> Result<Vec<Board>, BoardRepositoryError> {
        let state = self.state.read().map_err(board_lock_error)?;
        let mut boards = Vec::with_capacity(state.boards.len());
        for id in state.boards.keys() {
            if let Some(board) = state.assemble(*id)? {
                boards.push(board);
            }
        }
        Ok(boards)
    }

    async fn find_by_id(&self, id: BoardId) -> Result<Option<Board>, BoardRepositoryError> {
        let state = self.state.read().map_err(board_lock_error)?;
        state.assemble(id)
    }

    async fn find_first_by_title(
        &self,
        title: &str,
    ) -> Result<Option<Board>, BoardRepositoryError> {
        let state = self.state.read().map_err(board_lock_error)?;
        let found = state
            .boards
            .iter()
            .find(|(_, stored)| stored.as_str() == title)
            .map(|(id, _)| *id);
        match found {
            Some(id) => state.assemble(id),
            None => Ok(None),
        }
    }

    async fn insert(&self, draft: &BoardDraft) -> Result<Board, BoardRepositoryError> {
        let mut state = self.state.write().map_err(board_lock_error)?;
        state.last_board_id += 1;
        let id = BoardId::new(state.last_board_id);
        state.boards.insert(id, draft.title().to_owned());
        Board::new(id, draft.title(), Vec::new())
            .map_err(|err| BoardRepositoryError::query(err.to_string()))
    }

    async fn update_title(
        &self,
        id: BoardId,
        title: &str,
    ) -> Result<Option<Board>, BoardRepositoryError> {
        let mut state = self.state.write().map_err(board_lock_error)?;
        let Some(stored) = state.boards.get_mut(&id) else {
            return Ok(None);
        };
        title.clone_into(stored);
        state.assemble(id)
    }

    async fn delete(&self, id: BoardId) -> Result<bool, BoardRepositoryError> {
        let mut state = self.state.write().map_err(board_lock_error)?;
        if state.boards.remove(&id).is_none() {
            return Ok(false);
        }
        state.tasks.retain(|_, task| task.board_id() != id);
        Ok(true)
    }
}

#[async_trait]
impl TaskRepository for InMemoryKanbanStore {
    async fn insert(
        &self,
        board_id: BoardId,
        draft: &TaskDraft,
    ) -> Result<Task, TaskRepositoryError> {
        let mut state = self.state.write().map_err(task_lock_error)?;
        if !state.boards.contains_key(&board_id) {
            return Err(TaskRepositoryError::query(format!(
                "board {board_id} does not exist"
            )));
        }
        state.last_task_id += 1;
        let task = Task::new(TaskId::new(state.last_task_id), board_id, draft.clone());
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }
}

//! PostgreSQL-backed `TaskRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TaskRepository, TaskRepositoryError};
use crate::domain::{BoardId, Task, TaskDraft};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewTaskRow, TaskRow};
use super::pool::{DbPool, PoolError};
use super::rows::row_to_task;
use super::schema::tasks;

/// Diesel-backed implementation of the `TaskRepository` port.
#[derive(Clone)]
pub struct DieselTaskRepository {
    pool: DbPool,
}

impl DieselTaskRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_task_pool_error(error: PoolError) -> TaskRepositoryError {
    map_pool_error(error, TaskRepositoryError::connection)
}

fn map_task_diesel_error(error: diesel::result::Error) -> TaskRepositoryError {
    map_diesel_error(
        error,
        TaskRepositoryError::query,
        TaskRepositoryError::connection,
    )
}

fn new_row(board_id: BoardId, draft: &TaskDraft) -> NewTaskRow<'_> {
    NewTaskRow {
        kanban_id: board_id.get(),
        title: &draft.title,
        description: draft.description.as_deref(),
        color: draft.color.as_deref(),
        status: draft.status.as_str(),
    }
}

#[async_trait]
impl TaskRepository for DieselTaskRepository {
    async fn insert(
        &self,
        board_id: BoardId,
        draft: &TaskDraft,
    ) -> Result<Task, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_task_pool_error)?;

        let row = diesel::insert_into(tasks::table)
            .values(&new_row(board_id, draft))
            .returning(TaskRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_task_diesel_error)?;

        Ok(row_to_task(row))
    }
}

//! PostgreSQL-backed `BoardRepository` implementation using Diesel ORM.
//!
//! Boards are read together with their tasks: one query for the board rows
//! and one `belonging_to` query for every task they own, ordered by id.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{BoardRepository, BoardRepositoryError};
use crate::domain::{Board, BoardDraft, BoardId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{KanbanRow, NewKanbanRow, TaskRow};
use super::pool::{DbPool, PoolError};
use super::rows::rows_to_board;
use super::schema::{kanbans, tasks};

/// Diesel-backed implementation of the `BoardRepository` port.
#[derive(Clone)]
pub struct DieselBoardRepository {
    pool: DbPool,
}

impl DieselBoardRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_board_pool_error(error: PoolError) -> BoardRepositoryError {
    map_pool_error(error, BoardRepositoryError::connection)
}

fn map_board_diesel_error(error: diesel::result::Error) -> BoardRepositoryError {
    map_diesel_error(
        error,
        BoardRepositoryError::query,
        BoardRepositoryError::connection,
    )
}

fn assemble(row: KanbanRow, task_rows: Vec<TaskRow>) -> Result<Board, BoardRepositoryError> {
    rows_to_board(row, task_rows).map_err(|err| BoardRepositoryError::query(err.to_string()))
}

/// Load the tasks of one board and assemble it.
async fn with_tasks(
    conn: &mut AsyncPgConnection,
    row: KanbanRow,
) -> Result<Board, BoardRepositoryError> {
    let task_rows = TaskRow::belonging_to(&row)
        .order(tasks::id.asc())
        .select(TaskRow::as_select())
        .load(conn)
        .await
        .map_err(map_board_diesel_error)?;
    assemble(row, task_rows)
}

async fn with_optional_tasks(
    conn: &mut AsyncPgConnection,
    row: Option<KanbanRow>,
) -> Result<Option<Board>, BoardRepositoryError> {
    match row {
        Some(row) => with_tasks(conn, row).await.map(Some),
        None => Ok(None),
    }
}

#[async_trait]
impl BoardRepository for DieselBoardRepository {
    async fn list(&self) -> Result<Vec<Board>, BoardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_board_pool_error)?;

        let rows: Vec<KanbanRow> = kanbans::table
            .order(kanbans::id.asc())
            .select(KanbanRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_board_diesel_error)?;

        let task_rows: Vec<TaskRow> = TaskRow::belonging_to(&rows)
            .order(tasks::id.asc())
            .select(TaskRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_board_diesel_error)?;

        let grouped = task_rows.grouped_by(&rows);
        rows.into_iter()
            .zip(grouped)
            .map(|(row, task_rows)| assemble(row, task_rows))
            .collect()
    }

    async fn find_by_id(&self, id: BoardId) -> Result<Option<Board>, BoardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_board_pool_error)?;

        let row = kanbans::table
            .find(id.get())
            .select(KanbanRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_board_diesel_error)?;

        with_optional_tasks(&mut conn, row).await
    }

    async fn find_first_by_title(
        &self,
        title: &str,
    ) -> Result<Option<Board>, BoardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_board_pool_error)?;

        let row = kanbans::table
            .filter(kanbans::title.eq(title))
            .order(kanbans::id.asc())
            .select(KanbanRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_board_diesel_error)?;

        with_optional_tasks(&mut conn, row).await
    }

    async fn insert(&self, draft: &BoardDraft) -> Result<Board, BoardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_board_pool_error)?;

        let row = diesel::insert_into(kanbans::table)
            .values(&NewKanbanRow {
                title: draft.title(),
            })
            .returning(KanbanRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_board_diesel_error)?;

        assemble(row, Vec::new())
    }

    async fn update_title(
        &self,
        id: BoardId,
        title: &str,
    ) -> Result<Option<Board>, BoardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_board_pool_error)?;

        let row = diesel::update(kanbans::table.find(id.get()))
            .set(kanbans::title.eq(title))
            .returning(KanbanRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_board_diesel_error)?;

        with_optional_tasks(&mut conn, row).await
    }

    async fn delete(&self, id: BoardId) -> Result<bool, BoardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_board_pool_error)?;

        // Tasks are removed by the ON DELETE CASCADE constraint.
        let removed = diesel::delete(kanbans::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_board_diesel_error)?;

        Ok(removed > 0)
    }
}

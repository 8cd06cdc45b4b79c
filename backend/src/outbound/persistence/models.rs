//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! leave it; `rows.rs` converts them into domain entities.

use diesel::prelude::*;

use super::schema::{kanbans, tasks};

/// Row struct for reading from the kanbans table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = kanbans)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct KanbanRow {
    pub id: i64,
    pub title: String,
}

/// Insertable struct for creating boards.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = kanbans)]
pub(crate) struct NewKanbanRow<'a> {
    pub title: &'a str,
}

/// Row struct for reading from the tasks table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(belongs_to(KanbanRow, foreign_key = kanban_id))]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TaskRow {
    pub id: i64,
    pub kanban_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub status: String,
}

/// Insertable struct for creating tasks under an existing board.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub(crate) struct NewTaskRow<'a> {
    pub kanban_id: i64,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub color: Option<&'a str>,
    pub status: &'a str,
}

//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Kanban boards.
    kanbans (id) {
        /// Primary key assigned by a `BIGSERIAL` sequence.
        id -> Int8,
        title -> Text,
    }
}

diesel::table! {
    /// Tasks owned by a board. Rows are removed with their board via
    /// `ON DELETE CASCADE`.
    tasks (id) {
        /// Primary key assigned by a `BIGSERIAL` sequence.
        id -> Int8,
        /// Owning board.
        kanban_id -> Int8,
        title -> Text,
        description -> Nullable<Text>,
        color -> Nullable<Text>,
        /// One of `TODO`, `INPROGRESS` or `DONE`.
        status -> Text,
    }
}

diesel::joinable!(tasks -> kanbans (kanban_id));

diesel::allow_tables_to_appear_in_same_query!(kanbans, tasks);

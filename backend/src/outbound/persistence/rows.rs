//! Conversion from Diesel rows to domain entities.

use tracing::warn;

use crate::domain::{Board, BoardId, BoardValidationError, Task, TaskDraft, TaskId, TaskStatus};

use super::models::{KanbanRow, TaskRow};

/// Convert a task row, defaulting unknown status labels to `TODO`.
pub(super) fn row_to_task(row: TaskRow) -> Task {
    let status = row.status.parse::<TaskStatus>().unwrap_or_else(|err| {
        warn!(task_id = row.id, %err, "unrecognised task status, defaulting to TODO");
        TaskStatus::Todo
    });
    Task::new(
        TaskId::new(row.id),
        BoardId::new(row.kanban_id),
        TaskDraft {
            title: row.title,
            description: row.description,
            color: row.color,
            status,
        },
    )
}

/// Assemble a board from its row and the rows of the tasks it owns.
pub(super) fn rows_to_board(
    row: KanbanRow,
    task_rows: Vec<TaskRow>,
) -> Result<Board, BoardValidationError> {
    let tasks = task_rows.into_iter().map(row_to_task).collect();
    Board::new(BoardId::new(row.id), row.title, tasks)
}

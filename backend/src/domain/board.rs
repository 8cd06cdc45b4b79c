//! Board aggregate.
//!
//! A board owns its tasks exclusively. The aggregate rejects tasks whose
//! owner is a different board so adapters cannot assemble a board from the
//! wrong rows.

use std::fmt;

use super::{Task, TaskId};

/// Store-assigned board identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardId(i64);

impl BoardId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validation errors raised while assembling a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardValidationError {
    /// A task owned by another board was attached.
    #[error("task {task} belongs to board {owner}, not board {board}")]
    ForeignTask {
        task: TaskId,
        owner: BoardId,
        board: BoardId,
    },
}

/// Caller-supplied board fields. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDraft {
    title: String,
}

impl BoardDraft {
    /// Create a draft with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A Kanban board and the tasks it owns.
///
/// Tasks keep the order they were supplied in; adapters load them by
/// ascending task id.
///
/// # Examples
/// ```
/// use kanban_backend::domain::{Board, BoardId};
///
/// let board = Board::new(BoardId::new(1), "Sprint 1", Vec::new()).expect("valid board");
/// assert_eq!(board.title(), "Sprint 1");
/// assert!(board.tasks().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    id: BoardId,
    title: String,
    tasks: Vec<Task>,
}

impl Board {
    /// Assemble a board from stored parts.
    ///
    /// # Errors
    /// Returns [`BoardValidationError::ForeignTask`] when any task is owned by
    /// another board.
    pub fn new(
        id: BoardId,
        title: impl Into<String>,
        tasks: Vec<Task>,
    ) -> Result<Self, BoardValidationError> {
        for task in &tasks {
            ensure_owned(id, task)?;
        }
        Ok(Self {
            id,
            title: title.into(),
            tasks,
        })
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Consume the board, returning its tasks.
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Append a newly stored task.
    ///
    /// # Errors
    /// Returns [`BoardValidationError::ForeignTask`] when the task is owned by
    /// another board.
    pub fn push_task(&mut self, task: Task) -> Result<(), BoardValidationError> {
        ensure_owned(self.id, &task)?;
        self.tasks.push(task);
        Ok(())
    }
}

fn ensure_owned(board: BoardId, task: &Task) -> Result<(), BoardValidationError> {
    if task.board_id() == board {
        Ok(())
    } else {
        Err(BoardValidationError::ForeignTask {
            task: task.id(),
            owner: task.board_id(),
            board,
        })
    }
}

//! Tasks owned by a board.

use std::fmt;
use std::str::FromStr;

use super::BoardId;

/// Store-assigned task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(i64);

impl TaskId {
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

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Progress label attached to a task.
///
/// The label is opaque to this service: any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    /// Not started.
    #[default]
    Todo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// Wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "INPROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a status label is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(Self::Todo),
            "INPROGRESS" | "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            other => Err(ParseTaskStatusError(other.to_owned())),
        }
    }
}

/// Caller-supplied task fields. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub status: TaskStatus,
}

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    board_id: BoardId,
    title: String,
    description: Option<String>,
    color: Option<String>,
    status: TaskStatus,
}

impl Task {
    /// Build a task from its store-assigned id, owner and fields.
    #[must_use]
    pub fn new(id: TaskId, board_id: BoardId, draft: TaskDraft) -> Self {
        let TaskDraft {
            title,
            description,
            color,
            status,
        } = draft;
        Self {
            id,
            board_id,
            title,
            description,
            color,
            status,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Owning board. Lookup only; never serialised to clients.
    pub fn board_id(&self) -> BoardId {
        self.board_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }
}

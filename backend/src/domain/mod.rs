//! Domain primitives, aggregates and services.
//!
//! Purpose: define the Kanban board model used by the HTTP and persistence
//! adapters without depending on either of them. Entities are constructed
//! through validated constructors and expose read-only accessors.
//!
//! Public surface:
//! - `Board`, `BoardId`, `BoardDraft`: a board and the tasks it owns.
//! - `Task`, `TaskId`, `TaskDraft`, `TaskStatus`: units of work on a board.
//! - `Error`, `ErrorCode`: transport-agnostic failure payload.
//! - `TraceId`: request-scoped correlation identifier.
//! - `BoardService`: implementation of the board driving ports.

pub mod board;
pub mod board_service;
pub mod error;
pub mod ports;
pub mod task;
pub mod trace_id;

pub use self::board::{Board, BoardDraft, BoardId, BoardValidationError};
pub use self::board_service::BoardService;
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::task::{ParseTaskStatusError, Task, TaskDraft, TaskId, TaskStatus};
pub use self::trace_id::TraceId;

//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`BoardCommand`, `BoardQuery`) are called by inbound
//! adapters. Driven ports (`BoardRepository`, `TaskRepository`) are
//! implemented by outbound adapters and report failures through strongly
//! typed error enums.

mod macros;
pub(crate) use macros::define_port_error;

mod board_command;
mod board_query;
mod board_repository;
mod task_repository;

#[cfg(test)]
pub use board_command::MockBoardCommand;
pub use board_command::BoardCommand;
#[cfg(test)]
pub use board_query::MockBoardQuery;
pub use board_query::BoardQuery;
#[cfg(test)]
pub use board_repository::MockBoardRepository;
pub use board_repository::{BoardRepository, BoardRepositoryError};
#[cfg(test)]
pub use task_repository::MockTaskRepository;
pub use task_repository::{TaskRepository, TaskRepositoryError};

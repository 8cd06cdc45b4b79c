//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin translators between Diesel rows and domain entities.
//! Connections come from a `bb8` pool of `diesel-async` connections, and every
//! database failure is mapped onto the port's connection or query error.
//!
//! # Example
//!
//! ```no_run
//! use kanban_backend::outbound::persistence::{
//!     DbPool, DieselBoardRepository, DieselTaskRepository, PoolConfig,
//! };
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/kanban")).await?;
//! let boards = DieselBoardRepository::new(pool.clone());
//! let tasks = DieselTaskRepository::new(pool);
//! # let _ = (boards, tasks);
//! # Ok(())
//! # }
//! ```

mod diesel_board_repository;
mod diesel_task_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod rows;
mod schema;

pub use diesel_board_repository::DieselBoardRepository;
pub use diesel_task_repository::DieselTaskRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

//! Builder for the HTTP state from the configured store.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use kanban_backend::domain::BoardService;
use kanban_backend::domain::ports::{BoardRepository, TaskRepository};
use kanban_backend::inbound::http::state::HttpState;
use kanban_backend::outbound::memory::InMemoryKanbanStore;
use kanban_backend::outbound::persistence::{DbPool, DieselBoardRepository, DieselTaskRepository};

fn state_from_repositories<B, T>(boards: Arc<B>, tasks: Arc<T>) -> web::Data<HttpState>
where
    B: BoardRepository + 'static,
    T: TaskRepository + 'static,
{
    web::Data::new(HttpState::from_service(Arc::new(BoardService::new(
        boards, tasks,
    ))))
}

/// Build handler state over PostgreSQL when a pool exists, otherwise over a
/// fresh in-memory store.
pub(crate) fn build_http_state(db_pool: Option<&DbPool>) -> web::Data<HttpState> {
    match db_pool {
        Some(pool) => {
            info!("serving boards from PostgreSQL");
            state_from_repositories(
                Arc::new(DieselBoardRepository::new(pool.clone())),
                Arc::new(DieselTaskRepository::new(pool.clone())),
            )
        }
        None => {
            warn!("no database configured; boards are kept in memory and lost on restart");
            let store = Arc::new(InMemoryKanbanStore::new());
            state_from_repositories(store.clone(), store)
        }
    }
}

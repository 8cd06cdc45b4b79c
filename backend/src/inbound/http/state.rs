//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they only depend on
//! the board driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BoardCommand, BoardQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub boards: Arc<dyn BoardCommand>,
    pub boards_query: Arc<dyn BoardQuery>,
}

impl HttpState {
    /// Construct state from separate command and query ports.
    pub fn new(boards: Arc<dyn BoardCommand>, boards_query: Arc<dyn BoardQuery>) -> Self {
        Self {
            boards,
            boards_query,
        }
    }

    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use kanban_backend::domain::BoardService;
    /// use kanban_backend::inbound::http::state::HttpState;
    /// use kanban_backend::outbound::memory::InMemoryKanbanStore;
    ///
    /// let store = Arc::new(InMemoryKanbanStore::new());
    /// let state = HttpState::from_service(Arc::new(BoardService::new(store.clone(), store)));
    /// let _query = state.boards_query.clone();
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: BoardCommand + BoardQuery + 'static,
    {
        Self::new(service.clone(), service)
    }
}

use sqlx::PgPool;

use crate::repository::AgentRepository;

/// Central application state. Clone-friendly — the repository holds a
/// `PgPool`, which is an `Arc` internally.
#[derive(Clone)]
pub struct AppState {
    pub repository: AgentRepository,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AgentRepository::new(pool),
        }
    }
}

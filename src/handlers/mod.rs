// ---------------------------------------------------------------------------
// handlers/ — HTTP layer, split by concern
// mod.rs re-exports all public items so lib.rs routes read as
// `handlers::create_agent` etc.
// ---------------------------------------------------------------------------

// Sub-modules are pub(crate) so utoipa __path_* types are accessible from lib.rs OpenApi derive.
pub(crate) mod agents;
pub(crate) mod system;

pub use agents::{create_agent, list_agents, search_agents};
pub use system::{health, route_not_found};

// ── utoipa __path_* re-exports ───────────────────────────────────────────────
// The #[utoipa::path] attribute macro generates private structs like __path_health.
// The OpenApi derive in lib.rs expects them at `handlers::__path_health`, so we
// re-export them here.
pub use agents::{__path_create_agent, __path_list_agents, __path_search_agents};
pub use system::__path_health;

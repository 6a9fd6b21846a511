pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod state;
pub mod validation;

use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// OpenAPI document served by Swagger UI at `/api-docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Real Estate Agent API",
        description = "REST API for the real estate agent directory"
    ),
    paths(
        handlers::health,
        handlers::list_agents,
        handlers::create_agent,
        handlers::search_agents,
    ),
    components(schemas(models::Agent, models::NewAgent, validation::FieldError))
)]
pub struct ApiDoc;

/// Build the application router with the given state.
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a network port.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health))
        // Agents
        .route("/agents", get(handlers::list_agents).post(handlers::create_agent))
        .route("/agents/search", get(handlers::search_agents))
        // Interactive API docs
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Anything else is a 404 echoing the method and path, wrong-method
        // requests to known paths included
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::route_not_found)
        .with_state(state)
}

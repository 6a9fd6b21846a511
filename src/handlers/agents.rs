// ---------------------------------------------------------------------------
// handlers/agents.rs — agent directory endpoints
// ---------------------------------------------------------------------------

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::SearchParams;
use crate::state::AppState;
use crate::validation::{self, FieldError};

#[utoipa::path(post, path = "/agents", tag = "agents",
    request_body = Value,
    responses(
        (status = 201, description = "Agent created", body = Value),
        (status = 400, description = "Validation failed", body = Value)
    )
)]
pub async fn create_agent(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // A body that never parsed reports like any other invalid field.
    let Json(body) =
        body.map_err(|rejection| vec![FieldError::new("body", rejection.body_text())])?;
    let agent = validation::validate_create(&body)?;
    let created = state.repository.create(&agent).await?;

    tracing::info!(id = created.id, name = %created.name, "agent created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": created,
            "message": "Agent created successfully",
        })),
    ))
}

#[utoipa::path(get, path = "/agents", tag = "agents",
    responses((status = 200, description = "All agents, newest first", body = Value))
)]
pub async fn list_agents(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let agents = state.repository.list_all().await?;
    let count = agents.len();
    Ok(Json(json!({ "success": true, "data": agents, "count": count })))
}

#[utoipa::path(get, path = "/agents/search", tag = "agents",
    params(SearchParams),
    responses(
        (status = 200, description = "Agents matching every given filter", body = Value),
        (status = 400, description = "Validation failed", body = Value)
    )
)]
pub async fn search_agents(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(params) =
        params.map_err(|rejection| vec![FieldError::new("query", rejection.body_text())])?;
    let filters = validation::validate_search(&params)?;
    let agents = state.repository.search(&filters).await?;
    let count = agents.len();
    Ok(Json(json!({
        "success": true,
        "data": agents,
        "count": count,
        "filters": filters,
    })))
}

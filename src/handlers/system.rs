// ---------------------------------------------------------------------------
// handlers/system.rs — health probe and the unmatched-route fallback
// ---------------------------------------------------------------------------

use axum::http::{Method, Uri};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::error::ApiError;

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "Service liveness probe", body = Value))
)]
pub async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Server is running",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// Fallback for requests no route matched: 404 echoing the method and path.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

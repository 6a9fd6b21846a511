// ---------------------------------------------------------------------------
// error.rs — the API error taxonomy and its HTTP mapping
// ---------------------------------------------------------------------------
//
// Handlers return `Result<_, ApiError>`; every failure funnels through
// `IntoResponse` here, so the envelope shape `{ "success": false,
// "error": <category>, "message": <detail> }` is uniform across the
// service. Database constraint violations are classified by `ErrorKind`,
// not by matching Postgres SQLSTATE strings.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::config;
use crate::validation::FieldError;

/// The Display string of each variant is the client-facing `message`;
/// `title()` supplies the `error` category field.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation Error")]
    Validation(Vec<FieldError>),
    #[error("A record with this information already exists")]
    Duplicate,
    #[error("Referenced record does not exist")]
    InvalidReference,
    #[error("A required field is missing")]
    MissingField,
    #[error("{0} not found")]
    NotFound(String),
    #[error("Cannot {method} {path}")]
    RouteNotFound { method: String, path: String },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidReference | ApiError::MissingField => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Duplicate => StatusCode::CONFLICT,
            ApiError::NotFound(_) | ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Validation Error",
            ApiError::Duplicate => "Duplicate Entry",
            ApiError::InvalidReference => "Invalid Reference",
            ApiError::MissingField => "Missing Required Field",
            ApiError::NotFound(_) | ApiError::RouteNotFound { .. } => "Not Found",
            ApiError::Internal(_) => "Internal Server Error",
        }
    }

    /// Response body. `development` controls whether the underlying cause
    /// of a 500 is exposed to the client.
    pub fn body(&self, development: bool) -> Value {
        match self {
            ApiError::Validation(details) => json!({
                "success": false,
                "error": self.title(),
                "details": details,
            }),
            ApiError::Internal(cause) => json!({
                "success": false,
                "error": self.title(),
                "message": if development {
                    cause.to_string()
                } else {
                    "An unexpected error occurred".to_string()
                },
            }),
            other => json!({
                "success": false,
                "error": other.title(),
                "message": other.to_string(),
            }),
        }
    }
}

impl From<Vec<FieldError>> for ApiError {
    fn from(details: Vec<FieldError>) -> Self {
        ApiError::Validation(details)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation => return ApiError::Duplicate,
                ErrorKind::ForeignKeyViolation => return ApiError::InvalidReference,
                ErrorKind::NotNullViolation => return ApiError::MissingField,
                _ => {}
            }
        }
        ApiError::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log full detail server-side; the client body stays sanitized.
        tracing::error!(error = ?self, "API error ({}): {}", status.as_u16(), self);

        let body = self.body(config::development_mode());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FakeDbError(ErrorKind);

    impl std::fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "constraint violated")
        }
    }

    impl std::error::Error for FakeDbError {}

    impl sqlx::error::DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "constraint violated"
        }

        // ErrorKind is neither Copy nor Clone; rebuild the stored variant.
        fn kind(&self) -> ErrorKind {
            match self.0 {
                ErrorKind::UniqueViolation => ErrorKind::UniqueViolation,
                ErrorKind::ForeignKeyViolation => ErrorKind::ForeignKeyViolation,
                ErrorKind::NotNullViolation => ErrorKind::NotNullViolation,
                _ => ErrorKind::Other,
            }
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
    }

    fn db_error(kind: ErrorKind) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError(kind)))
    }

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err = ApiError::from(db_error(ErrorKind::UniqueViolation));
        assert!(matches!(err, ApiError::Duplicate));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let body = err.body(false);
        assert_eq!(body["error"], "Duplicate Entry");
        assert_eq!(body["message"], "A record with this information already exists");
    }

    #[test]
    fn foreign_key_violation_maps_to_bad_request() {
        let err = ApiError::from(db_error(ErrorKind::ForeignKeyViolation));
        assert!(matches!(err, ApiError::InvalidReference));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = err.body(false);
        assert_eq!(body["error"], "Invalid Reference");
        assert_eq!(body["message"], "Referenced record does not exist");
    }

    #[test]
    fn not_null_violation_maps_to_bad_request() {
        let err = ApiError::from(db_error(ErrorKind::NotNullViolation));
        assert!(matches!(err, ApiError::MissingField));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = err.body(false);
        assert_eq!(body["error"], "Missing Required Field");
        assert_eq!(body["message"], "A required field is missing");
    }

    #[test]
    fn unclassified_database_errors_map_to_internal() {
        let err = ApiError::from(db_error(ErrorKind::Other));
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_database_errors_map_to_internal() {
        let err = ApiError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_body_lists_every_violation() {
        let err = ApiError::from(vec![
            FieldError::new("name", "Name is required"),
            FieldError::new("photo_url", "Invalid photo URL"),
        ]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = err.body(false);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Validation Error");
        assert_eq!(body["details"][0]["field"], "name");
        assert_eq!(body["details"][0]["message"], "Name is required");
        assert_eq!(body["details"][1]["field"], "photo_url");
        assert!(body.get("message").is_none(), "validation carries details, not a message");
    }

    #[test]
    fn unmatched_route_echoes_method_and_path() {
        let err = ApiError::RouteNotFound {
            method: "PUT".to_string(),
            path: "/agents".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = err.body(false);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "Cannot PUT /agents");
    }

    #[test]
    fn missing_resource_names_the_resource() {
        let err = ApiError::NotFound("Agent".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = err.body(false);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "Agent not found");
    }

    #[test]
    fn internal_detail_only_exposed_in_development() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused"));

        let production = err.body(false);
        assert_eq!(production["error"], "Internal Server Error");
        assert_eq!(production["message"], "An unexpected error occurred");

        let development = err.body(true);
        assert_eq!(development["message"], "connection refused");
    }

    #[tokio::test]
    async fn into_response_preserves_status_and_envelope() {
        let response = ApiError::RouteNotFound {
            method: "GET".to_string(),
            path: "/nope".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "Cannot GET /nope");
    }
}

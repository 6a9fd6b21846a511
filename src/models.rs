use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ---------------------------------------------------------------------------
// Agent records
// ---------------------------------------------------------------------------

/// A stored agent row. `id` and `created_at` are assigned by the database on
/// insert; rows are immutable afterwards (the API has no update or delete).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Agent {
    pub id: i32,
    pub name: String,
    pub photo_url: Option<String>,
    pub specialization: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated create payload. Absent optionals are inserted as NULL, never
/// as empty strings.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NewAgent {
    pub name: String,
    pub photo_url: Option<String>,
    pub specialization: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Raw search query parameters, as they arrive on the wire.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Substring to match against agent names, case-insensitively. Required.
    pub name: Option<String>,
    /// Exact city filter, case-insensitive.
    pub location_city: Option<String>,
    /// Exact specialization filter, case-insensitive.
    pub specialization: Option<String>,
}

/// Normalized search criteria. Every field is optional at this level —
/// requiring `name` is the validation layer's rule, not the query builder's.
/// Serializes without absent fields so it can be echoed back as `filters`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

// ---------------------------------------------------------------------------
// validation.rs — declarative validation for untrusted request input
// ---------------------------------------------------------------------------
//
// Both validators either return a normalized record holding exactly the
// recognized fields, or fail with every violated constraint as a
// `(field, message)` pair — never just the first one. Types are checked,
// not coerced: a numeric `name` is a violation, not a cast.

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;
use utoipa::ToSchema;

use crate::models::{NewAgent, SearchFilters, SearchParams};

/// Length caps mirroring the agents schema.
const NAME_MAX: usize = 255;
const SPECIALIZATION_MAX: usize = 255;
const LOCATION_CITY_MAX: usize = 100;
const LOCATION_STATE_MAX: usize = 100;

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a create-agent request body.
///
/// `name` is required, non-empty and at most 255 characters. `photo_url`
/// must parse as a URL when given; an empty string means "no photo".
/// The remaining optionals are length-capped strings. Unrecognized fields
/// are dropped; empty optional strings normalize to absent.
pub fn validate_create(body: &Value) -> Result<NewAgent, Vec<FieldError>> {
    let Some(object) = body.as_object() else {
        return Err(vec![FieldError::new(
            "body",
            format!("Expected object, received {}", json_type_name(body)),
        )]);
    };

    let mut errors = Vec::new();

    let name = match object.get("name") {
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(FieldError::new("name", "Name is required"));
            None
        }
        Some(Value::String(s)) if s.chars().count() > NAME_MAX => {
            errors.push(FieldError::new(
                "name",
                format!("Must contain at most {NAME_MAX} characters"),
            ));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(FieldError::new(
                "name",
                format!("Expected string, received {}", json_type_name(other)),
            ));
            None
        }
        None => {
            errors.push(FieldError::new("name", "Name is required"));
            None
        }
    };

    let photo_url = match optional_string(object, "photo_url", None, &mut errors) {
        Some(raw) if Url::parse(&raw).is_err() => {
            errors.push(FieldError::new("photo_url", "Invalid photo URL"));
            None
        }
        other => other,
    };

    let specialization = optional_string(object, "specialization", Some(SPECIALIZATION_MAX), &mut errors);
    let location_city = optional_string(object, "location_city", Some(LOCATION_CITY_MAX), &mut errors);
    let location_state = optional_string(object, "location_state", Some(LOCATION_STATE_MAX), &mut errors);
    let description = optional_string(object, "description", None, &mut errors);

    match name {
        Some(name) if errors.is_empty() => Ok(NewAgent {
            name,
            photo_url,
            specialization,
            location_city,
            location_state,
            description,
        }),
        _ => Err(errors),
    }
}

/// Validate search criteria. Search is name-anchored: a missing or empty
/// `name` is rejected. The optional filters pass through when non-empty;
/// empty strings normalize to absent, so they impose no constraint.
pub fn validate_search(params: &SearchParams) -> Result<SearchFilters, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = match params.name.as_deref() {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => {
            errors.push(FieldError::new("name", "Name is required for search"));
            None
        }
    };

    match name {
        Some(name) => Ok(SearchFilters {
            name: Some(name),
            location_city: params.location_city.clone().filter(|s| !s.is_empty()),
            specialization: params.specialization.clone().filter(|s| !s.is_empty()),
        }),
        None => Err(errors),
    }
}

/// Read an optional string field. Absent fields and empty strings normalize
/// to `None`; a present non-string value (including null) is a violation.
fn optional_string(
    object: &Map<String, Value>,
    field: &'static str,
    max: Option<usize>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match object.get(field) {
        None => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => match max {
            Some(max) if s.chars().count() > max => {
                errors.push(FieldError::new(
                    field,
                    format!("Must contain at most {max} characters"),
                ));
                None
            }
            _ => Some(s.clone()),
        },
        Some(other) => {
            errors.push(FieldError::new(
                field,
                format!("Expected string, received {}", json_type_name(other)),
            ));
            None
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

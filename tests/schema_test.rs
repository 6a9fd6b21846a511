// Validates the generated OpenAPI schema served at /api-docs/openapi.json.

use utoipa::OpenApi;

#[test]
fn openapi_schema_is_valid_json() {
    let schema = serde_json::to_string_pretty(&agent_directory_backend::ApiDoc::openapi())
        .expect("OpenAPI schema should serialize to JSON");
    assert!(!schema.is_empty(), "Schema should not be empty");
}

#[test]
fn openapi_schema_contains_required_fields() {
    let schema = serde_json::to_string_pretty(&agent_directory_backend::ApiDoc::openapi())
        .expect("OpenAPI schema should serialize to JSON");
    assert!(schema.contains("openapi"), "Schema should contain 'openapi' version field");
    assert!(schema.contains("/health"), "Schema should document /health endpoint");
    assert!(schema.contains("Real Estate Agent API"), "Schema should contain project name");
}

#[test]
fn openapi_schema_documents_key_endpoints() {
    let doc = agent_directory_backend::ApiDoc::openapi();
    let value = serde_json::to_value(&doc).expect("Schema should convert to Value");
    let paths = value["paths"].as_object().expect("Schema should have paths");

    assert!(paths.contains_key("/agents"), "Schema should document /agents");
    assert!(paths.contains_key("/agents/search"), "Schema should document /agents/search");
    assert!(
        paths["/agents"].get("get").is_some() && paths["/agents"].get("post").is_some(),
        "/agents should document both GET and POST"
    );
}

#[test]
fn openapi_schema_parses_to_valid_structure() {
    let doc = agent_directory_backend::ApiDoc::openapi();
    let value = serde_json::to_value(&doc).expect("Schema should convert to Value");
    assert!(value.is_object(), "Schema root should be an object");
    assert!(value.get("info").is_some(), "Schema should have 'info' section");
    assert!(value.get("paths").is_some(), "Schema should have 'paths' section");
}

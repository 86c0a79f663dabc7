//! HTTP behavior of the API docs routes.

use pretty_assertions::assert_eq;
use rocket::http::{ContentType, Status};
use roster_config::{DocsConfig, RosterConfig};
use roster_store::UserStore;
use roster_test_utils::{seed_json, seeded_client, test_client};
use serde_json::Value;

/// The Swagger UI index is served from the docs path with a trailing slash.
#[test]
fn docs_index_served_at_default_path() {
    let client = seeded_client();
    let response = client.get("/apidocs/").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.content_type().map(|ct| ct.is_html()),
        Some(true)
    );
    let page = response.into_string().expect("html");
    assert!(page.contains("swagger-ui"));
}

/// The bare docs path redirects to the index.
#[test]
fn bare_docs_path_redirects_to_index() {
    let client = seeded_client();
    let response = client.get("/apidocs").dispatch();
    assert_eq!(response.status(), Status::PermanentRedirect);
    assert_eq!(response.headers().get_one("Location"), Some("/apidocs/"));
}

/// The UI initializer points at the spec path.
#[test]
fn swagger_initializer_points_at_spec_path() {
    let client = seeded_client();
    let response = client.get("/apidocs/swagger-initializer.js").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert!(response.into_string().expect("js").contains("/apispec_1.json"));
}

/// The spec document is JSON describing the user routes.
#[test]
fn spec_served_as_json() {
    let client = seeded_client();
    let response = client.get("/apispec_1.json").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    let spec = response.into_json::<Value>().expect("json");
    assert!(spec["openapi"].is_string());
    assert!(spec["paths"]["/users"]["get"].is_object());
    assert!(spec["paths"]["/users"]["post"].is_object());
    assert!(spec["paths"]["/users/{user_id}"]["get"].is_object());
    assert!(spec["components"]["schemas"]["User"].is_object());
}

/// Custom docs paths move both the UI and the spec.
#[test]
fn docs_paths_are_configurable() {
    let config = RosterConfig::builder()
        .docs(DocsConfig {
            enabled: true,
            path: "/docs".to_string(),
            spec_path: "/docs/openapi.json".to_string(),
        })
        .build();
    let client = test_client(&config, UserStore::seeded());

    assert_eq!(client.get("/docs/").dispatch().status(), Status::Ok);
    let initializer = client.get("/docs/swagger-initializer.js").dispatch();
    assert!(
        initializer
            .into_string()
            .expect("js")
            .contains("/docs/openapi.json")
    );
    let spec = client.get("/docs/openapi.json").dispatch();
    assert_eq!(spec.status(), Status::Ok);
    assert!(spec.into_json::<Value>().expect("json")["paths"].is_object());
    assert_eq!(client.get("/apidocs/").dispatch().status(), Status::NotFound);
    assert_eq!(client.get("/apispec_1.json").dispatch().status(), Status::NotFound);
}

/// Disabling docs removes them without touching the user routes.
#[test]
fn docs_can_be_disabled() {
    let config = RosterConfig::builder()
        .docs(DocsConfig {
            enabled: false,
            ..DocsConfig::default()
        })
        .build();
    let client = test_client(&config, UserStore::seeded());

    assert_eq!(client.get("/apidocs").dispatch().status(), Status::NotFound);
    assert_eq!(client.get("/apidocs/").dispatch().status(), Status::NotFound);
    assert_eq!(client.get("/apispec_1.json").dispatch().status(), Status::NotFound);
    let users = client.get("/users").dispatch();
    assert_eq!(users.status(), Status::Ok);
    assert_eq!(users.into_json::<Value>(), Some(seed_json()));
}

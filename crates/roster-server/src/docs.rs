//! Interactive API documentation.
//!
//! The OpenAPI document is derived from the `#[utoipa::path]` annotations on
//! the user routes. Swagger UI assets are embedded at build time, so the docs
//! page works offline. Neither touches the store.

use crate::routes;
use rocket::response::Redirect;
use rocket::{Route, State, get};
use roster_config::DocsConfig;
use roster_protocol::{ErrorBody, User, UserProfile, WelcomeMessage};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI description of the user routes.
#[derive(OpenApi)]
#[openapi(
    info(title = "Roster API", description = "In-memory user records."),
    paths(routes::home, routes::list_users, routes::get_user, routes::add_user),
    components(schemas(User, UserProfile, WelcomeMessage, ErrorBody)),
    tags(
        (name = "users", description = "User records"),
        (name = "meta", description = "Service information")
    )
)]
pub struct ApiDoc;

/// Where the docs page lives, kept as managed state for the redirect.
#[derive(Debug, Clone)]
pub struct ApiDocs {
    index_path: String,
}

impl ApiDocs {
    pub fn new(config: &DocsConfig) -> Self {
        Self {
            index_path: format!("{}/", config.path),
        }
    }

    /// Path of the Swagger UI index page (`docs.path` plus a trailing slash).
    pub fn index_path(&self) -> &str {
        &self.index_path
    }
}

/// Swagger UI assets under `docs.path/` and the OpenAPI document at
/// `docs.spec_path`; mount at `/`.
pub(crate) fn swagger_routes(config: &DocsConfig) -> Vec<Route> {
    SwaggerUi::new(format!("{}/<_..>", config.path))
        .url(config.spec_path.clone(), ApiDoc::openapi())
        .into()
}

/// Redirect from the bare docs path to the index page; mount at `docs.path`.
pub(crate) fn redirect_routes() -> Vec<Route> {
    rocket::routes![redirect_to_index]
}

#[get("/")]
fn redirect_to_index(docs: &State<ApiDocs>) -> Redirect {
    Redirect::permanent(docs.index_path().to_string())
}

//! JSON renderings of framework-level errors.

use log::debug;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Catcher, Request, catch, catchers};
use roster_protocol::ErrorBody;

pub(crate) fn json_catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

/// Renders any unhandled status as `{"error": "<reason>"}`.
#[catch(default)]
fn default_catcher(status: Status, req: &Request<'_>) -> (Status, Json<ErrorBody>) {
    debug!(
        "request failed (method={}, uri={}, status={})",
        req.method(),
        req.uri(),
        status.code
    );
    let reason = status.reason().unwrap_or("Unknown Error");
    (status, Json(ErrorBody::new(reason)))
}

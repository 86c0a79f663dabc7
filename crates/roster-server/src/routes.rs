//! User record routes.

use crate::error::ApiError;
use crate::params::UserIdSegment;
use log::info;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Route, State, get, post, routes};
use roster_protocol::{ErrorBody, NewUser, User, UserProfile, WelcomeMessage};
use roster_store::UserStore;

/// All user-facing routes, mounted at `/`.
pub(crate) fn user_routes() -> Vec<Route> {
    routes![
        home,
        favicon,
        list_users,
        get_user,
        user_path_not_found,
        add_user
    ]
}

/// Home route
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "Welcome message", body = WelcomeMessage))
)]
#[get("/")]
pub(crate) fn home() -> Json<WelcomeMessage> {
    Json(WelcomeMessage::default())
}

/// Answers browser favicon probes with an empty response.
#[get("/favicon.ico")]
fn favicon() -> Status {
    Status::NoContent
}

/// Get all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses((status = 200, description = "A list of users", body = Vec<User>))
)]
#[get("/users")]
pub(crate) fn list_users(store: &State<UserStore>) -> Json<Vec<User>> {
    Json(store.list())
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = u64, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
#[get("/users/<user_id>")]
pub(crate) fn get_user(
    user_id: UserIdSegment,
    store: &State<UserStore>,
) -> Result<Json<User>, ApiError> {
    match user_id {
        UserIdSegment::Id(id) => Ok(Json(store.get(id)?)),
        UserIdSegment::OutOfRange(raw) => Err(ApiError::IdOutOfRange(raw)),
    }
}

// Segments that are not all digits land here instead of `get_user`.
#[get("/users/<_>", rank = 2)]
fn user_path_not_found() -> Status {
    Status::NotFound
}

/// Add a new user
///
/// The body is stored as sent; any `id` it carries is replaced.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body(content = UserProfile, description = "User attributes"),
    responses((status = 201, description = "User added", body = User))
)]
#[post("/users", data = "<payload>")]
pub(crate) fn add_user(payload: Json<NewUser>, store: &State<UserStore>) -> (Status, Json<User>) {
    let user = store.add(payload.into_inner());
    info!("user created (id={})", user.id);
    (Status::Created, Json(user))
}

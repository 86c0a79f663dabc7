//! Error types for the HTTP layer.

use roster_config::ConfigError;
use roster_protocol::ErrorBody;
use roster_store::StoreError;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use thiserror::Error;

/// Errors returned while building or launching the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The supplied config failed validation.
    #[error("invalid server config: {0}")]
    Config(#[from] ConfigError),
    /// Rocket failed to ignite or bind.
    #[error("server failed to launch: {0}")]
    Launch(String),
}

/// Application errors rendered as JSON responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// An all-digit id too large to be any stored id.
    #[error("user not found (id={0})")]
    IdOutOfRange(String),
}

impl ApiError {
    fn status(&self) -> Status {
        match self {
            ApiError::Store(StoreError::NotFound(_)) | ApiError::IdOutOfRange(_) => {
                Status::NotFound
            }
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::Store(StoreError::NotFound(_)) | ApiError::IdOutOfRange(_) => {
                ErrorBody::user_not_found()
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        (self.status(), Json(self.body())).respond_to(req)
    }
}

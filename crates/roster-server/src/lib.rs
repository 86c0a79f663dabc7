//! HTTP surface for the Roster user store.
//!
//! Builds a Rocket instance exposing the user routes, JSON error catchers,
//! and the optional interactive API docs.

mod app;
mod catchers;
pub mod docs;
mod error;
mod params;
mod routes;

/// Rocket construction and launch helpers.
pub use app::{build_rocket, serve};
/// OpenAPI document and docs routing state.
pub use docs::{ApiDoc, ApiDocs};
/// Error types for request handling and startup.
pub use error::{ApiError, ServerError};

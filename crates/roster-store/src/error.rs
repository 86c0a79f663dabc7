//! Error types for store operations.

use roster_protocol::UserId;

/// Errors returned by `UserStore` lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record carries the requested id.
    #[error("user not found (id={0})")]
    NotFound(UserId),
}

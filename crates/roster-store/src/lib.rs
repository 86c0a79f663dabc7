//! In-memory user record store for Roster.

pub mod error;
pub mod seed;
pub mod store;

/// Store error type.
pub use error::StoreError;
/// Seed records loaded at startup.
pub use seed::seed_users;
/// Lock-guarded record store.
pub use store::UserStore;

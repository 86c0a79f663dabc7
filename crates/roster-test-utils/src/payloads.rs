//! Canned request and response bodies.

use roster_store::seed_users;
use serde_json::{Value, json};

/// A well-formed add-user body.
pub fn zed_payload() -> Value {
    json!({"name": "Zed", "age": 40, "email": "z@z.com", "country": "Nowhere"})
}

/// The seed records as the JSON array `GET /users` returns on a fresh store.
pub fn seed_json() -> Value {
    serde_json::to_value(seed_users()).expect("serialize seed users")
}

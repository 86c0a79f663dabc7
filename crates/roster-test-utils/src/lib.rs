//! Shared test helpers for Roster crates.

mod client;
mod payloads;

pub use client::{post_json, seeded_client, test_client};
pub use payloads::{seed_json, zed_payload};

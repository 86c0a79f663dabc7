//! Local Rocket clients backed by isolated stores.

use rocket::http::ContentType;
use rocket::local::blocking::{Client, LocalResponse};
use roster_config::RosterConfig;
use roster_server::build_rocket;
use roster_store::UserStore;
use serde_json::Value;

/// Client over a fresh seeded store and default config.
pub fn seeded_client() -> Client {
    test_client(&RosterConfig::default(), UserStore::seeded())
}

/// Client over the given config and store.
pub fn test_client(config: &RosterConfig, store: UserStore) -> Client {
    let rocket = build_rocket(config, store).expect("build rocket");
    Client::tracked(rocket).expect("valid rocket instance")
}

/// POST a JSON body.
pub fn post_json<'c>(client: &'c Client, uri: &'static str, body: &Value) -> LocalResponse<'c> {
    client
        .post(uri)
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch()
}

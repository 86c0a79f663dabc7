//! Rocket assembly and launch.

use crate::catchers::json_catchers;
use crate::docs::{self, ApiDocs};
use crate::error::ServerError;
use crate::routes::user_routes;
use log::info;
use rocket::{Build, Rocket};
use roster_config::RosterConfig;
use roster_store::UserStore;

/// Build a Rocket instance serving `store` with the given config.
///
/// The store is handed to Rocket as managed state; handlers never reach it
/// any other way.
pub fn build_rocket(config: &RosterConfig, store: UserStore) -> Result<Rocket<Build>, ServerError> {
    config.validate()?;
    let figment = rocket::Config::figment()
        .merge(("address", config.ip_addr()?))
        .merge(("port", config.server.port));

    let mut rocket = rocket::custom(figment)
        .manage(store)
        .mount("/", user_routes())
        .register("/", json_catchers());

    if config.docs.enabled {
        info!(
            "api docs enabled (path={}, spec_path={})",
            config.docs.path, config.docs.spec_path
        );
        rocket = rocket
            .manage(ApiDocs::new(&config.docs))
            .mount(config.docs.path.as_str(), docs::redirect_routes())
            .mount("/", docs::swagger_routes(&config.docs));
    }
    Ok(rocket)
}

/// Build and launch the server, returning when it shuts down.
pub async fn serve(config: &RosterConfig, store: UserStore) -> Result<(), ServerError> {
    let rocket = build_rocket(config, store)?;
    info!(
        "launching roster server (address={}, port={})",
        config.server.address, config.server.port
    );
    rocket
        .launch()
        .await
        .map_err(|err| ServerError::Launch(err.to_string()))?;
    info!("roster server stopped");
    Ok(())
}

//! Rocket construction checks.

use roster_config::RosterConfig;
use roster_server::{ServerError, build_rocket};
use roster_store::UserStore;
use std::net::IpAddr;

/// An invalid address is rejected before Rocket is built.
#[test]
fn build_rejects_invalid_config() {
    let config = RosterConfig::builder().address("not-an-ip").build();
    let Err(err) = build_rocket(&config, UserStore::seeded()) else {
        panic!("expected invalid config to be rejected");
    };
    assert!(matches!(err, ServerError::Config(_)));
    assert!(format!("{err}").contains("server.address"));
}

/// The configured listen address and port reach Rocket's config.
#[test]
fn build_applies_listen_settings() {
    let config = RosterConfig::builder().address("0.0.0.0").port(5123).build();
    let rocket = build_rocket(&config, UserStore::seeded()).expect("rocket");
    let figment = rocket.figment();
    assert_eq!(figment.extract_inner::<u16>("port").expect("port"), 5123);
    assert_eq!(
        figment.extract_inner::<IpAddr>("address").expect("address"),
        IpAddr::from([0, 0, 0, 0])
    );
    assert!(rocket.state::<UserStore>().is_some());
}

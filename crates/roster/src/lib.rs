//! Public surface for Roster.
//!
//! Re-exports the building blocks and provides a small logging helper so
//! embedders and the `roster` binary start up the same way.

/// Re-export for convenience.
pub use roster_config as config;
/// Re-export for convenience.
pub use roster_protocol as protocol;
pub use roster_server as server;
/// Re-export for convenience.
pub use roster_store as store;

use roster_config::RosterConfig;
use roster_store::UserStore;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. `RUST_LOG` controls the
/// filter; the default shows info and above.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format_timestamp_millis()
            .try_init();
    }
}

/// Build the store a config asks for: seeded or empty.
pub fn store_for(config: &RosterConfig) -> UserStore {
    if config.store.seed {
        UserStore::seeded()
    } else {
        UserStore::new()
    }
}

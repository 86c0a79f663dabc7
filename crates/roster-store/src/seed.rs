//! Records present in a freshly started store.

use roster_protocol::{User, UserProfile};

/// The five records every seeded store starts with, ids 1 through 5.
pub fn seed_users() -> Vec<User> {
    [
        UserProfile::new("Alice", 25, "alice@example.com", "USA"),
        UserProfile::new("Bob", 30, "bob@example.com", "Canada"),
        UserProfile::new("Charlie", 22, "charlie@example.com", "UK"),
        UserProfile::new("Diana", 28, "diana@example.com", "Germany"),
        UserProfile::new("Eve", 35, "eve@example.com", "France"),
    ]
    .into_iter()
    .zip(1..)
    .map(|(profile, id)| User::from_profile(id, profile))
    .collect()
}

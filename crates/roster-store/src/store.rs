//! Ordered, lock-guarded sequence of user records.

use crate::error::StoreError;
use crate::seed::seed_users;
use log::{debug, info};
use parking_lot::Mutex;
use roster_protocol::{NewUser, User, UserId};

/// Process-lifetime store of user records.
///
/// Insertion order is preserved and determines the next assigned id. All
/// reads and the append path take the same lock, so id assignment cannot
/// race with a concurrent add.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the standard seed records.
    pub fn seeded() -> Self {
        let users = seed_users();
        info!("initialized seeded user store (count={})", users.len());
        Self::with_users(users)
    }

    /// Create a store from an existing record list, kept in order.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// Snapshot of every record in insertion order.
    pub fn list(&self) -> Vec<User> {
        let users = self.users.lock();
        debug!("listing users (count={})", users.len());
        users.clone()
    }

    /// First record whose id matches.
    pub fn get(&self, id: UserId) -> Result<User, StoreError> {
        let users = self.users.lock();
        match users.iter().find(|user| user.id == id) {
            Some(user) => Ok(user.clone()),
            None => {
                debug!("user lookup missed (id={})", id);
                Err(StoreError::NotFound(id))
            }
        }
    }

    /// Append a record, assigning `id = len + 1`.
    ///
    /// The id comes from the record count, not the highest existing id.
    /// Records are never removed, so the two agree; a removal operation
    /// would have to revisit this.
    pub fn add(&self, payload: NewUser) -> User {
        let mut users = self.users.lock();
        let id = users.len() as UserId + 1;
        let user = User::from_payload(id, payload);
        users.push(user.clone());
        debug!("added user (id={}, count={})", id, users.len());
        user
    }

    pub fn len(&self) -> usize {
        self.users.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.lock().is_empty()
    }
}

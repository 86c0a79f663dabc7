//! Wire types shared by the Roster store, server, and clients.

mod message;
mod user;

/// Response bodies that are not user records.
pub use message::{ErrorBody, USER_NOT_FOUND, WELCOME_MESSAGE, WelcomeMessage};
/// User record types.
pub use user::{NewUser, User, UserId, UserProfile};

//! Path parameter guards.

use rocket::request::FromParam;
use roster_protocol::UserId;

/// The `<user_id>` segment of `/users/<user_id>`.
///
/// Matches ASCII digits only, so signs, whitespace and decimals never reach
/// the handler. Digit strings beyond `UserId::MAX` still match and resolve
/// to `OutOfRange`, which no stored record can carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UserIdSegment {
    Id(UserId),
    OutOfRange(String),
}

impl<'a> FromParam<'a> for UserIdSegment {
    type Error = &'a str;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        if param.is_empty() || !param.bytes().all(|b| b.is_ascii_digit()) {
            return Err(param);
        }
        Ok(match param.parse() {
            Ok(id) => UserIdSegment::Id(id),
            Err(_) => UserIdSegment::OutOfRange(param.to_string()),
        })
    }
}

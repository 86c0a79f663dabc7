//! Fixed response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Text returned by the root route.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the REST API! Use /apidocs for Swagger documentation.";

/// Error text returned when a lookup by id finds nothing.
pub const USER_NOT_FOUND: &str = "User not found";

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct WelcomeMessage {
    pub message: String,
}

impl Default for WelcomeMessage {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
        }
    }
}

/// JSON error body, rendered as `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// The body returned for an unknown user id.
    pub fn user_not_found() -> Self {
        Self::new(USER_NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn welcome_message_serializes_fixed_text() {
        let value = serde_json::to_value(WelcomeMessage::default()).expect("serialize");
        assert_eq!(
            value,
            json!({"message": "Welcome to the REST API! Use /apidocs for Swagger documentation."})
        );
    }

    #[test]
    fn not_found_body_shape() {
        let value = serde_json::to_value(ErrorBody::user_not_found()).expect("serialize");
        assert_eq!(value, json!({"error": "User not found"}));
    }
}

//! User record model.
//!
//! Records accepted over HTTP are stored without validation, so a `User`
//! keeps its non-id attributes as raw JSON. Typed accessors read the
//! well-known fields when they have the expected type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use utoipa::openapi::RefOr;
use utoipa::openapi::schema::{AdditionalProperties, ObjectBuilder, Schema, Type};
use utoipa::{PartialSchema, ToSchema};

/// Identifier assigned by the store.
pub type UserId = u64;

/// A stored user record.
///
/// Serializes as a flat object: `{"id": 1, "name": ..., "age": ..., ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    /// Every attribute other than `id`, exactly as supplied.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl User {
    /// Build a record from a loose payload, discarding any caller-supplied id.
    pub fn from_payload(id: UserId, payload: NewUser) -> Self {
        let mut fields = payload.0;
        fields.remove("id");
        Self { id, fields }
    }

    /// Build a well-formed record from a typed profile.
    pub fn from_profile(id: UserId, profile: UserProfile) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(profile.name));
        fields.insert("age".to_string(), Value::from(profile.age));
        fields.insert("email".to_string(), Value::String(profile.email));
        fields.insert("country".to_string(), Value::String(profile.country));
        Self { id, fields }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn age(&self) -> Option<i64> {
        self.fields.get("age").and_then(Value::as_i64)
    }

    pub fn email(&self) -> Option<&str> {
        self.fields.get("email").and_then(Value::as_str)
    }

    pub fn country(&self) -> Option<&str> {
        self.fields.get("country").and_then(Value::as_str)
    }

    /// The typed profile, if all four attributes are present and well typed.
    pub fn profile(&self) -> Option<UserProfile> {
        Some(UserProfile {
            name: self.name()?.to_string(),
            age: self.age()?,
            email: self.email()?.to_string(),
            country: self.country()?.to_string(),
        })
    }
}

// `fields` is untyped and flattened, so the schema lists the well-known
// attributes and admits any others.
impl PartialSchema for User {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .schema_type(Type::Object)
            .property("id", ObjectBuilder::new().schema_type(Type::Integer))
            .required("id")
            .property("name", ObjectBuilder::new().schema_type(Type::String))
            .property("age", ObjectBuilder::new().schema_type(Type::Integer))
            .property("email", ObjectBuilder::new().schema_type(Type::String))
            .property("country", ObjectBuilder::new().schema_type(Type::String))
            .additional_properties(Some(AdditionalProperties::FreeForm(true)))
            .into()
    }
}

impl ToSchema for User {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("User")
    }
}

/// Well-typed user attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct UserProfile {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub country: String,
}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        email: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
            country: country.into(),
        }
    }
}

/// Body of `POST /users`: any JSON object, accepted as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct NewUser(pub Map<String, Value>);

impl From<Map<String, Value>> for NewUser {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<UserProfile> for NewUser {
    fn from(profile: UserProfile) -> Self {
        Self(User::from_profile(0, profile).fields)
    }
}

//! Schema validation helpers for Roster JSON5 configuration.

use crate::ConfigError;
use serde_json::{Map, Value};

/// Validate a config document against the schema.
pub(super) fn validate_schema(value: &Value, layer: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, "")?;
    ensure_allowed_keys(map, &["$schema", "server", "docs", "store"], layer, "")?;

    if let Some(value) = map.get("$schema") {
        expect_string(value, layer, "$schema")?;
    }
    if let Some(value) = map.get("server") {
        validate_server(value, layer, "server")?;
    }
    if let Some(value) = map.get("docs") {
        validate_docs(value, layer, "docs")?;
    }
    if let Some(value) = map.get("store") {
        validate_store(value, layer, "store")?;
    }
    Ok(())
}

/// Validate the "server" block.
fn validate_server(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    ensure_allowed_keys(map, &["address", "port"], layer, path)?;
    if let Some(value) = map.get("address") {
        expect_string(value, layer, &join_path(path, "address"))?;
    }
    if let Some(value) = map.get("port") {
        expect_port(value, layer, &join_path(path, "port"))?;
    }
    Ok(())
}

/// Validate the "docs" block.
fn validate_docs(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    ensure_allowed_keys(map, &["enabled", "path", "spec_path"], layer, path)?;
    if let Some(value) = map.get("enabled") {
        expect_bool(value, layer, &join_path(path, "enabled"))?;
    }
    if let Some(value) = map.get("path") {
        expect_string(value, layer, &join_path(path, "path"))?;
    }
    if let Some(value) = map.get("spec_path") {
        expect_string(value, layer, &join_path(path, "spec_path"))?;
    }
    Ok(())
}

/// Validate the "store" block.
fn validate_store(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    ensure_allowed_keys(map, &["seed"], layer, path)?;
    if let Some(value) = map.get("seed") {
        expect_bool(value, layer, &join_path(path, "seed"))?;
    }
    Ok(())
}

/// Expect a JSON object or return a typed error.
fn expect_object<'a>(
    value: &'a Value,
    layer: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(invalid_field(layer, path, "expected object")),
    }
}

/// Expect a JSON string or return a typed error.
fn expect_string(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    if value.as_str().is_some() {
        Ok(())
    } else {
        Err(invalid_field(layer, path, "expected string"))
    }
}

/// Expect a JSON boolean or return a typed error.
fn expect_bool(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    if matches!(value, Value::Bool(_)) {
        Ok(())
    } else {
        Err(invalid_field(layer, path, "expected bool"))
    }
}

/// Expect an integer in the TCP port range.
fn expect_port(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    match value.as_u64() {
        Some(port) if port <= u64::from(u16::MAX) => Ok(()),
        Some(_) => Err(invalid_field(layer, path, "port out of range")),
        None => Err(invalid_field(layer, path, "expected integer")),
    }
}

/// Ensure only allowed keys are present in an object.
fn ensure_allowed_keys(
    map: &Map<String, Value>,
    allowed: &[&str],
    layer: &str,
    path: &str,
) -> Result<(), ConfigError> {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(invalid_field(layer, &join_path(path, key), "unknown key"));
        }
    }
    Ok(())
}

/// Join nested paths for better error messages.
fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Build a structured invalid-field error.
fn invalid_field(layer: &str, path: &str, message: &str) -> ConfigError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    ConfigError::InvalidField {
        path: format!("{layer}:{normalized_path}"),
        message: message.to_string(),
    }
}

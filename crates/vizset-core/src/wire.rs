//! Wire-format entry points.
//!
//! The wire format is UTF-8 JSON. Parsing is a pure, deterministic function
//! of its input: deserialize the payload, then run the structural
//! [`Validate`] pass over the fully-populated value before handing it to the
//! caller. Serialization is the inverse and always re-embeds each entity's
//! fixed `type` tag.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use serde_json::Value;

use crate::error::{Result, SchemaError};
use crate::validate::Validate;

/// Parses and validates an entity from JSON bytes.
pub fn from_json_slice<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    log::trace!(
        "parsing {} from {} bytes",
        std::any::type_name::<T>(),
        bytes.len()
    );
    let value: T = serde_json::from_slice(bytes).map_err(classify)?;
    value.validate()?;
    Ok(value)
}

/// Parses and validates an entity from a JSON string.
pub fn from_json_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    from_json_slice(text.as_bytes())
}

/// Parses and validates an entity from an already-parsed JSON value.
pub fn from_json_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_value(value).map_err(classify_data_error)?;
    value.validate()?;
    Ok(value)
}

/// Serializes an entity to JSON bytes.
pub fn to_json_vec<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(classify)
}

/// Serializes an entity to a JSON string.
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(classify)
}

/// Sorts a `serde_json` failure into the error taxonomy.
fn classify(err: serde_json::Error) -> SchemaError {
    match err.classify() {
        Category::Syntax | Category::Eof | Category::Io => {
            SchemaError::MalformedPayload(err.to_string())
        }
        Category::Data => classify_data_error(err),
    }
}

/// Sorts a structurally-valid-but-wrong-data failure into the taxonomy.
///
/// Discrimination failures raised inside nested [`tagged_union!`] parsers
/// reach here stringified through serde's error chain; they are recovered
/// into typed [`SchemaError::UnknownVariant`] values so callers never have
/// to grep messages themselves.
///
/// [`tagged_union!`]: crate::tagged_union
pub fn classify_data_error(err: serde_json::Error) -> SchemaError {
    let message = err.to_string();
    match reparse_unknown_variant(&message) {
        Some(unknown) => unknown,
        None => SchemaError::field("payload", message),
    }
}

/// Recovers an `UnknownVariant` from the fixed message shape produced by
/// [`SchemaError::UnknownVariant`]'s `Display` impl.
fn reparse_unknown_variant(message: &str) -> Option<SchemaError> {
    let start = message.find("unknown ")?;
    let rest = &message[start + "unknown ".len()..];
    let (family, rest) = rest.split_once(" variant tag '")?;
    let tag = &rest[..rest.find('\'')?];
    // A family is always a bare Rust type name; anything else means the
    // words happened to occur in an unrelated serde message.
    if family.is_empty() || !family.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(SchemaError::UnknownVariant {
        family: family.to_owned(),
        tag: tag.to_owned(),
    })
}

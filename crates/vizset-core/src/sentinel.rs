//! The `Default` sentinel.
//!
//! Many display fields accept either an explicit value or the marker object
//! `{"type": "Default"}`, meaning "defer to whatever the rendering interface
//! would do". The unset state is semantically distinct from any real value
//! of the field (an explicit `0.0` line width hides the geometry; a Default
//! line width does not), so the field is a two-case union rather than an
//! `Option`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fixed tag of the sentinel object on the wire.
pub const DEFAULT_TAG: &str = "Default";

/// Either the `Default` sentinel or an explicit value of `T`.
///
/// Round-trips losslessly: the sentinel serializes back to
/// `{"type": "Default"}`, never to a stand-in value of `T`. Resolving what
/// the default actually is belongs to the rendering consumer, not this
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultOr<T> {
    /// Defer to the contextual default of the consuming interface.
    Default,
    /// An explicit value.
    Value(T),
}

impl<T> DefaultOr<T> {
    /// Returns true when the sentinel state is held.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Returns the explicit value, if one was given.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Default => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Consumes self, substituting `fallback` for the sentinel.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Default => fallback,
            Self::Value(value) => value,
        }
    }
}

impl<T> Default for DefaultOr<T> {
    fn default() -> Self {
        Self::Default
    }
}

impl<T> From<T> for DefaultOr<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for DefaultOr<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Default => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", DEFAULT_TAG)?;
                map.end()
            }
            Self::Value(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for DefaultOr<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // The sentinel shape is matched before T. The order matters: a
        // string- or map-typed T could otherwise swallow a malformed
        // sentinel object instead of failing cleanly.
        let raw = Value::deserialize(deserializer)?;
        if let Value::Object(map) = &raw {
            if map.get("type").and_then(Value::as_str) == Some(DEFAULT_TAG) {
                if map.len() == 1 {
                    return Ok(Self::Default);
                }
                return Err(serde::de::Error::custom(
                    "Default sentinel accepts no keys other than 'type'",
                ));
            }
        }
        serde_json::from_value(raw)
            .map(Self::Value)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_round_trips() {
        let unset: DefaultOr<f64> = DefaultOr::Default;
        let json = serde_json::to_string(&unset).unwrap();
        assert_eq!(json, r#"{"type":"Default"}"#);
        let back: DefaultOr<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DefaultOr::Default);
    }

    #[test]
    fn explicit_value_round_trips() {
        let width = DefaultOr::Value(2.5);
        let json = serde_json::to_string(&width).unwrap();
        assert_eq!(json, "2.5");
        let back: DefaultOr<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DefaultOr::Value(2.5));
    }

    #[test]
    fn sentinel_is_not_zero() {
        let back: DefaultOr<f64> = serde_json::from_str(r#"{"type":"Default"}"#).unwrap();
        assert_ne!(back, DefaultOr::Value(0.0));
        assert!(back.is_default());
    }

    #[test]
    fn sentinel_with_extra_keys_is_rejected() {
        let result: Result<DefaultOr<f64>, _> =
            serde_json::from_str(r#"{"type":"Default","value":1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn string_values_parse_after_sentinel_attempt() {
        let back: DefaultOr<String> = serde_json::from_str(r#""10px""#).unwrap();
        assert_eq!(back, DefaultOr::Value("10px".to_owned()));
        let sentinel: DefaultOr<String> = serde_json::from_str(r#"{"type":"Default"}"#).unwrap();
        assert!(sentinel.is_default());
    }
}

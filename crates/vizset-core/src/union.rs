//! The discrimination registry.
//!
//! Wire payloads are resolved to concrete variants through the `type` tag
//! and nothing else: no field-shape sniffing, no ordered fallback parsing.
//! [`tagged_union!`] generates one closed registry per entity family,
//! mapping each tag to exactly one variant parser for deserialization and
//! re-embedding the tag on serialization so output always round-trips.
//!
//! Tags are unique within a family by construction: the variant identifier
//! *is* the tag, and duplicate identifiers do not compile. An ambiguous
//! registry is therefore a definition-time defect, never a runtime error;
//! the only runtime discrimination failure is an unrecognized tag.

/// Defines a closed, tag-discriminated union over previously defined entity
/// types.
///
/// Each listed variant must name a type in scope whose wire `type` tag
/// equals the type's own name. The macro generates:
///
/// - the enum itself, with one tuple variant per entity and `From` impls;
/// - `FAMILY` and `TAGS` constants plus a `type_tag` accessor;
/// - `from_tagged_value`, the registry lookup over an already-parsed JSON
///   object (unknown tags produce [`SchemaError::UnknownVariant`]);
/// - `Serialize`/`Deserialize` in terms of the registry;
/// - a [`Validate`] impl dispatching to the contained variant.
///
/// [`SchemaError::UnknownVariant`]: crate::error::SchemaError::UnknownVariant
/// [`Validate`]: crate::validate::Validate
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant($variant), )+
        }

        impl $name {
            /// Family name used in discrimination errors.
            pub const FAMILY: &'static str = stringify!($name);

            /// Every tag registered for this family, in declaration order.
            pub const TAGS: &'static [&'static str] = &[$(stringify!($variant)),+];

            /// The wire tag of the contained variant.
            pub fn type_tag(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => stringify!($variant), )+
                }
            }

            /// Resolves an already-parsed JSON object to a variant through
            /// the tag registry.
            pub fn from_tagged_value(
                value: $crate::__private::serde_json::Value,
            ) -> ::core::result::Result<Self, $crate::error::SchemaError> {
                let tag = value
                    .get("type")
                    .and_then($crate::__private::serde_json::Value::as_str)
                    .ok_or_else(|| $crate::error::SchemaError::field(
                        ::std::concat!(::std::stringify!($name), ".type"),
                        "missing or non-string type tag",
                    ))?
                    .to_owned();
                match tag.as_str() {
                    $(
                        stringify!($variant) => {
                            return $crate::__private::serde_json::from_value(value)
                                .map(Self::$variant)
                                .map_err($crate::wire::classify_data_error);
                        }
                    )+
                    _ => {}
                }
                Err($crate::error::SchemaError::UnknownVariant {
                    family: Self::FAMILY.to_owned(),
                    tag,
                })
            }
        }

        $(
            impl ::core::convert::From<$variant> for $name {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                match self {
                    $( Self::$variant(inner) => inner.serialize(serializer), )+
                }
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value: $crate::__private::serde_json::Value =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                Self::from_tagged_value(value)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }

        impl $crate::validate::Validate for $name {
            fn validate(&self) -> ::core::result::Result<(), $crate::error::SchemaError> {
                match self {
                    $( Self::$variant(inner) => $crate::validate::Validate::validate(inner), )+
                }
            }
        }
    };
}

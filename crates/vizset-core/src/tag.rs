//! Fixed `type` tag markers.
//!
//! Every wire object carries a `type` field whose value is exactly the name
//! of its variant. The tag is not user data: it is a zero-size marker type
//! that serializes to one constant string and refuses to deserialize from
//! anything else. A payload whose tag does not match the expected entity
//! therefore fails at parse time, and a constructed value cannot hold a
//! mismatched tag at all.

/// Defines a zero-size marker type for a fixed `type` tag.
///
/// ```
/// vizset_core::fixed_tag!(pub struct ColorTag = "Color";);
/// assert_eq!(ColorTag::TAG, "Color");
/// ```
///
/// The marker implements `Default` so that payloads omitting the `type` key
/// still parse when the entity is addressed concretely (tags are only
/// mandatory where a union has to discriminate).
#[macro_export]
macro_rules! fixed_tag {
    ($(#[$meta:meta])* $vis:vis struct $name:ident = $tag:literal;) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $name {
            /// The constant value of the `type` field on the wire.
            pub const TAG: &'static str = $tag;
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(Self::TAG)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(Self::TAG)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw: ::std::borrow::Cow<'de, str> =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                if raw == Self::TAG {
                    Ok(Self)
                } else {
                    Err(<D::Error as $crate::__private::serde::de::Error>::custom(
                        ::std::format!("expected type tag '{}', found '{}'", Self::TAG, raw),
                    ))
                }
            }
        }
    };
}

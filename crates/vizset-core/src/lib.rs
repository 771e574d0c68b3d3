//! Core abstractions for vizset-rs.
//!
//! This crate provides the plumbing shared by every entity family:
//! - the [`SchemaError`] taxonomy and wire entry points ([`wire`])
//! - fixed `type` tag markers ([`fixed_tag!`]) and the tag-dispatched union
//!   registry ([`tagged_union!`])
//! - the [`DefaultOr`] sentinel for "defer to the interface default" fields
//! - the post-parse [`Validate`] pass
//! - [`Color`] and the shared display attribute enums

// Documentation lints - internal helpers don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder-style constructors return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod attributes;
pub mod color;
pub mod error;
pub mod sentinel;
mod tag;
mod union;
pub mod validate;
pub mod wire;

pub use attributes::{DisplayMode, HorizontalAlignment, LineType, Units, VerticalAlignment};
pub use color::{Color, ColorTag};
pub use error::{Result, SchemaError};
pub use sentinel::{DefaultOr, DEFAULT_TAG};
pub use validate::Validate;
pub use wire::{from_json_slice, from_json_str, from_json_value, to_json_string, to_json_vec};

/// Free-form user data attached to display and scene objects.
///
/// Keys and values are ordinary JSON; this is the one extension point that
/// deliberately escapes the no-unknown-keys rule.
pub type UserData = serde_json::Map<String, serde_json::Value>;

// Macro support: re-exported for use inside `fixed_tag!`/`tagged_union!`
// expansions in downstream crates.
#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}

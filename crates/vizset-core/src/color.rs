//! RGBA color.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::Validate;

crate::fixed_tag!(
    /// Fixed `type` tag for [`Color`].
    pub struct ColorTag = "Color";
);

/// An RGBA color with 8-bit channels.
///
/// The alpha channel defaults to fully opaque (255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Color {
    /// Wire discriminant, always `"Color"`.
    #[serde(rename = "type", default)]
    pub type_tag: ColorTag,
    /// Value for the red channel.
    pub r: u8,
    /// Value for the green channel.
    pub g: u8,
    /// Value for the blue channel.
    pub b: u8,
    /// Opacity between 0 (fully transparent) and 255 (fully opaque).
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    /// Creates a fully opaque color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            type_tag: ColorTag,
            r,
            g,
            b,
            a: 255,
        }
    }

    /// Creates a color with an explicit alpha channel.
    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            type_tag: ColorTag,
            r,
            g,
            b,
            a,
        }
    }
}

impl Validate for Color {
    fn validate(&self) -> Result<()> {
        // Channel ranges are enforced by the u8 representation itself.
        Ok(())
    }
}

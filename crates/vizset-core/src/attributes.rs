//! Shared display attribute enumerations.
//!
//! These are plain string-valued enums on the wire (no `type` tag of their
//! own); the wire string is exactly the variant name.

use serde::{Deserialize, Serialize};

/// Line style for curve-like display geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineType {
    /// A solid, continuous line.
    #[default]
    Continuous,
    /// A dashed line.
    Dashed,
    /// A dotted line.
    Dotted,
    /// Alternating dashes and dots.
    DashDot,
}

/// Render mode for area and volume display geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Shaded surfaces only.
    #[default]
    Surface,
    /// Shaded surfaces with edge curves drawn on top.
    SurfaceWithEdges,
    /// Edge curves only.
    Wireframe,
    /// Vertices only.
    Points,
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    /// Anchor at the left edge.
    #[default]
    Left,
    /// Anchor at the center.
    Center,
    /// Anchor at the right edge.
    Right,
}

/// Vertical text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerticalAlignment {
    /// Anchor at the top edge.
    Top,
    /// Anchor at the middle.
    Middle,
    /// Anchor at the bottom edge.
    #[default]
    Bottom,
}

/// Unit of measure for the model geometry of a visualization set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Units {
    /// Meters.
    #[default]
    Meters,
    /// Millimeters.
    Millimeters,
    /// Feet.
    Feet,
    /// Inches.
    Inches,
    /// Centimeters.
    Centimeters,
}

//! Legend customization parameters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vizset_core::validate::{check_min_items, Validate};
use vizset_core::{Color, DefaultOr, Result, SchemaError, UserData};
use vizset_geometry::Plane;

vizset_core::fixed_tag!(pub struct LegendParametersTag = "LegendParameters";);
vizset_core::fixed_tag!(pub struct Legend3DParametersTag = "Legend3DParameters";);
vizset_core::fixed_tag!(pub struct Legend2DParametersTag = "Legend2DParameters";);

/// Dimensional properties of a legend rendered in the 3D scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Legend3DParameters {
    /// Wire discriminant, always `"Legend3DParameters"`.
    #[serde(rename = "type", default)]
    pub type_tag: Legend3DParametersTag,
    /// Plane from which the legend is generated. The default is the world
    /// XY plane at the origin, or a corner of the bounding box of the
    /// geometry the legend is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_plane: Option<Plane>,
    /// Height of each legend segment in model units.
    #[serde(default)]
    pub segment_height: DefaultOr<f64>,
    /// Width of each legend segment in model units.
    #[serde(default)]
    pub segment_width: DefaultOr<f64>,
    /// Height of the legend text. Defaults to a third of the segment
    /// height.
    #[serde(default)]
    pub text_height: DefaultOr<f64>,
}

impl Validate for Legend3DParameters {
    fn validate(&self) -> Result<()> {
        self.base_plane.validate()
    }
}

/// Dimensional properties of a legend rendered in the 2D plane of a
/// screen.
///
/// Every dimension is a text string of an integer followed by `px`
/// (viewport pixels) or `%` (percentage of the viewport extent), with the
/// viewport origin in the upper-left corner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Legend2DParameters {
    /// Wire discriminant, always `"Legend2DParameters"`.
    #[serde(rename = "type", default)]
    pub type_tag: Legend2DParametersTag,
    /// X coordinate of the legend base point, increasing to the right.
    #[serde(default)]
    pub origin_x: DefaultOr<String>,
    /// Y coordinate of the legend base point, increasing downward.
    #[serde(default)]
    pub origin_y: DefaultOr<String>,
    /// Height of each legend segment.
    #[serde(default)]
    pub segment_height: DefaultOr<String>,
    /// Width of each legend segment.
    #[serde(default)]
    pub segment_width: DefaultOr<String>,
    /// Height of the legend text. Defaults to a third of the segment
    /// height.
    #[serde(default)]
    pub text_height: DefaultOr<String>,
}

impl Validate for Legend2DParameters {
    fn validate(&self) -> Result<()> {
        check_dimension("Legend2DParameters.origin_x", &self.origin_x)?;
        check_dimension("Legend2DParameters.origin_y", &self.origin_y)?;
        check_dimension("Legend2DParameters.segment_height", &self.segment_height)?;
        check_dimension("Legend2DParameters.segment_width", &self.segment_width)?;
        check_dimension("Legend2DParameters.text_height", &self.text_height)
    }
}

fn check_dimension(field: &str, value: &DefaultOr<String>) -> Result<()> {
    let Some(text) = value.as_value() else {
        return Ok(());
    };
    let digits = text
        .strip_suffix("px")
        .or_else(|| text.strip_suffix('%'));
    match digits {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => Ok(()),
        _ => Err(SchemaError::field(
            field,
            format!("expected an integer followed by 'px' or '%', found '{text}'"),
        )),
    }
}

/// Parameters used to customize a legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegendParameters {
    /// Wire discriminant, always `"LegendParameters"`.
    #[serde(rename = "type", default)]
    pub type_tag: LegendParametersTag,
    /// Lower boundary of the legend. The sentinel uses the minimum of the
    /// associated values.
    #[serde(default)]
    pub min: DefaultOr<f64>,
    /// Upper boundary of the legend. The sentinel uses the maximum of the
    /// associated values.
    #[serde(default)]
    pub max: DefaultOr<f64>,
    /// Number of steps between the high and low boundary, at least 1.
    #[serde(default)]
    pub segment_count: DefaultOr<u32>,
    /// Optional explicit color list overriding the default palette, at
    /// least 2 colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Color>>,
    /// Legend title, typically the units of the data.
    #[serde(default)]
    pub title: String,
    /// Whether the legend is drawn as a gradient instead of discrete
    /// segments.
    #[serde(default)]
    pub continuous_legend: bool,
    /// Optional mapping from values to text categories. When present the
    /// legend is ordinal and `decimal_count` has no effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal_dictionary: Option<BTreeMap<i64, String>>,
    /// Number of decimal places in the legend text.
    #[serde(default = "default_decimal_count")]
    pub decimal_count: u32,
    /// Whether `>` and `<` are included in the boundary segment text.
    #[serde(default)]
    pub include_larger_smaller: bool,
    /// Whether the legend is vertical (true) or horizontal (false).
    #[serde(default = "default_true")]
    pub vertical: bool,
    /// Font family for the legend text.
    #[serde(default = "default_font")]
    pub font: String,
    /// Dimensional properties for rendering in the 3D scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties_3d: Option<Legend3DParameters>,
    /// Dimensional properties for rendering in the 2D plane of a screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties_2d: Option<Legend2DParameters>,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

fn default_decimal_count() -> u32 {
    2
}

fn default_true() -> bool {
    true
}

fn default_font() -> String {
    "Arial".to_owned()
}

impl Default for LegendParameters {
    fn default() -> Self {
        Self {
            type_tag: LegendParametersTag,
            min: DefaultOr::Default,
            max: DefaultOr::Default,
            segment_count: DefaultOr::Default,
            colors: None,
            title: String::new(),
            continuous_legend: false,
            ordinal_dictionary: None,
            decimal_count: 2,
            include_larger_smaller: false,
            vertical: true,
            font: default_font(),
            properties_3d: None,
            properties_2d: None,
            user_data: None,
        }
    }
}

impl Validate for LegendParameters {
    fn validate(&self) -> Result<()> {
        if let Some(colors) = &self.colors {
            check_min_items("LegendParameters.colors", colors.len(), 2)?;
        }
        if let Some(count) = self.segment_count.as_value() {
            if *count < 1 {
                return Err(SchemaError::field(
                    "LegendParameters.segment_count",
                    format!("must be >= 1, found {count}"),
                ));
            }
        }
        self.properties_3d.validate()?;
        self.properties_2d.validate()
    }
}

//! Scene-level containers aligning geometry with data.

use serde::{Deserialize, Serialize};
use vizset_core::validate::{check_min_items, Validate};
use vizset_core::{tagged_union, DisplayMode, Result, SchemaError, Units, UserData};
use vizset_display::Display;
use vizset_geometry::Geometry;

use crate::data_type::AnyDataType;
use crate::legend::LegendParameters;

vizset_core::fixed_tag!(pub struct VisualizationDataTag = "VisualizationData";);
vizset_core::fixed_tag!(pub struct VisualizationMetaDataTag = "VisualizationMetaData";);
vizset_core::fixed_tag!(pub struct AnalysisGeometryTag = "AnalysisGeometry";);
vizset_core::fixed_tag!(pub struct ContextGeometryTag = "ContextGeometry";);
vizset_core::fixed_tag!(pub struct VisualizationSetTag = "VisualizationSet";);

/// A data set to be visualized, with optional legend and data type
/// metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisualizationData {
    /// Wire discriminant, always `"VisualizationData"`.
    #[serde(rename = "type", default)]
    pub type_tag: VisualizationDataTag,
    /// Values used to generate the visualization colors, at least 1.
    pub values: Vec<f64>,
    /// Optional parameters overriding the default legend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_parameters: Option<LegendParameters>,
    /// Optional data type used to assign default legend properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<AnyDataType>,
    /// Optional unit for the values (e.g. "C"). When empty, the default
    /// unit of the data type applies.
    #[serde(default)]
    pub unit: String,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl VisualizationData {
    /// Creates a data set without legend or data type metadata.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            type_tag: VisualizationDataTag,
            values,
            legend_parameters: None,
            data_type: None,
            unit: String::new(),
            user_data: None,
        }
    }
}

impl Validate for VisualizationData {
    fn validate(&self) -> Result<()> {
        check_min_items("VisualizationData.values", self.values.len(), 1)?;
        self.legend_parameters.validate()?;
        self.data_type.validate()
    }
}

/// The metadata of a [`VisualizationData`], without the values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisualizationMetaData {
    /// Wire discriminant, always `"VisualizationMetaData"`.
    #[serde(rename = "type", default)]
    pub type_tag: VisualizationMetaDataTag,
    /// Optional parameters overriding the default legend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_parameters: Option<LegendParameters>,
    /// Optional data type used to assign default legend properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<AnyDataType>,
    /// Optional unit for the values.
    #[serde(default)]
    pub unit: String,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl Validate for VisualizationMetaData {
    fn validate(&self) -> Result<()> {
        self.legend_parameters.validate()?;
        self.data_type.validate()
    }
}

/// An object where multiple data streams correspond to the same geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisGeometry {
    /// Wire discriminant, always `"AnalysisGeometry"`.
    #[serde(rename = "type", default)]
    pub type_tag: AnalysisGeometryTag,
    /// Unique object identifier: 1-100 characters drawn from letters,
    /// digits, `.`, `_` and `-`.
    pub identifier: String,
    /// Optional display name without character restrictions, typically
    /// used to set the object's layer in the rendering interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Geometry aligned with the values of the data sets: one value per
    /// geometry entry, or - when all entries are meshes - one value per
    /// mesh face or per mesh vertex.
    pub geometry: Vec<Geometry>,
    /// The data sets associated with the geometry, at least 1.
    pub data_sets: Vec<VisualizationData>,
    /// Index of the data set displayed by default.
    #[serde(default)]
    pub active_data: usize,
    /// Render mode for the geometry.
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Whether the geometry starts hidden and must be un-hidden to show
    /// in the scene.
    #[serde(default)]
    pub hidden: bool,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl AnalysisGeometry {
    /// Creates an analysis geometry with defaults for the display fields.
    pub fn new(
        identifier: impl Into<String>,
        geometry: Vec<Geometry>,
        data_sets: Vec<VisualizationData>,
    ) -> Self {
        Self {
            type_tag: AnalysisGeometryTag,
            identifier: identifier.into(),
            display_name: None,
            geometry,
            data_sets,
            active_data: 0,
            display_mode: DisplayMode::Surface,
            hidden: false,
            user_data: None,
        }
    }

    /// The three denominators a data set length may align with: the
    /// number of geometry entries, and the face and vertex counts summed
    /// over the mesh entries.
    pub fn topology_counts(&self) -> (usize, usize, usize) {
        let mut faces = 0;
        let mut vertices = 0;
        for geometry in &self.geometry {
            if let Some((face_count, vertex_count)) = geometry.mesh_counts() {
                faces += face_count;
                vertices += vertex_count;
            }
        }
        (self.geometry.len(), faces, vertices)
    }
}

impl Validate for AnalysisGeometry {
    fn validate(&self) -> Result<()> {
        check_identifier("AnalysisGeometry.identifier", &self.identifier)?;
        self.geometry.validate()?;
        check_min_items("AnalysisGeometry.data_sets", self.data_sets.len(), 1)?;
        self.data_sets.validate()?;

        let (geometries, faces, vertices) = self.topology_counts();
        let first = self.data_sets[0].values.len();
        if first != geometries && first != faces && first != vertices {
            return Err(SchemaError::AlignmentMismatch {
                values: first,
                geometries,
                faces,
                vertices,
            });
        }
        // Every later data set must share the first one's length, even
        // where another topology count would have matched on its own.
        for data in &self.data_sets[1..] {
            if data.values.len() != first {
                return Err(SchemaError::structural(
                    "AnalysisGeometry.data_sets",
                    data.values.len(),
                    vec![first],
                ));
            }
        }
        Ok(())
    }
}

/// Context geometry surrounding an analysis, with no value alignment of
/// its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextGeometry {
    /// Wire discriminant, always `"ContextGeometry"`.
    #[serde(rename = "type", default)]
    pub type_tag: ContextGeometryTag,
    /// Unique object identifier: 1-100 characters drawn from letters,
    /// digits, `.`, `_` and `-`.
    pub identifier: String,
    /// Optional display name without character restrictions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Display objects giving context to the analysis geometry.
    pub geometry: Vec<Display>,
    /// Whether the geometry starts hidden and must be un-hidden to show
    /// in the scene.
    #[serde(default)]
    pub hidden: bool,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl ContextGeometry {
    /// Creates a visible context geometry.
    pub fn new(identifier: impl Into<String>, geometry: Vec<Display>) -> Self {
        Self {
            type_tag: ContextGeometryTag,
            identifier: identifier.into(),
            display_name: None,
            geometry,
            hidden: false,
            user_data: None,
        }
    }
}

impl Validate for ContextGeometry {
    fn validate(&self) -> Result<()> {
        check_identifier("ContextGeometry.identifier", &self.identifier)?;
        self.geometry.validate()
    }
}

tagged_union! {
    /// One entry of a visualization set: either analysis geometry with
    /// aligned data, or plain context geometry.
    pub enum SceneGeometry {
        AnalysisGeometry,
        ContextGeometry,
    }
}

/// The root aggregate: analysis and context geometry to be visualized
/// together.
///
/// Owns every nested entity exclusively; geometry is always a tree with
/// no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisualizationSet {
    /// Wire discriminant, always `"VisualizationSet"`.
    #[serde(rename = "type", default)]
    pub type_tag: VisualizationSetTag,
    /// Unique object identifier: 1-100 characters drawn from letters,
    /// digits, `.`, `_` and `-`.
    pub identifier: String,
    /// Optional display name without character restrictions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// The scene entries, each typically translated to its own layer in
    /// the rendering interface.
    #[serde(default)]
    pub geometry: Vec<SceneGeometry>,
    /// Optional unit of measure for the model geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl VisualizationSet {
    /// Creates a set from scene entries.
    pub fn new(identifier: impl Into<String>, geometry: Vec<SceneGeometry>) -> Self {
        Self {
            type_tag: VisualizationSetTag,
            identifier: identifier.into(),
            display_name: None,
            geometry,
            units: None,
            user_data: None,
        }
    }
}

impl Validate for VisualizationSet {
    fn validate(&self) -> Result<()> {
        log::debug!(
            "validating VisualizationSet '{}' with {} scene entries",
            self.identifier,
            self.geometry.len()
        );
        check_identifier("VisualizationSet.identifier", &self.identifier)?;
        self.geometry.validate()
    }
}

pub(crate) fn check_identifier(field: &str, value: &str) -> Result<()> {
    let valid_char = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');
    if value.is_empty() || value.len() > 100 {
        return Err(SchemaError::field(
            field,
            format!("must be 1 to 100 characters, found {}", value.len()),
        ));
    }
    if let Some(bad) = value.chars().find(|&c| !valid_char(c)) {
        return Err(SchemaError::field(
            field,
            format!("invalid character '{bad}' (letters, digits, '.', '_' and '-' are allowed)"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_pattern() {
        assert!(check_identifier("x", "Daylight_Study-01.a").is_ok());
        assert!(check_identifier("x", "").is_err());
        assert!(check_identifier("x", "has space").is_err());
        assert!(check_identifier("x", &"a".repeat(100)).is_ok());
        assert!(check_identifier("x", &"a".repeat(101)).is_err());
    }
}

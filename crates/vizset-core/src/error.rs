//! Error types for vizset-rs.

use thiserror::Error;

/// The main error type for parsing and validating vizset entities.
///
/// Every failure is surfaced to the caller as one of these variants; nothing
/// is silently recovered and no partially-populated entity is ever returned.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The input is not structurally valid JSON at all.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A `type` tag that is not registered for the union it was found in.
    #[error("unknown {family} variant tag '{tag}'")]
    UnknownVariant {
        /// Name of the union the tag was resolved against.
        family: String,
        /// The unrecognized tag as it appeared on the wire.
        tag: String,
    },

    /// An arity, range, or pattern failure on a single field.
    #[error("{field}: {message}")]
    FieldConstraint {
        /// Dotted path of the offending field.
        field: String,
        /// Human-readable description of the violated constraint.
        message: String,
    },

    /// A cross-field count invariant failure, carrying every count that
    /// would have been accepted.
    #[error("{context}: length {count} matches none of the valid counts {valid:?}")]
    StructuralMismatch {
        /// Dotted path of the collection whose length was checked.
        context: String,
        /// The length that was provided.
        count: usize,
        /// Every reference count the length was compared against.
        valid: Vec<usize>,
    },

    /// Value/geometry alignment failure on an analysis geometry, carrying
    /// all three topology denominators so the failure is diagnosable
    /// without re-deriving them.
    #[error(
        "number of values ({values}) aligns with neither the geometry count \
         ({geometries}), the mesh face count ({faces}), nor the mesh vertex \
         count ({vertices})"
    )]
    AlignmentMismatch {
        /// Length of the offending value sequence.
        values: usize,
        /// Number of geometry entries.
        geometries: usize,
        /// Faces summed across mesh entries.
        faces: usize,
        /// Vertices summed across mesh entries.
        vertices: usize,
    },
}

impl SchemaError {
    /// Shorthand for a [`SchemaError::FieldConstraint`].
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FieldConstraint {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`SchemaError::StructuralMismatch`].
    pub fn structural(context: impl Into<String>, count: usize, valid: Vec<usize>) -> Self {
        Self::StructuralMismatch {
            context: context.into(),
            count,
            valid,
        }
    }
}

/// A specialized Result type for vizset-rs operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

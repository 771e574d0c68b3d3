//! Post-parse structural validation.
//!
//! Validation runs once, after a candidate value has been fully parsed, so
//! every referenced sub-object is already available and the outcome does not
//! depend on payload key order. Validators are pure: they never mutate, they
//! only accept or reject.

use crate::error::{Result, SchemaError};

/// A structural invariant check over an already-parsed, immutable value.
///
/// Containers recurse into their children, so validating the root of an
/// object tree validates everything beneath it. Calling `validate` twice
/// yields the same result.
pub trait Validate {
    /// Accepts the value or reports the first violated invariant.
    fn validate(&self) -> Result<()>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<()> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<()> {
        self.iter().try_for_each(Validate::validate)
    }
}

/// Checks a minimum-cardinality constraint on a collection field.
pub fn check_min_items(field: &str, len: usize, min: usize) -> Result<()> {
    if len >= min {
        Ok(())
    } else {
        Err(SchemaError::field(
            field,
            format!("expected at least {min} items, found {len}"),
        ))
    }
}

/// Checks that a numeric field is not negative.
pub fn check_non_negative(field: &str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SchemaError::field(field, format!("must be >= 0, found {value}")))
    }
}

/// Checks that a numeric field is strictly positive.
pub fn check_positive(field: &str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SchemaError::field(field, format!("must be > 0, found {value}")))
    }
}

/// Checks a count-matching invariant: the candidate length must equal ANY
/// of the valid reference counts.
///
/// Several invariants legitimately admit more than one reading (one color
/// per face vs. one per vertex); when counts coincide, any match is
/// accepted and no tie-break is attempted.
pub fn check_count_in(context: &str, count: usize, valid: &[usize]) -> Result<()> {
    if valid.contains(&count) {
        Ok(())
    } else {
        Err(SchemaError::structural(context, count, valid.to_vec()))
    }
}

//! Range validation
//!
//! The generation engine trusts its inputs, so every sampled range is
//! checked here first -- before the specification is built.

use thiserror::Error;

use script_generator::ValueRange;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("invalid {field} range: [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

/// Ensure `min <= max` and both bounds are non-negative.
pub fn validate_range(range: ValueRange, field: &'static str) -> Result<(), ValidationError> {
    if range.min < 0.0 || range.max < 0.0 || range.min > range.max {
        return Err(ValidationError::InvalidRange {
            field,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

/// Eccentricity must additionally stay inside `[0, 1)`: an eccentricity
/// of 1 or more is no longer a closed orbit.
pub fn validate_eccentricity(range: ValueRange) -> Result<(), ValidationError> {
    validate_range(range, "eccentricity")?;
    if range.max >= 1.0 {
        return Err(ValidationError::InvalidRange {
            field: "eccentricity",
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

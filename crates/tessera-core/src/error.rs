//! Construction errors.
//!
//! Every constructor that validates geometric parameters reports problems
//! through [`ShapeError`]. A failed construction never yields a partial value.

use thiserror::Error;

/// Invalid parameters supplied when constructing a shape, style or diagram.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("radius must be a positive finite number, got {0}")]
    InvalidRadius(f32),

    #[error("{what} must be a non-negative finite number, got {value}")]
    InvalidDimension { what: &'static str, value: f32 },

    #[error("corner radius {radius} exceeds half of the shorter side ({limit})")]
    CornerRadiusTooLarge { radius: f32, limit: f32 },

    #[error("a polygon needs at least 3 sides, got {0}")]
    TooFewSides(usize),

    #[error("arc height must be non-zero")]
    ZeroArcHeight,

    #[error("arc endpoints must be distinct")]
    CoincidentArcEndpoints,

    #[error("font size must be a positive finite number, got {0}")]
    InvalidFontSize(f32),

    #[error("invalid color `{value}`: {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("opacity must lie in [0, 1], got {0}")]
    InvalidOpacity(f32),

    #[error("invalid dash pattern: {0}")]
    InvalidDashing(String),

    #[error("{what} must be a finite number, got {value}")]
    NotFinite { what: &'static str, value: f32 },
}

/// Checks that `radius` is positive and finite.
pub(crate) fn check_radius(radius: f32) -> Result<f32, ShapeError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(ShapeError::InvalidRadius(radius))
    }
}

/// Checks that a width/height-like value is non-negative and finite.
pub(crate) fn check_dimension(what: &'static str, value: f32) -> Result<f32, ShapeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidDimension { what, value })
    }
}

/// Checks that a coordinate or angle is finite.
pub(crate) fn check_finite(what: &'static str, value: f32) -> Result<f32, ShapeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ShapeError::NotFinite { what, value })
    }
}

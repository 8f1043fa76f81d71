//! Style attribute records.
//!
//! A [`Style`] is a partial record: each attribute is independently
//! optional. Records attached at different depths of a diagram tree are
//! merged with [`Style::over`], where the outer record wins, and finally
//! completed against an explicit [`ResolvedStyle`] of defaults.
//!
//! # Attributes
//!
//! | Attribute | Meaning | Unset falls back to |
//! |-----------|---------|---------------------|
//! | `fill_color` | Interior paint | no fill |
//! | `fill_opacity` | Interior alpha in `[0, 1]` | default record |
//! | `line_color` | Stroke paint | default record |
//! | `line_width` | Stroke width in diagram units | default record |
//! | `dashing` | Dash pattern and offset | solid line |
//!
//! # Examples
//!
//! ```
//! use tessera_core::{color::Color, style::{ResolvedStyle, Style}};
//!
//! let orange = Color::new("orange").unwrap();
//! let blue = Color::new("blue").unwrap();
//!
//! let inner = Style::new().with_fill_color(orange).with_line_width(0.2).unwrap();
//! let outer = Style::new().with_fill_color(blue);
//!
//! let merged = outer.over(&inner);
//! assert_eq!(merged.fill_color(), Some(blue));
//! assert_eq!(merged.line_width(), Some(0.2));
//!
//! let resolved = merged.resolve(&ResolvedStyle::default());
//! assert_eq!(resolved.fill_color(), Some(blue));
//! ```

use crate::{
    color::Color,
    error::{ShapeError, check_dimension, check_finite},
};

/// A stroke dash pattern: alternating dash and gap lengths plus a start offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashing {
    pattern: Vec<f32>,
    offset: f32,
}

impl Dashing {
    /// Creates a dash pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidDashing`] if the pattern is empty, holds a
    /// negative or non-finite length, or sums to zero, and
    /// [`ShapeError::NotFinite`] for a non-finite offset.
    pub fn new(pattern: Vec<f32>, offset: f32) -> Result<Self, ShapeError> {
        if pattern.is_empty() {
            return Err(ShapeError::InvalidDashing("pattern is empty".to_string()));
        }
        if let Some(bad) = pattern.iter().find(|len| !len.is_finite() || **len < 0.0) {
            return Err(ShapeError::InvalidDashing(format!(
                "length {bad} is not a non-negative finite number"
            )));
        }
        if pattern.iter().sum::<f32>() <= 0.0 {
            return Err(ShapeError::InvalidDashing(
                "pattern lengths sum to zero".to_string(),
            ));
        }
        let offset = check_finite("dash offset", offset)?;
        Ok(Self { pattern, offset })
    }

    /// Dash and gap lengths, starting with a dash
    pub fn pattern(&self) -> &[f32] {
        &self.pattern
    }

    /// Distance into the pattern at which stroking starts
    pub fn offset(&self) -> f32 {
        self.offset
    }
}

/// A partial style record attached to a diagram node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    fill_color: Option<Color>,
    fill_opacity: Option<f32>,
    line_color: Option<Color>,
    line_width: Option<f32>,
    dashing: Option<Dashing>,
}

impl Style {
    /// Creates an empty record with every attribute unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no attribute is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn fill_opacity(&self) -> Option<f32> {
        self.fill_opacity
    }

    pub fn line_color(&self) -> Option<Color> {
        self.line_color
    }

    pub fn line_width(&self) -> Option<f32> {
        self.line_width
    }

    pub fn dashing(&self) -> Option<&Dashing> {
        self.dashing.as_ref()
    }

    /// Sets the fill color
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Sets the fill opacity.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidOpacity`] outside `[0, 1]`.
    pub fn with_fill_opacity(mut self, opacity: f32) -> Result<Self, ShapeError> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ShapeError::InvalidOpacity(opacity));
        }
        self.fill_opacity = Some(opacity);
        Ok(self)
    }

    /// Sets the line color
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = Some(color);
        self
    }

    /// Sets the line width.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidDimension`] for a negative or non-finite width.
    pub fn with_line_width(mut self, width: f32) -> Result<Self, ShapeError> {
        self.line_width = Some(check_dimension("line width", width)?);
        Ok(self)
    }

    /// Sets the dash pattern
    pub fn with_dashing(mut self, dashing: Dashing) -> Self {
        self.dashing = Some(dashing);
        self
    }

    /// Merges two records, with `self` as the outer one.
    ///
    /// Attributes set on `self` win; attributes `self` leaves unset fall
    /// through to `inner`.
    pub fn over(&self, inner: &Style) -> Style {
        Style {
            fill_color: self.fill_color.or(inner.fill_color),
            fill_opacity: self.fill_opacity.or(inner.fill_opacity),
            line_color: self.line_color.or(inner.line_color),
            line_width: self.line_width.or(inner.line_width),
            dashing: self.dashing.clone().or_else(|| inner.dashing.clone()),
        }
    }

    /// Completes this record with `defaults` for every unset attribute.
    pub fn resolve(&self, defaults: &ResolvedStyle) -> ResolvedStyle {
        ResolvedStyle {
            fill_color: self.fill_color.or(defaults.fill_color),
            fill_opacity: self.fill_opacity.unwrap_or(defaults.fill_opacity),
            line_color: self.line_color.unwrap_or(defaults.line_color),
            line_width: self.line_width.unwrap_or(defaults.line_width),
            dashing: self.dashing.clone().or_else(|| defaults.dashing.clone()),
        }
    }
}

/// A fully resolved style, as consumed by a renderer.
///
/// Also serves as the explicit default record that partial [`Style`]s are
/// resolved against.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    fill_color: Option<Color>,
    fill_opacity: f32,
    line_color: Color,
    line_width: f32,
    dashing: Option<Dashing>,
}

impl ResolvedStyle {
    /// Creates a resolved record from concrete values.
    ///
    /// # Errors
    ///
    /// Returns an error for an opacity outside `[0, 1]` or an invalid line width.
    pub fn new(
        fill_color: Option<Color>,
        fill_opacity: f32,
        line_color: Color,
        line_width: f32,
    ) -> Result<Self, ShapeError> {
        if !(0.0..=1.0).contains(&fill_opacity) {
            return Err(ShapeError::InvalidOpacity(fill_opacity));
        }
        Ok(Self {
            fill_color,
            fill_opacity,
            line_color,
            line_width: check_dimension("line width", line_width)?,
            dashing: None,
        })
    }

    /// Returns a copy with the given dash pattern
    pub fn with_dashing(mut self, dashing: Option<Dashing>) -> Self {
        self.dashing = dashing;
        self
    }

    /// Interior paint, or `None` for an unfilled shape
    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn fill_opacity(&self) -> f32 {
        self.fill_opacity
    }

    pub fn line_color(&self) -> Color {
        self.line_color
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Dash pattern, or `None` for a solid line
    pub fn dashing(&self) -> Option<&Dashing> {
        self.dashing.as_ref()
    }
}

impl Default for ResolvedStyle {
    /// No fill, opaque, black line of width 0.05, solid.
    fn default() -> Self {
        Self {
            fill_color: None,
            fill_opacity: 1.0,
            line_color: Color::black(),
            line_width: 0.05,
            dashing: None,
        }
    }
}

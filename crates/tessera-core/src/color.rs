//! Color handling for Tessera diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, so style records can carry any CSS color.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, palette};

use crate::error::ShapeError;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgb(255, 0, 0)"` or `"orange"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_core::color::Color;
    ///
    /// let orange = Color::new("orange").unwrap();
    /// let blue = Color::new("#0000ff").unwrap();
    /// assert_ne!(orange, blue);
    ///
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, ShapeError> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| ShapeError::InvalidColor {
                value: color_str.to_string(),
                reason: err.to_string(),
            })
    }

    /// Opaque black, the conventional default line color.
    pub fn black() -> Self {
        Self {
            color: DynamicColor::from_alpha_color(palette::css::BLACK),
        }
    }

    /// Creates a new color with the specified alpha value, between 0.0
    /// (fully transparent) and 1.0 (fully opaque).
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// let semi_transparent_red = red.with_alpha(0.5);
    /// assert_eq!(semi_transparent_red.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl FromStr for Color {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

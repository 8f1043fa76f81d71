//! Configuration types for Tessera diagrams.
//!
//! This module provides configuration structures that supply the explicit
//! defaults used during style resolution and text measurement. All types
//! implement [`serde::Deserialize`] so they can be loaded from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and text settings.
//! - [`StyleConfig`] - The default attribute record styles are resolved against.
//! - [`TextConfig`] - Font settings for text measurement.
//!
//! # Example
//!
//! ```
//! # use tessera::config::AppConfig;
//! let config = AppConfig::from_toml_str(
//!     r#"
//!     [style]
//!     line_color = "navy"
//!     line_width = 0.1
//!     "#,
//! )
//! .unwrap();
//!
//! let defaults = config.style().defaults().unwrap();
//! assert_eq!(defaults.line_width(), 0.1);
//! ```

use std::{fs, path::Path};

use log::debug;
use serde::Deserialize;

use tessera_core::{color::Color, style::ResolvedStyle};

use crate::error::TesseraError;

/// Top-level configuration combining style and text settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Text configuration section.
    #[serde(default)]
    text: TextConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(style: StyleConfig, text: TextConfig) -> Self {
        Self { style, text }
    }

    /// Parses a configuration from TOML text.
    ///
    /// Missing sections and fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::Config`] if the text is not valid TOML or
    /// does not match the configuration schema.
    pub fn from_toml_str(content: &str) -> Result<Self, TesseraError> {
        toml::from_str(content).map_err(|err| TesseraError::Config(err.to_string()))
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the text configuration.
    pub fn text(&self) -> &TextConfig {
        &self.text
    }
}

/// Default style attributes.
///
/// Colors are kept as CSS strings and parsed when [`defaults`](Self::defaults)
/// is called.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Default fill color; unset means shapes are not filled.
    fill_color: Option<String>,
    fill_opacity: f32,
    line_color: String,
    line_width: f32,
    /// Font size for text that does not set one.
    font_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fill_color: None,
            fill_opacity: 1.0,
            line_color: "black".to_string(),
            line_width: 0.05,
            font_size: 1.0,
        }
    }
}

impl StyleConfig {
    /// Builds the resolved default record.
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::Config`] naming the offending value if a
    /// color does not parse or a number is out of range.
    pub fn defaults(&self) -> Result<ResolvedStyle, TesseraError> {
        let fill_color = self
            .fill_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| TesseraError::Config(format!("Invalid fill color in config: {err}")))?;
        let line_color = Color::new(&self.line_color)
            .map_err(|err| TesseraError::Config(format!("Invalid line color in config: {err}")))?;

        ResolvedStyle::new(fill_color, self.fill_opacity, line_color, self.line_width)
            .map_err(|err| TesseraError::Config(format!("Invalid style in config: {err}")))
    }

    /// Returns the default font size.
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::Config`] unless the size is positive and finite.
    pub fn font_size(&self) -> Result<f32, TesseraError> {
        if self.font_size.is_finite() && self.font_size > 0.0 {
            Ok(self.font_size)
        } else {
            Err(TesseraError::Config(format!(
                "Invalid font size in config: {}",
                self.font_size
            )))
        }
    }
}

/// Font settings used by [`CosmicTextMeasure`](crate::text::CosmicTextMeasure).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    font_family: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
        }
    }
}

impl TextConfig {
    /// Creates a text configuration for the given font family.
    pub fn new(font_family: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
        }
    }

    /// Returns the font family name.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}

/// Loads configuration from a TOML file.
///
/// # Errors
///
/// Returns [`TesseraError::Io`] if the file cannot be read and
/// [`TesseraError::Config`] if its content does not parse.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, TesseraError> {
    let path = path.as_ref();
    debug!(path = path.display().to_string(); "Loading config file");
    let content = fs::read_to_string(path)?;
    AppConfig::from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        let defaults = config.style().defaults().unwrap();

        assert_eq!(defaults, ResolvedStyle::default());
        assert_approx_eq!(f32, config.style().font_size().unwrap(), 1.0);
        assert_eq!(config.text().font_family(), "Arial");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [style]
            fill_color = "orange"
            "#,
        )
        .unwrap();
        let defaults = config.style().defaults().unwrap();

        assert_eq!(defaults.fill_color(), Some(Color::new("orange").unwrap()));
        assert_eq!(defaults.line_color(), Color::black());
        assert_approx_eq!(f32, defaults.line_width(), 0.05);
    }

    #[test]
    fn test_text_section() {
        let config = AppConfig::from_toml_str(
            r#"
            [text]
            font_family = "DejaVu Sans"
            "#,
        )
        .unwrap();
        assert_eq!(config.text().font_family(), "DejaVu Sans");
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let config = AppConfig::from_toml_str(
            r#"
            [style]
            line_color = "not-a-color"
            "#,
        )
        .unwrap();
        let err = config.style().defaults().unwrap_err();
        assert!(matches!(err, TesseraError::Config(ref msg) if msg.contains("line color")));
    }

    #[test]
    fn test_invalid_opacity_is_reported() {
        let config = AppConfig::from_toml_str("[style]\nfill_opacity = 2.0\n").unwrap();
        assert!(matches!(
            config.style().defaults(),
            Err(TesseraError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_font_size_is_reported() {
        let config = AppConfig::from_toml_str("[style]\nfont_size = 0.0\n").unwrap();
        assert!(config.style().font_size().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let result = AppConfig::from_toml_str("[style\nline_width = ");
        assert!(matches!(result, Err(TesseraError::Config(_))));
    }

    #[test]
    fn test_wrong_field_type() {
        let result = AppConfig::from_toml_str("[style]\nline_width = \"wide\"\n");
        assert!(matches!(result, Err(TesseraError::Config(_))));
    }
}

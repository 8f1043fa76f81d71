//! Text measurement.
//!
//! Diagram text carries its extent as plain data; working out that extent
//! needs font metrics, which live behind the [`TextMeasure`] trait.
//!
//! - [`CosmicTextMeasure`] - shapes text with real fonts through cosmic-text
//! - [`MonospaceMeasure`] - a fixed-advance estimate with no font access
//!
//! Both report sizes in diagram units: a font size of `1.0` means one unit
//! per em.

use std::sync::{Mutex, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

use tessera_core::geometry::Size;

use crate::config::TextConfig;

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Pixel size text is shaped at before scaling back to diagram units.
const REFERENCE_PX: f32 = 16.0;

/// Average glyph advance, as a fraction of the font size, used when shaping
/// produces no glyphs.
const FALLBACK_ADVANCE: f32 = 0.55;

/// Measures the extent of a text label.
pub trait TextMeasure: Send + Sync {
    /// Returns the width and height `content` occupies at `font_size`.
    fn measure(&self, content: &str, font_size: f32) -> Size;
}

/// Measures text with cosmic-text.
///
/// Keeps one [`FontSystem`] for its whole lifetime, since loading system
/// fonts is expensive.
pub struct CosmicTextMeasure {
    font_system: Mutex<FontSystem>,
    font_family: String,
}

impl CosmicTextMeasure {
    /// Loads the system fonts and measures with the configured family.
    pub fn new(config: &TextConfig) -> Self {
        info!(font_family = config.font_family(); "Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
            font_family: config.font_family().to_string(),
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}

impl Default for CosmicTextMeasure {
    fn default() -> Self {
        Self::new(&TextConfig::default())
    }
}

impl TextMeasure for CosmicTextMeasure {
    fn measure(&self, content: &str, font_size: f32) -> Size {
        if content.is_empty() {
            return Size::default();
        }

        // Shaping state is rebuilt per call, so a poisoned lock is still usable.
        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let metrics = Metrics::new(REFERENCE_PX, REFERENCE_PX * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(&self.font_family));
        buffer.set_size(None, None);
        buffer.set_text(content, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        if max_width == 0.0 {
            let longest = content.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            max_width = longest as f32 * REFERENCE_PX * FALLBACK_ADVANCE;
        }
        if total_height == 0.0 {
            total_height = content.lines().count().max(1) as f32 * metrics.line_height;
        }

        Size::new(max_width, total_height).scale(font_size / REFERENCE_PX)
    }
}

/// Estimates text extent from character counts.
///
/// Every character advances by `advance` ems and every line is
/// `line_height` ems tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    advance: f32,
    line_height: f32,
}

impl MonospaceMeasure {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(0.6, LINE_HEIGHT_FACTOR)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, content: &str, font_size: f32) -> Size {
        if content.is_empty() {
            return Size::default();
        }
        let longest = content.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let lines = content.lines().count().max(1);
        Size::new(
            longest as f32 * self.advance * font_size,
            lines as f32 * self.line_height * font_size,
        )
    }
}

//! Leaf diagram constructors.
//!
//! Every constructor validates its parameters and either returns a valid
//! diagram or a [`ShapeError`]; nothing is silently clamped. The one
//! documented exception is a path that visits fewer than two points, which
//! becomes the empty diagram.

use std::{
    f32::consts::{FRAC_PI_2, PI},
    path::PathBuf,
};

use log::trace;

use tessera_core::{
    error::ShapeError,
    geometry::{Point, Size},
    shape::{Circle, Image, Path, Rectangle, Segment, Text},
};

use crate::{diagram::Diagram, text::TextMeasure};

/// The empty diagram.
pub fn empty() -> Diagram {
    Diagram::empty()
}

/// A circle of the given radius centered on the origin.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidRadius`] unless `radius` is positive and finite.
pub fn circle(radius: f32) -> Result<Diagram, ShapeError> {
    Ok(Diagram::primitive(Circle::new(radius)?.into()))
}

/// An axis-aligned rectangle centered on the origin.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidDimension`] for a negative or non-finite side.
pub fn rectangle(width: f32, height: f32) -> Result<Diagram, ShapeError> {
    Ok(Diagram::primitive(Rectangle::new(width, height, None)?.into()))
}

/// A rectangle with corners rounded to `radius`.
///
/// # Errors
///
/// Returns [`ShapeError::CornerRadiusTooLarge`] when `radius` exceeds half
/// of the shorter side, or the errors of [`rectangle`].
pub fn rounded_rectangle(width: f32, height: f32, radius: f32) -> Result<Diagram, ShapeError> {
    Ok(Diagram::primitive(
        Rectangle::new(width, height, Some(radius))?.into(),
    ))
}

pub fn square(side: f32) -> Result<Diagram, ShapeError> {
    rectangle(side, side)
}

/// A circular arc around the origin from `start_angle` to `end_angle` (radians).
///
/// # Errors
///
/// Returns [`ShapeError::InvalidRadius`] for a non-positive radius.
pub fn arc(radius: f32, start_angle: f32, end_angle: f32) -> Result<Diagram, ShapeError> {
    path(vec![Segment::arc(radius, start_angle, end_angle)])
}

/// A circular arc from `from` to `to` that deviates `height` from the chord.
///
/// A positive height bulges to the left of the direction of travel, which
/// for a left-to-right chord is toward -Y (up the page). A negative height
/// bulges the other way.
///
/// # Errors
///
/// Returns [`ShapeError::CoincidentArcEndpoints`] when the endpoints are the
/// same point and [`ShapeError::ZeroArcHeight`] when `height` is zero.
///
/// # Examples
///
/// ```
/// # use tessera::{creation::arc_between, geometry::Point};
/// # fn main() -> Result<(), tessera::TesseraError> {
/// let arc = arc_between(Point::new(0.0, 0.0), Point::new(2.0, 0.0), 1.0)?;
/// let bounds = arc.bounding_box();
/// assert!((bounds.min_y() + 1.0).abs() < 1e-5);
/// assert!((bounds.width() - 2.0).abs() < 1e-5);
/// # Ok(())
/// # }
/// ```
pub fn arc_between(from: Point, to: Point, height: f32) -> Result<Diagram, ShapeError> {
    if !height.is_finite() {
        return Err(ShapeError::NotFinite {
            what: "arc height",
            value: height,
        });
    }
    if height == 0.0 {
        return Err(ShapeError::ZeroArcHeight);
    }
    let chord = to - from;
    let d = chord.norm();
    if d == 0.0 {
        return Err(ShapeError::CoincidentArcEndpoints);
    }

    let h = height.abs();
    let cos_theta = ((d * d - 4.0 * h * h) / (d * d + 4.0 * h * h)).clamp(-1.0, 1.0);
    let theta = cos_theta.acos();
    let radius = d / (2.0 * theta.sin());
    let (phi, dy) = if height > 0.0 {
        (-FRAC_PI_2, radius - h)
    } else {
        (FRAC_PI_2, h - radius)
    };
    trace!(radius, theta, height; "Arc between points");

    Ok(arc(radius, -theta, theta)?
        .rotate(phi)
        .translate(d / 2.0, dy)
        .rotate(chord.angle())
        .translate(from.x(), from.y()))
}

/// A regular polygon with vertices on a circle of `radius`.
///
/// Vertex `s` sits at angle `2π·s/sides + (π/2)·sides + rotation`, and the
/// outline is closed back to the first vertex.
///
/// # Errors
///
/// Returns [`ShapeError::TooFewSides`] when `sides < 3` and
/// [`ShapeError::InvalidRadius`] for a non-positive radius.
pub fn polygon(sides: usize, radius: f32, rotation: f32) -> Result<Diagram, ShapeError> {
    if sides < 3 {
        return Err(ShapeError::TooFewSides(sides));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(ShapeError::InvalidRadius(radius));
    }
    let n = sides as f32;
    let vertices = (0..=sides).map(|s| {
        let t = 2.0 * PI * s as f32 / n + FRAC_PI_2 * n + rotation;
        Point::new(radius * t.cos(), radius * t.sin())
    });
    make_path(vertices)
}

/// A regular polygon whose sides are `side_length` long.
///
/// # Errors
///
/// See [`polygon`].
pub fn regular_polygon(sides: usize, side_length: f32) -> Result<Diagram, ShapeError> {
    if sides < 3 {
        return Err(ShapeError::TooFewSides(sides));
    }
    polygon(sides, side_length / (2.0 * (PI / sides as f32).sin()), 0.0)
}

/// An equilateral triangle with sides of length `width`.
pub fn triangle(width: f32) -> Result<Diagram, ShapeError> {
    regular_polygon(3, width)
}

/// A polyline through `points`.
///
/// Fewer than two points give the empty diagram.
///
/// # Errors
///
/// Returns [`ShapeError::NotFinite`] for a non-finite coordinate.
pub fn make_path(points: impl IntoIterator<Item = Point>) -> Result<Diagram, ShapeError> {
    path(
        points
            .into_iter()
            .enumerate()
            .map(|(idx, p)| {
                if idx == 0 {
                    Segment::MoveTo(p)
                } else {
                    Segment::LineTo(p)
                }
            })
            .collect(),
    )
}

/// A path from explicit segments.
///
/// A path that visits fewer than two points gives the empty diagram.
///
/// # Errors
///
/// See [`Path::new`].
pub fn path(segments: Vec<Segment>) -> Result<Diagram, ShapeError> {
    let path = Path::new(segments)?;
    if path.is_degenerate() {
        trace!("Degenerate path replaced by the empty diagram");
        return Ok(Diagram::empty());
    }
    Ok(Diagram::primitive(path.into()))
}

/// A horizontal line of `length` centered on the origin.
pub fn hrule(length: f32) -> Result<Diagram, ShapeError> {
    make_path([
        Point::new(-length / 2.0, 0.0),
        Point::new(length / 2.0, 0.0),
    ])
}

/// A vertical line of `length` centered on the origin.
pub fn vrule(length: f32) -> Result<Diagram, ShapeError> {
    make_path([
        Point::new(0.0, -length / 2.0),
        Point::new(0.0, length / 2.0),
    ])
}

/// Text with no measured extent.
///
/// The label is drawn by the renderer but takes no room during placement.
/// Use [`measured_text`] when it should.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidFontSize`] for a non-positive size.
pub fn text(content: impl Into<String>, font_size: Option<f32>) -> Result<Diagram, ShapeError> {
    Ok(Diagram::primitive(
        Text::new(content, font_size, Size::default())?.into(),
    ))
}

/// Text whose extent comes from `measure`.
///
/// `default_font_size` is used for measuring when `font_size` is unset; the
/// shape itself keeps `font_size` as given.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidFontSize`] for a non-positive size.
pub fn measured_text(
    measure: &dyn TextMeasure,
    content: impl Into<String>,
    font_size: Option<f32>,
    default_font_size: f32,
) -> Result<Diagram, ShapeError> {
    let content = content.into();
    let size = font_size.unwrap_or(default_font_size);
    if !(size.is_finite() && size > 0.0) {
        return Err(ShapeError::InvalidFontSize(size));
    }
    let extent = measure.measure(&content, size);
    Ok(Diagram::primitive(
        Text::new(content, font_size, extent)?.into(),
    ))
}

/// An image with an unknown (zero) extent.
///
/// The file is not opened. Use [`sized_image`] when the size is known.
pub fn image(local_path: impl Into<PathBuf>, url_path: Option<String>) -> Diagram {
    Diagram::primitive(Image::r#unsized(local_path, url_path).into())
}

/// An image occupying `size`, centered on the origin.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidDimension`] for a negative or non-finite size.
pub fn sized_image(
    local_path: impl Into<PathBuf>,
    url_path: Option<String>,
    size: Size,
) -> Result<Diagram, ShapeError> {
    Ok(Diagram::primitive(
        Image::new(local_path, url_path, size)?.into(),
    ))
}

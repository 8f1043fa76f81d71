//! Shape primitives and their analytic support functions.
//!
//! [`Shape`] is a closed set of variants. Each variant keeps its defining
//! parameters losslessly for renderers and knows its own extent through
//! [`Shape::support`]: for a unit direction `u`, the largest `u·p` over all
//! points `p` of the shape, measured in the shape's local frame.
//!
//! Local frames:
//!
//! - [`Circle`], [`Rectangle`], [`Text`] and [`Image`] are centered on the origin.
//! - [`Path`] coordinates are used as given; an [`Segment::Arc`] is centered
//!   on its own `center`.

use std::{f32::consts::PI, path::PathBuf};

use crate::{
    error::{ShapeError, check_dimension, check_finite, check_radius},
    geometry::{Point, Size, Vector, normalize_angle},
};

/// The closed set of drawable shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Path(Path),
    Text(Text),
    Image(Image),
}

impl Shape {
    /// Support value along the unit direction `direction`, in the local frame.
    pub fn support(&self, direction: Vector) -> f32 {
        match self {
            Self::Circle(circle) => circle.support(direction),
            Self::Rectangle(rect) => rect.support(direction),
            Self::Path(path) => path.support(direction),
            Self::Text(text) => centered_box_support(text.extent(), direction),
            Self::Image(image) => centered_box_support(image.size(), direction),
        }
    }

    /// Short variant name, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Rectangle(_) => "rectangle",
            Self::Path(_) => "path",
            Self::Text(_) => "text",
            Self::Image(_) => "image",
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl From<Path> for Shape {
    fn from(path: Path) -> Self {
        Self::Path(path)
    }
}

impl From<Text> for Shape {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Image> for Shape {
    fn from(image: Image) -> Self {
        Self::Image(image)
    }
}

fn centered_box_support(size: Size, direction: Vector) -> f32 {
    direction.x().abs() * size.width() / 2.0 + direction.y().abs() * size.height() / 2.0
}

/// A circle centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f32,
}

impl Circle {
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidRadius`] unless `radius` is positive and finite.
    pub fn new(radius: f32) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: check_radius(radius)?,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    fn support(&self, _direction: Vector) -> f32 {
        self.radius
    }
}

/// An axis-aligned rectangle centered on the origin, optionally with rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f32,
    height: f32,
    corner_radius: Option<f32>,
}

impl Rectangle {
    /// # Errors
    ///
    /// Returns an error for a negative or non-finite side, or a corner
    /// radius that is not positive or exceeds half of the shorter side.
    pub fn new(width: f32, height: f32, corner_radius: Option<f32>) -> Result<Self, ShapeError> {
        let width = check_dimension("width", width)?;
        let height = check_dimension("height", height)?;
        if let Some(radius) = corner_radius {
            let radius = check_radius(radius)?;
            let limit = width.min(height) / 2.0;
            if radius > limit {
                return Err(ShapeError::CornerRadiusTooLarge { radius, limit });
            }
        }
        Ok(Self {
            width,
            height,
            corner_radius,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn corner_radius(&self) -> Option<f32> {
        self.corner_radius
    }

    fn support(&self, direction: Vector) -> f32 {
        // A rounded rectangle is the inner rectangle grown by a disc of the corner radius.
        let radius = self.corner_radius.unwrap_or(0.0);
        let inner = Size::new(self.width - 2.0 * radius, self.height - 2.0 * radius);
        centered_box_support(inner, direction) + radius
    }
}

/// One instruction of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Starts a new subpath at the point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Circular arc around `center`, swept from `start_angle` to `end_angle`
    /// (radians). A positive sweep runs toward +Y. When the path already
    /// has a current point, a straight line joins it to the arc start.
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
}

impl Segment {
    /// An arc around the origin.
    pub fn arc(radius: f32, start_angle: f32, end_angle: f32) -> Self {
        Self::Arc {
            center: Point::origin(),
            radius,
            start_angle,
            end_angle,
        }
    }

    fn validate(&self) -> Result<(), ShapeError> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => {
                check_finite("x coordinate", p.x())?;
                check_finite("y coordinate", p.y())?;
            }
            Self::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                check_finite("arc center x", center.x())?;
                check_finite("arc center y", center.y())?;
                check_radius(radius)?;
                check_finite("arc start angle", start_angle)?;
                check_finite("arc end angle", end_angle)?;
            }
        }
        Ok(())
    }
}

fn arc_point(center: Point, radius: f32, angle: f32) -> Point {
    center + Vector::from_angle(angle).scale(radius)
}

fn arc_support(center: Point, radius: f32, start: f32, end: f32, direction: Vector) -> f32 {
    let base = center.to_vector().dot(direction);
    let sweep = end - start;
    if sweep.abs() >= 2.0 * PI {
        return base + radius;
    }
    let heading = direction.angle();
    let reached = if sweep >= 0.0 {
        normalize_angle(heading - start) <= sweep
    } else {
        normalize_angle(start - heading) <= -sweep
    };
    if reached {
        base + radius
    } else {
        let from = arc_point(center, radius, start).to_vector().dot(direction);
        let to = arc_point(center, radius, end).to_vector().dot(direction);
        from.max(to)
    }
}

/// An ordered sequence of path instructions.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// # Errors
    ///
    /// Returns an error for a non-finite coordinate or angle, or an arc
    /// whose radius is not positive.
    pub fn new(segments: Vec<Segment>) -> Result<Self, ShapeError> {
        for segment in &segments {
            segment.validate()?;
        }
        Ok(Self { segments })
    }

    /// A polyline: a move-to the first point followed by line-tos.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NotFinite`] for a non-finite coordinate.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Result<Self, ShapeError> {
        let segments = points
            .into_iter()
            .enumerate()
            .map(|(idx, p)| {
                if idx == 0 {
                    Segment::MoveTo(p)
                } else {
                    Segment::LineTo(p)
                }
            })
            .collect();
        Self::new(segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The points this path visits, in order.
    ///
    /// A path that starts with a line-to has an implicit move-to at the
    /// origin. Each arc contributes its start and end points.
    pub fn vertices(&self) -> Vec<Point> {
        let mut vertices = Vec::with_capacity(self.segments.len() + 1);
        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(p) => vertices.push(p),
                Segment::LineTo(p) => {
                    if vertices.is_empty() {
                        vertices.push(Point::origin());
                    }
                    vertices.push(p);
                }
                Segment::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => {
                    vertices.push(arc_point(center, radius, start_angle));
                    vertices.push(arc_point(center, radius, end_angle));
                }
            }
        }
        vertices
    }

    /// True when the path visits fewer than two points and so draws nothing.
    pub fn is_degenerate(&self) -> bool {
        self.vertices().len() < 2
    }

    fn support(&self, direction: Vector) -> f32 {
        let arcs = self.segments.iter().filter_map(|segment| match *segment {
            Segment::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => Some(arc_support(center, radius, start_angle, end_angle, direction)),
            _ => None,
        });
        self.vertices()
            .into_iter()
            .map(|p| p.to_vector().dot(direction))
            .chain(arcs)
            .reduce(f32::max)
            .unwrap_or(0.0)
    }
}

/// A text label centered on the origin.
///
/// Font metrics are outside this crate: the extent is supplied by whoever
/// measured the text. Unmeasured text has a zero extent.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    font_size: Option<f32>,
    extent: Size,
}

impl Text {
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidFontSize`] for a non-positive size and
    /// [`ShapeError::InvalidDimension`] for a negative extent.
    pub fn new(
        content: impl Into<String>,
        font_size: Option<f32>,
        extent: Size,
    ) -> Result<Self, ShapeError> {
        if let Some(size) = font_size.filter(|size| !(size.is_finite() && *size > 0.0)) {
            return Err(ShapeError::InvalidFontSize(size));
        }
        check_dimension("text width", extent.width())?;
        check_dimension("text height", extent.height())?;
        Ok(Self {
            content: content.into(),
            font_size,
            extent,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Explicit font size; `None` defers to the renderer's default
    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    pub fn extent(&self) -> Size {
        self.extent
    }
}

/// A raster image centered on the origin.
///
/// The file is never opened here; `size` is whatever the loader reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    local_path: PathBuf,
    url_path: Option<String>,
    size: Size,
}

impl Image {
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidDimension`] for a negative or non-finite size.
    pub fn new(
        local_path: impl Into<PathBuf>,
        url_path: Option<String>,
        size: Size,
    ) -> Result<Self, ShapeError> {
        check_dimension("image width", size.width())?;
        check_dimension("image height", size.height())?;
        Ok(Self {
            local_path: local_path.into(),
            url_path,
            size,
        })
    }

    /// An image whose size is not known yet.
    pub fn r#unsized(local_path: impl Into<PathBuf>, url_path: Option<String>) -> Self {
        Self {
            local_path: local_path.into(),
            url_path,
            size: Size::default(),
        }
    }

    pub fn local_path(&self) -> &std::path::Path {
        &self.local_path
    }

    pub fn url_path(&self) -> Option<&str> {
        self.url_path.as_deref()
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

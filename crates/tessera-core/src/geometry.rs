//! Geometric primitives for diagram construction.
//!
//! This module provides the value types every other part of Tessera is
//! built from.
//!
//! # Overview
//!
//! - [`Point`] - A position in diagram space
//! - [`Vector`] - A displacement or direction in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//! - [`Cardinal`] - Symbolic anchor points on a [`Bounds`] (center, edge midpoints, corners)
//!
//! # Coordinate System
//!
//! Tessera uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward, so "north" is the minimum-y side
//! - **Angles**: Measured from +X toward +Y, which appears clockwise on screen

use std::{
    f32::consts::PI,
    fmt,
    ops::{Add, Neg, Sub},
    str::FromStr,
};

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use tessera_core::geometry::Point;
/// let p = Point::new(4.0, 6.0);
/// let q = Point::new(1.0, 2.0);
///
/// // Point difference yields a vector
/// let v = p - q;
/// assert_eq!(v.x(), 3.0);
/// assert_eq!(v.norm(), 5.0);
///
/// let mid = p.midpoint(q);
/// assert_eq!(mid.x(), 2.5);
/// assert_eq!(mid.y(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`
    pub fn origin() -> Self {
        Self::default()
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Moves this point by a vector, returning a new point.
    pub fn translate(self, offset: Vector) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Returns the vector from the origin to this point
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        (other - self).norm()
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        self.translate(rhs)
    }
}

/// A displacement or direction in diagram space.
///
/// Unlike [`Point`], a vector is unaffected by the translation part of a
/// [`Transform`](crate::transform::Transform).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    x: f32,
    y: f32,
}

impl Vector {
    /// Unit vector along +X (rightward).
    pub const UNIT_X: Vector = Vector { x: 1.0, y: 0.0 };
    /// Unit vector along +Y (downward).
    pub const UNIT_Y: Vector = Vector { x: 0.0, y: 1.0 };

    /// Creates a new vector with the specified components
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a unit vector pointing at `angle` radians from +X.
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: cos, y: sin }
    }

    /// Returns the x component
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y component
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both components are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Euclidean length of the vector
    pub fn norm(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Signed angle from the +X axis in radians, in `(-π, π]`.
    ///
    /// The zero vector has no direction; its angle is defined as `0.0`.
    pub fn angle(self) -> f32 {
        if self.is_zero() {
            0.0
        } else {
            self.y.atan2(self.x)
        }
    }

    /// Dot product
    pub fn dot(self, other: Vector) -> f32 {
        self.x.mul_add(other.x, self.y * other.y)
    }

    /// Multiplies both components by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the unit vector with the same direction.
    ///
    /// The zero vector normalizes to itself.
    pub fn normalize(self) -> Self {
        let norm = self.norm();
        if norm == 0.0 {
            self
        } else {
            self.scale(1.0 / norm)
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimension by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Symbolic anchor on a [`Bounds`].
///
/// Parses from the compass labels `"C"`, `"N"`, `"NE"`, `"E"`, `"SE"`, `"S"`,
/// `"SW"`, `"W"` and `"NW"`. North is the minimum-y side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    Center,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Cardinal {
    /// Every anchor, center first then clockwise from north.
    pub const ALL: [Cardinal; 9] = [
        Cardinal::Center,
        Cardinal::North,
        Cardinal::NorthEast,
        Cardinal::East,
        Cardinal::SouthEast,
        Cardinal::South,
        Cardinal::SouthWest,
        Cardinal::West,
        Cardinal::NorthWest,
    ];

    /// Returns the compass label of this anchor
    pub fn label(self) -> &'static str {
        match self {
            Self::Center => "C",
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

impl FromStr for Cardinal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cardinal| cardinal.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!("invalid cardinal `{s}`, valid values: C, N, NE, E, SE, S, SW, W, NW")
            })
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Represents an axis-aligned bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from explicit edge coordinates.
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Smallest bounds containing every point, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let seed = Self::new(first.x, first.y, first.x, first.y);
        Some(points.fold(seed, |bounds, p| Self {
            min_x: bounds.min_x.min(p.x),
            min_y: bounds.min_y.min(p.y),
            max_x: bounds.max_x.max(p.x),
            max_y: bounds.max_y.max(p.y),
        }))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        self.cardinal(Cardinal::Center)
    }

    /// Resolves a symbolic anchor to an absolute point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera_core::geometry::{Bounds, Cardinal};
    /// let bounds = Bounds::new(0.0, 0.0, 4.0, 2.0);
    ///
    /// let ne = bounds.cardinal(Cardinal::NorthEast);
    /// assert_eq!((ne.x(), ne.y()), (4.0, 0.0));
    ///
    /// let w = bounds.cardinal(Cardinal::West);
    /// assert_eq!((w.x(), w.y()), (0.0, 1.0));
    /// ```
    pub fn cardinal(self, cardinal: Cardinal) -> Point {
        let mid_x = (self.min_x + self.max_x) / 2.0;
        let mid_y = (self.min_y + self.max_y) / 2.0;
        let (x, y) = match cardinal {
            Cardinal::Center => (mid_x, mid_y),
            Cardinal::North => (mid_x, self.min_y),
            Cardinal::NorthEast => (self.max_x, self.min_y),
            Cardinal::East => (self.max_x, mid_y),
            Cardinal::SouthEast => (self.max_x, self.max_y),
            Cardinal::South => (mid_x, self.max_y),
            Cardinal::SouthWest => (self.min_x, self.max_y),
            Cardinal::West => (self.min_x, mid_y),
            Cardinal::NorthWest => (self.min_x, self.min_y),
        };
        Point::new(x, y)
    }

    /// The four corners, clockwise from the north-west corner.
    pub fn corners(self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }

    /// Merges two bounds to create a larger bounds that contains both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by the specified offset.
    pub fn translate(&self, offset: Vector) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Returns true if `point` lies inside or on the edge of the bounds.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

/// Normalizes an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let turn = 2.0 * PI;
    let wrapped = angle.rem_euclid(turn);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if wrapped >= turn { 0.0 } else { wrapped }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Bounds::new(x, y, x + w, y + h))
    }

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Translating a point by `q - p` should land on `q`.
    fn check_sub_then_translate_roundtrip(p: Point, q: Point) -> Result<(), TestCaseError> {
        let landed = p + (q - p);

        prop_assert!(approx_eq!(f32, landed.x(), q.x(), epsilon = 0.001));
        prop_assert!(approx_eq!(f32, landed.y(), q.y(), epsilon = 0.001));
        Ok(())
    }

    /// Bounds merge should be associative: (a.merge(b)).merge(c) == a.merge(b.merge(c)).
    fn check_bounds_merge_is_associative(
        b1: Bounds,
        b2: Bounds,
        b3: Bounds,
    ) -> Result<(), TestCaseError> {
        let left_assoc = b1.merge(&b2).merge(&b3);
        let right_assoc = b1.merge(&b2.merge(&b3));

        prop_assert_eq!(left_assoc, right_assoc);
        Ok(())
    }

    /// Every cardinal anchor lies on or inside the bounds.
    fn check_cardinals_inside_bounds(bounds: Bounds) -> Result<(), TestCaseError> {
        for cardinal in Cardinal::ALL {
            let anchor = bounds.cardinal(cardinal);
            prop_assert!(
                bounds.contains(anchor),
                "{cardinal} anchor {anchor:?} outside {bounds:?}"
            );
        }
        Ok(())
    }

    /// A normalized non-zero vector has unit length.
    fn check_normalize_is_unit(p: Point) -> Result<(), TestCaseError> {
        let v = p.to_vector();
        prop_assume!(v.norm() > 0.001);

        prop_assert!(approx_eq!(f32, v.normalize().norm(), 1.0, epsilon = 1e-5));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn sub_then_translate_roundtrip(p in point_strategy(), q in point_strategy()) {
            check_sub_then_translate_roundtrip(p, q)?;
        }

        #[test]
        fn bounds_merge_is_associative(b1 in bounds_strategy(), b2 in bounds_strategy(), b3 in bounds_strategy()) {
            check_bounds_merge_is_associative(b1, b2, b3)?;
        }

        #[test]
        fn cardinals_inside_bounds(bounds in bounds_strategy()) {
            check_cardinals_inside_bounds(bounds)?;
        }

        #[test]
        fn normalize_is_unit(p in point_strategy()) {
            check_normalize_is_unit(p)?;
        }
    }
}

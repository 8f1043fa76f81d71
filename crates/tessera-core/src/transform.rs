//! Affine transformations.
//!
//! A [`Transform`] is a 2x3 affine matrix stored in SVG order:
//!
//! ```text
//! | a  c  e |     x' = a·x + c·y + e
//! | b  d  f |     y' = b·x + d·y + f
//! ```
//!
//! Composition reads left to right: `t1.then(t2)` applies `t1` first and
//! `t2` second, so nesting order never has to be reasoned about backwards.
//!
//! # Examples
//!
//! ```
//! # use tessera_core::{geometry::Point, transform::Transform};
//! let t = Transform::scaling(2.0, 2.0).then(&Transform::translation(1.0, 0.0));
//! let p = t.apply_point(Point::new(1.0, 1.0));
//! assert_eq!(p, Point::new(3.0, 2.0));
//! ```

use crate::geometry::{Bounds, Point, Vector};

/// Determinants below this magnitude are treated as singular.
const SINGULAR_EPSILON: f32 = 1e-12;

/// A composable affine map: linear part plus translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Creates a transform from raw matrix entries in SVG `matrix(a b c d e f)` order.
    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The identity map, neutral on both sides of [`then`](Self::then).
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Translation by `(dx, dy)`
    pub fn translation(dx: f32, dy: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    /// Rotation about the origin by `angle` radians (clockwise on screen, since +Y points down).
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Axis-aligned scaling about the origin
    pub fn scaling(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Mirror image across the y-axis (negates x)
    pub fn reflection_x() -> Self {
        Self::scaling(-1.0, 1.0)
    }

    /// Mirror image across the x-axis (negates y)
    pub fn reflection_y() -> Self {
        Self::scaling(1.0, -1.0)
    }

    /// Shear: `x' = x + kx·y`, `y' = y + ky·x`
    pub fn shear(kx: f32, ky: f32) -> Self {
        Self::new(1.0, ky, kx, 1.0, 0.0, 0.0)
    }

    /// Returns the map "apply `first`, then `second`".
    pub fn compose(first: &Transform, second: &Transform) -> Self {
        first.then(second)
    }

    /// Returns the map that applies `self` and then `next`.
    pub fn then(&self, next: &Transform) -> Self {
        let n = next;
        Self {
            a: n.a.mul_add(self.a, n.c * self.b),
            b: n.b.mul_add(self.a, n.d * self.b),
            c: n.a.mul_add(self.c, n.c * self.d),
            d: n.b.mul_add(self.c, n.d * self.d),
            e: n.a.mul_add(self.e, n.c * self.f) + n.e,
            f: n.b.mul_add(self.e, n.d * self.f) + n.f,
        }
    }

    /// Determinant of the linear part
    pub fn determinant(&self) -> f32 {
        self.a.mul_add(self.d, -(self.b * self.c))
    }

    /// Returns the inverse map, or `None` when the linear part is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return None;
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(Self {
            a,
            b,
            c,
            d,
            e: -a.mul_add(self.e, c * self.f),
            f: -b.mul_add(self.e, d * self.f),
        })
    }

    /// Maps a point, including the translation component.
    pub fn apply_point(&self, p: Point) -> Point {
        Point::new(
            self.a.mul_add(p.x(), self.c * p.y()) + self.e,
            self.b.mul_add(p.x(), self.d * p.y()) + self.f,
        )
    }

    /// Maps a direction; the translation component is ignored.
    pub fn apply_vector(&self, v: Vector) -> Vector {
        Vector::new(
            self.a.mul_add(v.x(), self.c * v.y()),
            self.b.mul_add(v.x(), self.d * v.y()),
        )
    }

    /// Applies the transpose of the linear part.
    ///
    /// For a map `x ↦ A·x + t`, the support of the mapped set along a unit
    /// direction `u` is the original support along `Aᵀ·u` plus `u·t`.
    pub fn apply_transposed(&self, v: Vector) -> Vector {
        Vector::new(
            self.a.mul_add(v.x(), self.b * v.y()),
            self.c.mul_add(v.x(), self.d * v.y()),
        )
    }

    /// The translation component as a vector
    pub fn translation_part(&self) -> Vector {
        Vector::new(self.e, self.f)
    }

    /// Axis-aligned bounds of the mapped corners of `bounds`.
    pub fn apply_bounds(&self, bounds: Bounds) -> Bounds {
        let [nw, ne, se, sw] = bounds.corners().map(|corner| self.apply_point(corner));
        let hull = Bounds::new(nw.x(), nw.y(), nw.x(), nw.y());
        [ne, se, sw].into_iter().fold(hull, |acc, p| {
            acc.merge(&Bounds::new(p.x(), p.y(), p.x(), p.y()))
        })
    }

    /// Returns true if this is exactly the identity map
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn transform_strategy() -> impl Strategy<Value = Transform> {
        (
            -3.2f32..3.2,
            0.25f32..4.0,
            0.25f32..4.0,
            -100.0f32..100.0,
            -100.0f32..100.0,
        )
            .prop_map(|(angle, sx, sy, dx, dy)| {
                Transform::scaling(sx, sy)
                    .then(&Transform::rotation(angle))
                    .then(&Transform::translation(dx, dy))
            })
    }

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-100.0f32..100.0, -100.0f32..100.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn points_close(p: Point, q: Point, epsilon: f32) -> bool {
        approx_eq!(f32, p.x(), q.x(), epsilon = epsilon)
            && approx_eq!(f32, p.y(), q.y(), epsilon = epsilon)
    }

    // ===================
    // Property Test Functions
    // ===================

    /// `(t1 then t2) then t3` maps points like `t1 then (t2 then t3)`.
    fn check_then_is_associative(
        t1: Transform,
        t2: Transform,
        t3: Transform,
        p: Point,
    ) -> Result<(), TestCaseError> {
        let left = t1.then(&t2).then(&t3).apply_point(p);
        let right = t1.then(&t2.then(&t3)).apply_point(p);

        prop_assert!(points_close(left, right, 0.05), "{left:?} != {right:?}");
        Ok(())
    }

    /// Identity is neutral on both sides.
    fn check_identity_is_neutral(t: Transform) -> Result<(), TestCaseError> {
        prop_assert_eq!(Transform::identity().then(&t), t);
        prop_assert_eq!(t.then(&Transform::identity()), t);
        Ok(())
    }

    /// Composing with the inverse maps points back to themselves.
    fn check_inverse_roundtrip(t: Transform, p: Point) -> Result<(), TestCaseError> {
        let inv = t.inverse();
        prop_assert!(inv.is_some());
        let inv = inv.unwrap_or_default();
        let back = inv.apply_point(t.apply_point(p));

        prop_assert!(points_close(back, p, 0.01), "{back:?} != {p:?}");
        Ok(())
    }

    /// Composition agrees with applying each map in turn.
    fn check_then_matches_sequential_application(
        t1: Transform,
        t2: Transform,
        p: Point,
    ) -> Result<(), TestCaseError> {
        let composed = t1.then(&t2).apply_point(p);
        let sequential = t2.apply_point(t1.apply_point(p));

        prop_assert!(points_close(composed, sequential, 0.01));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn then_is_associative(t1 in transform_strategy(), t2 in transform_strategy(), t3 in transform_strategy(), p in point_strategy()) {
            check_then_is_associative(t1, t2, t3, p)?;
        }

        #[test]
        fn identity_is_neutral(t in transform_strategy()) {
            check_identity_is_neutral(t)?;
        }

        #[test]
        fn inverse_roundtrip(t in transform_strategy(), p in point_strategy()) {
            check_inverse_roundtrip(t, p)?;
        }

        #[test]
        fn then_matches_sequential_application(t1 in transform_strategy(), t2 in transform_strategy(), p in point_strategy()) {
            check_then_matches_sequential_application(t1, t2, p)?;
        }
    }
}

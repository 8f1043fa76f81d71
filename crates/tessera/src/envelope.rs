//! Envelopes and bounding boxes.
//!
//! The envelope of a diagram is its support function: for a unit direction
//! `u`, the largest `u·p` over every point `p` the diagram covers, measured
//! from the diagram's local origin. Envelopes of overlaid diagrams combine
//! by pointwise maximum.
//!
//! Under a map `x ↦ A·x + t` the support of a shape becomes
//! `|Aᵀu| · h(Aᵀu / |Aᵀu|) + u·t`, where `h` is the shape's own support.
//! That single rule covers rotation, non-uniform scaling, reflection and
//! translation, so composed diagrams are evaluated by accumulating the
//! transform from the root down to each primitive.

use tessera_core::{
    geometry::{Bounds, Vector},
    transform::Transform,
};

use crate::diagram::{Diagram, Node};

impl Diagram {
    /// Support of the diagram along `direction`, or `None` when the
    /// diagram contains no primitive.
    ///
    /// `direction` does not need to be normalized. A zero direction has no
    /// extent and evaluates to `0.0` for any non-empty diagram.
    pub(crate) fn support(&self, direction: Vector) -> Option<f32> {
        let unit = direction.normalize();
        let mut stack = vec![(self, Transform::identity())];
        let mut best: Option<f32> = None;

        while let Some((diagram, acc)) = stack.pop() {
            let value = match diagram.node() {
                Node::Empty => None,
                Node::Primitive(primitive) => {
                    let total = primitive.transform().then(&acc);
                    Some(transformed_support(&total, unit, |u| {
                        primitive.shape().support(u)
                    }))
                }
                Node::Compose { top, bottom } => {
                    stack.push((top, acc));
                    stack.push((bottom, acc));
                    None
                }
                Node::Transformed { transform, diagram } => {
                    stack.push((diagram, transform.then(&acc)));
                    None
                }
                Node::Styled { diagram, .. } | Node::Named { diagram, .. } => {
                    stack.push((diagram, acc));
                    None
                }
            };
            if let Some(value) = value {
                best = Some(best.map_or(value, |b| b.max(value)));
            }
        }
        best
    }

    /// Extent of the diagram along `direction`.
    ///
    /// The empty diagram, and any diagram without primitives, has a zero
    /// envelope in every direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::{creation::circle, geometry::Vector};
    /// # fn main() -> Result<(), tessera::TesseraError> {
    /// let c = circle(1.0)?.translate(3.0, 0.0);
    /// assert_eq!(c.envelope(Vector::UNIT_X), 4.0);
    /// assert_eq!(c.envelope(-Vector::UNIT_X), -2.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn envelope(&self, direction: Vector) -> f32 {
        self.support(direction).unwrap_or(0.0)
    }

    /// Smallest axis-aligned box containing the diagram, in its local frame.
    ///
    /// Sampled from the envelope along the four axis directions. The empty
    /// diagram yields a zero-sized box at the origin.
    pub fn bounding_box(&self) -> Bounds {
        let east = self.support(Vector::UNIT_X);
        let west = self.support(-Vector::UNIT_X);
        let south = self.support(Vector::UNIT_Y);
        let north = self.support(-Vector::UNIT_Y);
        match (east, west, south, north) {
            (Some(east), Some(west), Some(south), Some(north)) => {
                Bounds::new(-west, -north, east, south)
            }
            _ => Bounds::default(),
        }
    }

    /// Width of the bounding box
    pub fn width(&self) -> f32 {
        self.bounding_box().width()
    }

    /// Height of the bounding box
    pub fn height(&self) -> f32 {
        self.bounding_box().height()
    }
}

/// Support of a shape mapped by `transform` along the unit direction `unit`.
fn transformed_support(transform: &Transform, unit: Vector, shape: impl Fn(Vector) -> f32) -> f32 {
    let offset = unit.dot(transform.translation_part());
    let pulled = transform.apply_transposed(unit);
    let scale = pulled.norm();
    if scale == 0.0 {
        return offset;
    }
    scale * shape(pulled.scale(1.0 / scale)) + offset
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    use float_cmp::assert_approx_eq;
    use tessera_core::shape::{Circle, Rectangle, Shape};

    use super::*;

    fn circle(radius: f32) -> Diagram {
        Diagram::primitive(Shape::from(Circle::new(radius).unwrap()))
    }

    fn rect(width: f32, height: f32) -> Diagram {
        Diagram::primitive(Shape::from(Rectangle::new(width, height, None).unwrap()))
    }

    #[test]
    fn test_empty_envelope_is_zero() {
        let empty = Diagram::empty();
        assert_approx_eq!(f32, empty.envelope(Vector::UNIT_X), 0.0);
        assert_approx_eq!(f32, empty.envelope(Vector::new(-3.0, 4.0)), 0.0);
        assert_eq!(empty.bounding_box(), Bounds::default());
    }

    #[test]
    fn test_circle_envelope_every_direction() {
        let c = circle(2.0);
        for step in 0..12 {
            let direction = Vector::from_angle(step as f32 * FRAC_PI_4 / 1.5);
            assert_approx_eq!(f32, c.envelope(direction), 2.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_envelope_unnormalized_direction() {
        let c = circle(1.0);
        assert_approx_eq!(f32, c.envelope(Vector::new(10.0, 0.0)), 1.0);
    }

    #[test]
    fn test_composed_envelope_is_max() {
        let pair = circle(1.0).atop(&circle(3.0).translate(1.0, 0.0));
        assert_approx_eq!(f32, pair.envelope(Vector::UNIT_X), 4.0);
        assert_approx_eq!(f32, pair.envelope(-Vector::UNIT_X), 2.0);
        assert_approx_eq!(f32, pair.envelope(Vector::UNIT_Y), 3.0);
    }

    #[test]
    fn test_rectangle_bounding_box() {
        let bounds = rect(4.0, 2.0).bounding_box();
        assert_approx_eq!(f32, bounds.min_x(), -2.0);
        assert_approx_eq!(f32, bounds.max_x(), 2.0);
        assert_approx_eq!(f32, bounds.min_y(), -1.0);
        assert_approx_eq!(f32, bounds.max_y(), 1.0);
    }

    #[test]
    fn test_rotated_rectangle_swaps_axes() {
        let bounds = rect(4.0, 2.0).rotate(FRAC_PI_2).bounding_box();
        assert_approx_eq!(f32, bounds.width(), 2.0, epsilon = 1e-5);
        assert_approx_eq!(f32, bounds.height(), 4.0, epsilon = 1e-5);
    }

    #[test]
    fn test_non_uniform_scale() {
        let ellipse = circle(1.0).scale_xy(3.0, 0.5);
        let bounds = ellipse.bounding_box();
        assert_approx_eq!(f32, bounds.max_x(), 3.0, epsilon = 1e-6);
        assert_approx_eq!(f32, bounds.max_y(), 0.5, epsilon = 1e-6);
        // Diagonal support of an ellipse: sqrt(a²ux² + b²uy²)
        let diagonal = Vector::new(1.0, 1.0);
        let expected = ((9.0 + 0.25) / 2.0f32).sqrt();
        assert_approx_eq!(f32, ellipse.envelope(diagonal), expected, epsilon = 1e-5);
    }

    #[test]
    fn test_translation_through_nested_nodes() {
        let nested = circle(1.0)
            .atop(&circle(1.0))
            .named("pair")
            .translate(5.0, 0.0)
            .line_width(0.1)
            .unwrap()
            .translate(0.0, -2.0);
        let bounds = nested.bounding_box();
        assert_approx_eq!(f32, bounds.center().x(), 5.0, epsilon = 1e-6);
        assert_approx_eq!(f32, bounds.center().y(), -2.0, epsilon = 1e-6);
        assert_approx_eq!(f32, bounds.width(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_collapsed_scale_keeps_translation() {
        let flat = circle(1.0).scale(0.0).translate(2.0, 0.0);
        assert_approx_eq!(f32, flat.envelope(Vector::UNIT_X), 2.0);
        assert_approx_eq!(f32, flat.envelope(-Vector::UNIT_X), -2.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;
    use tessera_core::shape::{Rectangle, Shape};

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn rect_strategy() -> impl Strategy<Value = Diagram> {
        (0.1f32..20.0, 0.1f32..20.0).prop_map(|(w, h)| {
            Diagram::primitive(Shape::from(
                Rectangle::new(w, h, None).unwrap_or_else(|_| unreachable!("positive sides")),
            ))
        })
    }

    fn transform_strategy() -> impl Strategy<Value = Transform> {
        (-10.0f32..10.0, -10.0f32..10.0, -3.2f32..3.2, 0.2f32..4.0).prop_map(
            |(dx, dy, angle, s)| {
                Transform::rotation(angle)
                    .then(&Transform::scaling(s, s))
                    .then(&Transform::translation(dx, dy))
            },
        )
    }

    /// Rotation, non-uniform scaling and translation in one map.
    fn general_transform_strategy() -> impl Strategy<Value = Transform> {
        (
            -10.0f32..10.0,
            -10.0f32..10.0,
            -3.2f32..3.2,
            0.2f32..4.0,
            0.2f32..4.0,
        )
            .prop_map(|(dx, dy, angle, sx, sy)| {
                Transform::rotation(angle)
                    .then(&Transform::scaling(sx, sy))
                    .then(&Transform::translation(dx, dy))
            })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// The envelope of a transformed rectangle equals the largest projection
    /// of its mapped corners.
    fn check_envelope_matches_mapped_corners(
        diagram: Diagram,
        transform: Transform,
        angle: f32,
    ) -> Result<(), TestCaseError> {
        let local = diagram.bounding_box();
        let direction = Vector::from_angle(angle);
        let expected = local
            .corners()
            .iter()
            .map(|c| transform.apply_point(*c).to_vector().dot(direction))
            .fold(f32::MIN, f32::max);

        let actual = diagram.transform(transform).envelope(direction);
        prop_assert!(
            approx_eq!(f32, actual, expected, epsilon = 1e-2),
            "{actual} != {expected}"
        );
        Ok(())
    }

    /// Overlay never shrinks extent.
    fn check_atop_is_pointwise_max(
        a: Diagram,
        b: Diagram,
        angle: f32,
    ) -> Result<(), TestCaseError> {
        let direction = Vector::from_angle(angle);
        let combined = a.atop(&b).envelope(direction);
        let expected = a.envelope(direction).max(b.envelope(direction));
        prop_assert!(approx_eq!(f32, combined, expected, epsilon = 1e-5));
        Ok(())
    }

    /// A transform on a composition acts like the same transform on each
    /// layer, and both agree with the mapped rectangle corners.
    fn check_transformed_composition(
        a: Diagram,
        b: Diagram,
        dx: f32,
        dy: f32,
        transform: Transform,
        angle: f32,
    ) -> Result<(), TestCaseError> {
        let b = b.translate(dx, dy);
        let composed = a.atop(&b).transform(transform);
        let is_transformed = matches!(composed.node(), Node::Transformed { .. });
        prop_assert!(is_transformed);

        let direction = Vector::from_angle(angle);
        let actual = composed.envelope(direction);
        let per_layer = a
            .transform(transform)
            .envelope(direction)
            .max(b.transform(transform).envelope(direction));
        prop_assert!(
            approx_eq!(f32, actual, per_layer, epsilon = 1e-3),
            "{actual} != {per_layer}"
        );

        let corners = a
            .bounding_box()
            .corners()
            .into_iter()
            .chain(b.bounding_box().corners());
        let expected = corners
            .map(|c| transform.apply_point(c).to_vector().dot(direction))
            .fold(f32::MIN, f32::max);
        prop_assert!(
            approx_eq!(f32, actual, expected, epsilon = 1e-2),
            "{actual} != {expected}"
        );
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn envelope_matches_mapped_corners(
            diagram in rect_strategy(),
            transform in transform_strategy(),
            angle in -3.2f32..3.2,
        ) {
            check_envelope_matches_mapped_corners(diagram, transform, angle)?;
        }

        #[test]
        fn atop_is_pointwise_max(
            a in rect_strategy(),
            b in rect_strategy(),
            offset in transform_strategy(),
            angle in -3.2f32..3.2,
        ) {
            check_atop_is_pointwise_max(a, b.transform(offset), angle)?;
        }

        #[test]
        fn transformed_composition(
            a in rect_strategy(),
            b in rect_strategy(),
            dx in -10.0f32..10.0,
            dy in -10.0f32..10.0,
            transform in general_transform_strategy(),
            angle in -3.2f32..3.2,
        ) {
            check_transformed_composition(a, b, dx, dy, transform, angle)?;
        }
    }
}

//! Named subdiagram lookup.
//!
//! Names are weak labels: a [`Name`] identifies a subtree for geometric
//! queries and nothing else. When a label occurs more than once, the first
//! match of a depth-first pre-order walk wins, and a composition's top
//! layer is visited before its bottom layer.

use log::debug;

use tessera_core::{
    geometry::{Bounds, Cardinal, Point},
    name::{Label, Name},
    transform::Transform,
};

use crate::diagram::{Diagram, Node};

/// A named subtree located inside a larger diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Subdiagram {
    diagram: Diagram,
    transform: Transform,
}

impl Subdiagram {
    /// The subtree below the named node, in its own local frame
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Accumulated map from the subtree's frame to the root frame
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Bounding box of the subtree mapped forward into the root frame.
    pub fn bounding_box(&self) -> Bounds {
        self.transform.apply_bounds(self.diagram.bounding_box())
    }
}

impl Diagram {
    /// Finds the first subtree tagged with `name`.
    pub fn find_named(&self, name: impl Label) -> Option<Subdiagram> {
        let Some(name) = name.resolve() else {
            debug!(name = name.to_string(); "Name was never created");
            return None;
        };
        let mut stack = vec![(self, Transform::identity())];

        while let Some((diagram, acc)) = stack.pop() {
            match diagram.node() {
                Node::Empty | Node::Primitive(_) => {}
                Node::Compose { top, bottom } => {
                    stack.push((bottom, acc));
                    stack.push((top, acc));
                }
                Node::Transformed { transform, diagram } => {
                    stack.push((diagram, transform.then(&acc)));
                }
                Node::Styled { diagram, .. } => stack.push((diagram, acc)),
                Node::Named {
                    name: label,
                    diagram,
                } => {
                    if *label == name {
                        debug!(name = name.to_string(); "Found named subdiagram");
                        return Some(Subdiagram {
                            diagram: diagram.clone(),
                            transform: acc,
                        });
                    }
                    stack.push((diagram, acc));
                }
            }
        }

        debug!(name = name.to_string(); "Named subdiagram not found");
        None
    }

    /// Bounding box of the subtree tagged with `name`, in this diagram's frame.
    ///
    /// Returns `None` when no node carries the name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::creation::circle;
    /// # fn main() -> Result<(), tessera::TesseraError> {
    /// let diagram = circle(1.0)?.named("A").beside(&circle(1.0)?.named("B"));
    ///
    /// let b = diagram.subdiagram_bounding_box("B").unwrap();
    /// assert_eq!(b.center().x(), 2.0);
    /// assert!(diagram.subdiagram_bounding_box("C").is_none());
    /// # Ok(())
    /// # }
    /// ```
    pub fn subdiagram_bounding_box(&self, name: impl Label) -> Option<Bounds> {
        self.find_named(name).map(|sub| sub.bounding_box())
    }

    /// Resolves a cardinal anchor of a named subtree, in this diagram's frame.
    pub fn anchor(&self, name: impl Label, cardinal: Cardinal) -> Option<Point> {
        self.subdiagram_bounding_box(name)
            .map(|bounds| bounds.cardinal(cardinal))
    }

    /// Every name in the diagram, in depth-first pre-order with top layers first.
    ///
    /// Duplicates are kept.
    pub fn names(&self) -> Vec<Name> {
        let mut names = Vec::new();
        let mut stack = vec![self];

        while let Some(diagram) = stack.pop() {
            match diagram.node() {
                Node::Empty | Node::Primitive(_) => {}
                Node::Compose { top, bottom } => {
                    stack.push(bottom);
                    stack.push(top);
                }
                Node::Transformed { diagram, .. } | Node::Styled { diagram, .. } => {
                    stack.push(diagram)
                }
                Node::Named { name, diagram } => {
                    names.push(*name);
                    stack.push(diagram);
                }
            }
        }
        names
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

    fn bounds_close(actual: Bounds, expected: Bounds) -> bool {
        approx_eq!(f32, actual.min_x(), expected.min_x(), epsilon = 1e-2)
            && approx_eq!(f32, actual.min_y(), expected.min_y(), epsilon = 1e-2)
            && approx_eq!(f32, actual.max_x(), expected.max_x(), epsilon = 1e-2)
            && approx_eq!(f32, actual.max_y(), expected.max_y(), epsilon = 1e-2)
    }

    /// A named composition under a general transform reports its local box
    /// mapped forward by that transform.
    fn check_named_composition_box(
        a: Diagram,
        b: Diagram,
        dx: f32,
        dy: f32,
        transform: Transform,
    ) -> Result<(), TestCaseError> {
        let pair = a.atop(&b.translate(dx, dy));
        let diagram = pair
            .named("pair")
            .atop(&a.translate(50.0, 50.0))
            .transform(transform);

        let Some(found) = diagram.find_named("pair") else {
            return Err(TestCaseError::fail("named composition not found"));
        };
        prop_assert_eq!(found.diagram(), &pair);

        let actual = diagram.subdiagram_bounding_box("pair");
        let expected = transform.apply_bounds(pair.bounding_box());
        prop_assert!(
            actual.is_some_and(|bounds| bounds_close(bounds, expected)),
            "{actual:?} != {expected:?}"
        );
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn named_composition_box(
            a in rect_strategy(),
            b in rect_strategy(),
            dx in -10.0f32..10.0,
            dy in -10.0f32..10.0,
            transform in general_transform_strategy(),
        ) {
            check_named_composition_box(a, b, dx, dy, transform)?;
        }
    }
}

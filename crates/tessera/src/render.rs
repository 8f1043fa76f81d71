//! The walk a renderer performs over a finished diagram.
//!
//! [`Diagram::primitives`] flattens the tree into the list a backend
//! paints: every primitive with its full root-frame transform and its
//! resolved style, back to front.

use tessera_core::{
    shape::Shape,
    style::{ResolvedStyle, Style},
    transform::Transform,
};

use crate::diagram::{Diagram, Node};

/// One shape ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPrimitive<'a> {
    shape: &'a Shape,
    transform: Transform,
    style: ResolvedStyle,
}

impl<'a> ResolvedPrimitive<'a> {
    pub fn shape(&self) -> &'a Shape {
        self.shape
    }

    /// Map from the shape's local frame to the root frame
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }
}

impl Diagram {
    /// Flattens the diagram in paint order.
    ///
    /// The first item is painted first and the last item ends up on top.
    /// Styles are merged so that an attribute set closer to the root wins,
    /// then completed from `defaults`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::{color::Color, creation::{circle, square}, style::ResolvedStyle};
    /// # fn main() -> Result<(), tessera::TesseraError> {
    /// let blue = Color::new("blue")?;
    /// let diagram = circle(1.0)?.atop(&square(1.0)?).fill_color(blue);
    ///
    /// let items = diagram.primitives(&ResolvedStyle::default());
    /// assert_eq!(items.len(), 2);
    /// assert_eq!(items[0].shape().kind(), "rectangle");
    /// assert_eq!(items[1].style().fill_color(), Some(blue));
    /// # Ok(())
    /// # }
    /// ```
    pub fn primitives(&self, defaults: &ResolvedStyle) -> Vec<ResolvedPrimitive<'_>> {
        let mut items = Vec::new();
        let mut stack = vec![(self, Transform::identity(), Style::new())];

        while let Some((diagram, acc, style)) = stack.pop() {
            match diagram.node() {
                Node::Empty => {}
                Node::Primitive(primitive) => items.push(ResolvedPrimitive {
                    shape: primitive.shape(),
                    transform: primitive.transform().then(&acc),
                    style: style.over(primitive.style()).resolve(defaults),
                }),
                Node::Compose { top, bottom } => {
                    stack.push((top, acc, style.clone()));
                    stack.push((bottom, acc, style));
                }
                Node::Transformed { transform, diagram } => {
                    stack.push((diagram, transform.then(&acc), style));
                }
                Node::Styled {
                    style: inner,
                    diagram,
                } => stack.push((diagram, acc, style.over(inner))),
                Node::Named { diagram, .. } => stack.push((diagram, acc, style)),
            }
        }
        items
    }
}

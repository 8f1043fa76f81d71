//! The immutable diagram tree.
//!
//! A [`Diagram`] is a cheap handle to a shared, immutable [`Node`]. Every
//! operation returns a new handle whose node references the existing,
//! unmodified children, so combining diagrams never copies subtrees and
//! never mutates a diagram another handle can observe.
//!
//! # Node kinds
//!
//! - [`Node::Empty`] - renders nothing and has no extent
//! - [`Node::Primitive`] - one [`Shape`] with its own transform and style
//! - [`Node::Compose`] - two diagrams overlaid, `top` painted over `bottom`
//! - [`Node::Transformed`] - a subdiagram mapped by a [`Transform`]
//! - [`Node::Styled`] - a subdiagram under a partial [`Style`]
//! - [`Node::Named`] - a subdiagram tagged with a [`Name`] for later lookup
//!
//! # Examples
//!
//! ```
//! # use tessera::{color::Color, creation::{circle, square}};
//! # fn main() -> Result<(), tessera::TesseraError> {
//! let orange = Color::new("orange")?;
//! let diagram = circle(1.0)?
//!     .fill_color(orange)
//!     .atop(&square(1.0)?)
//!     .translate(2.0, 0.0);
//!
//! assert!(!diagram.is_empty());
//! # Ok(())
//! # }
//! ```

use std::{f32::consts::PI, sync::Arc};

use tessera_core::{
    color::Color,
    error::ShapeError,
    geometry::Vector,
    name::Name,
    shape::Shape,
    style::{Dashing, Style},
    transform::Transform,
};

/// A leaf: one shape together with the transform and style folded into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    shape: Shape,
    transform: Transform,
    style: Style,
}

impl Primitive {
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The map from the shape's local frame to the primitive's frame
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn style(&self) -> &Style {
        &self.style
    }
}

/// One node of the diagram tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Empty,
    Primitive(Primitive),
    /// `top` is painted over `bottom` and is searched first for names.
    Compose {
        top: Diagram,
        bottom: Diagram,
    },
    Transformed {
        transform: Transform,
        diagram: Diagram,
    },
    Styled {
        style: Style,
        diagram: Diagram,
    },
    Named {
        name: Name,
        diagram: Diagram,
    },
}

/// A handle to an immutable diagram tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    node: Arc<Node>,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Shape> for Diagram {
    fn from(shape: Shape) -> Self {
        Self::primitive(shape)
    }
}

impl Diagram {
    fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// The empty diagram: no extent, renders nothing, identity of [`atop`](Self::atop).
    pub fn empty() -> Self {
        Self::from_node(Node::Empty)
    }

    /// A leaf diagram holding `shape` with an identity transform and no style.
    pub fn primitive(shape: Shape) -> Self {
        Self::from_node(Node::Primitive(Primitive {
            shape,
            transform: Transform::identity(),
            style: Style::new(),
        }))
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn is_empty(&self) -> bool {
        matches!(*self.node, Node::Empty)
    }

    /// Overlays `self` on top of `other`.
    ///
    /// `self` is painted last and is searched first when looking up names.
    /// The empty diagram is an identity on both sides.
    pub fn atop(&self, other: &Diagram) -> Diagram {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        Self::from_node(Node::Compose {
            top: self.clone(),
            bottom: other.clone(),
        })
    }

    /// Maps the diagram by `transform`, applied after any transform already on it.
    pub fn transform(&self, transform: Transform) -> Diagram {
        match &*self.node {
            Node::Empty => self.clone(),
            Node::Primitive(primitive) => Self::from_node(Node::Primitive(Primitive {
                transform: primitive.transform.then(&transform),
                ..primitive.clone()
            })),
            Node::Transformed {
                transform: inner,
                diagram,
            } => Self::from_node(Node::Transformed {
                transform: inner.then(&transform),
                diagram: diagram.clone(),
            }),
            _ => Self::from_node(Node::Transformed {
                transform,
                diagram: self.clone(),
            }),
        }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Diagram {
        self.transform(Transform::translation(dx, dy))
    }

    pub fn translate_by(&self, offset: Vector) -> Diagram {
        self.translate(offset.x(), offset.y())
    }

    /// Rotates about the origin by `angle` radians (clockwise on screen).
    pub fn rotate(&self, angle: f32) -> Diagram {
        self.transform(Transform::rotation(angle))
    }

    /// Rotates about the origin by a fraction of a full turn.
    pub fn rotate_by(&self, turns: f32) -> Diagram {
        self.rotate(turns * 2.0 * PI)
    }

    /// Uniform scaling about the origin
    pub fn scale(&self, factor: f32) -> Diagram {
        self.scale_xy(factor, factor)
    }

    pub fn scale_xy(&self, sx: f32, sy: f32) -> Diagram {
        self.transform(Transform::scaling(sx, sy))
    }

    /// Mirrors across the y-axis.
    pub fn reflect_x(&self) -> Diagram {
        self.transform(Transform::reflection_x())
    }

    /// Mirrors across the x-axis.
    pub fn reflect_y(&self) -> Diagram {
        self.transform(Transform::reflection_y())
    }

    /// Applies a partial style record.
    ///
    /// Attributes set here win over the same attributes already set anywhere
    /// inside the diagram. Unset attributes leave the inner ones visible.
    pub fn style(&self, style: Style) -> Diagram {
        if style.is_empty() {
            return self.clone();
        }
        match &*self.node {
            Node::Empty => self.clone(),
            Node::Primitive(primitive) => Self::from_node(Node::Primitive(Primitive {
                style: style.over(&primitive.style),
                ..primitive.clone()
            })),
            Node::Styled {
                style: inner,
                diagram,
            } => Self::from_node(Node::Styled {
                style: style.over(inner),
                diagram: diagram.clone(),
            }),
            _ => Self::from_node(Node::Styled {
                style,
                diagram: self.clone(),
            }),
        }
    }

    pub fn fill_color(&self, color: Color) -> Diagram {
        self.style(Style::new().with_fill_color(color))
    }

    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidOpacity`] outside `[0, 1]`.
    pub fn fill_opacity(&self, opacity: f32) -> Result<Diagram, ShapeError> {
        Ok(self.style(Style::new().with_fill_opacity(opacity)?))
    }

    pub fn line_color(&self, color: Color) -> Diagram {
        self.style(Style::new().with_line_color(color))
    }

    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidDimension`] for a negative or non-finite width.
    pub fn line_width(&self, width: f32) -> Result<Diagram, ShapeError> {
        Ok(self.style(Style::new().with_line_width(width)?))
    }

    pub fn dashing(&self, dashing: Dashing) -> Diagram {
        self.style(Style::new().with_dashing(dashing))
    }

    /// Tags the diagram with `name` so it can be found by
    /// [`subdiagram_bounding_box`](Self::subdiagram_bounding_box) and the connectors.
    pub fn named(&self, name: impl Into<Name>) -> Diagram {
        Self::from_node(Node::Named {
            name: name.into(),
            diagram: self.clone(),
        })
    }
}

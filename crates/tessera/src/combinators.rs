//! Envelope-driven placement.
//!
//! These combinators position diagrams from their own extent rather than
//! from explicit offsets. [`Diagram::beside_along`] is the general form:
//! it moves the second diagram along a direction by exactly the sum of the
//! two envelopes that face each other, so the diagrams touch without
//! overlapping whatever their shape, rotation or prior transforms.
//!
//! Directions follow the SVG convention: [`Diagram::beside`] places to the
//! right (+X) and [`Diagram::above`] places the second diagram below the
//! first (+Y, which points down the page).
//!
//! The operators `+`, `|` and `/` are shorthand for [`Diagram::atop`],
//! [`Diagram::beside`] and [`Diagram::above`]. Note that `/` binds tighter
//! than `|` and `+`.
//!
//! # Examples
//!
//! ```
//! # use tessera::{combinators::hcat, creation::{circle, square}};
//! # fn main() -> Result<(), tessera::TesseraError> {
//! let row = hcat([circle(1.0)?, square(2.0)?, circle(1.0)?]);
//! assert_eq!(row.width(), 6.0);
//! # Ok(())
//! # }
//! ```

use log::trace;

use tessera_core::geometry::Vector;

use crate::diagram::Diagram;

impl Diagram {
    /// Returns `other` moved along `direction` until it touches `self`.
    ///
    /// `self` is left out of the result. With an empty diagram on either
    /// side, or a zero direction, `other` is returned unmoved.
    pub fn juxtapose(&self, other: &Diagram, direction: Vector) -> Diagram {
        let unit = direction.normalize();
        if self.is_empty() || other.is_empty() || unit.is_zero() {
            return other.clone();
        }
        let offset = self.envelope(unit) + other.envelope(-unit);
        trace!(offset, dx = unit.x(), dy = unit.y(); "Juxtaposing diagrams");
        other.translate_by(unit.scale(offset))
    }

    /// Places `other` next to `self` along `direction` and overlays them,
    /// with `self` on top.
    pub fn beside_along(&self, other: &Diagram, direction: Vector) -> Diagram {
        self.atop(&self.juxtapose(other, direction))
    }

    /// Places `other` to the right of `self`.
    pub fn beside(&self, other: &Diagram) -> Diagram {
        self.beside_along(other, Vector::UNIT_X)
    }

    /// Places `other` below `self` (toward +Y).
    pub fn above(&self, other: &Diagram) -> Diagram {
        self.beside_along(other, Vector::UNIT_Y)
    }

    /// Translates so the bounding box center sits on the origin.
    pub fn center_xy(&self) -> Diagram {
        let center = self.bounding_box().center();
        self.translate(-center.x(), -center.y())
    }

    /// Translates horizontally so the left edge lies on the y-axis.
    pub fn align_left(&self) -> Diagram {
        self.translate(self.envelope(-Vector::UNIT_X), 0.0)
    }

    /// Translates horizontally so the right edge lies on the y-axis.
    pub fn align_right(&self) -> Diagram {
        self.translate(-self.envelope(Vector::UNIT_X), 0.0)
    }

    /// Translates vertically so the top (minimum-y) edge lies on the x-axis.
    pub fn align_top(&self) -> Diagram {
        self.translate(0.0, self.envelope(-Vector::UNIT_Y))
    }

    /// Translates vertically so the bottom (maximum-y) edge lies on the x-axis.
    pub fn align_bottom(&self) -> Diagram {
        self.translate(0.0, -self.envelope(Vector::UNIT_Y))
    }

    /// Scales uniformly so the bounding box is `width` wide.
    ///
    /// A diagram with zero width cannot be scaled to any width and is
    /// returned unchanged.
    pub fn scale_uniform_to_x(&self, width: f32) -> Diagram {
        let current = self.width();
        if current == 0.0 {
            return self.clone();
        }
        self.scale(width / current)
    }

    /// Scales uniformly so the bounding box is `height` tall.
    ///
    /// A diagram with zero height is returned unchanged.
    pub fn scale_uniform_to_y(&self, height: f32) -> Diagram {
        let current = self.height();
        if current == 0.0 {
            return self.clone();
        }
        self.scale(height / current)
    }
}

/// Overlays a sequence of diagrams; the first ends up on top.
pub fn concat(diagrams: impl IntoIterator<Item = Diagram>) -> Diagram {
    diagrams
        .into_iter()
        .fold(Diagram::empty(), |acc, d| acc.atop(&d))
}

/// Places each diagram next to the previous ones along `direction`,
/// leaving `gap` between neighbors.
pub fn cat_along(
    diagrams: impl IntoIterator<Item = Diagram>,
    direction: Vector,
    gap: f32,
) -> Diagram {
    let unit = direction.normalize();
    let spacing = unit.scale(gap);
    diagrams
        .into_iter()
        .fold(Diagram::empty(), |acc, d| {
            if acc.is_empty() || gap == 0.0 {
                acc.beside_along(&d, unit)
            } else {
                acc.atop(&acc.juxtapose(&d, unit).translate_by(spacing))
            }
        })
}

/// Lays diagrams out left to right.
pub fn hcat(diagrams: impl IntoIterator<Item = Diagram>) -> Diagram {
    cat_along(diagrams, Vector::UNIT_X, 0.0)
}

/// Lays diagrams out top to bottom.
pub fn vcat(diagrams: impl IntoIterator<Item = Diagram>) -> Diagram {
    cat_along(diagrams, Vector::UNIT_Y, 0.0)
}

/// Lays diagrams out left to right with `gap` between neighbors.
pub fn hcat_sep(diagrams: impl IntoIterator<Item = Diagram>, gap: f32) -> Diagram {
    cat_along(diagrams, Vector::UNIT_X, gap)
}

/// Lays diagrams out top to bottom with `gap` between neighbors.
pub fn vcat_sep(diagrams: impl IntoIterator<Item = Diagram>, gap: f32) -> Diagram {
    cat_along(diagrams, Vector::UNIT_Y, gap)
}

/// Implements a binary operator for every owned/borrowed pairing of
/// [`Diagram`] by delegating to a method taking `&Diagram`.
macro_rules! diagram_operator {
    ($trait:ident, $op:ident, $method:ident) => {
        impl std::ops::$trait<&Diagram> for &Diagram {
            type Output = Diagram;

            fn $op(self, rhs: &Diagram) -> Diagram {
                self.$method(rhs)
            }
        }

        impl std::ops::$trait<Diagram> for &Diagram {
            type Output = Diagram;

            fn $op(self, rhs: Diagram) -> Diagram {
                self.$method(&rhs)
            }
        }

        impl std::ops::$trait<&Diagram> for Diagram {
            type Output = Diagram;

            fn $op(self, rhs: &Diagram) -> Diagram {
                self.$method(rhs)
            }
        }

        impl std::ops::$trait<Diagram> for Diagram {
            type Output = Diagram;

            fn $op(self, rhs: Diagram) -> Diagram {
                self.$method(&rhs)
            }
        }
    };
}

diagram_operator!(Add, add, atop);
diagram_operator!(BitOr, bitor, beside);
diagram_operator!(Div, div, above);

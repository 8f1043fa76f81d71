//! Tessera - declarative vector diagrams.
//!
//! Diagrams are built from primitive shapes and combined with algebraic
//! operators. Placement comes from each diagram's own envelope, so
//! composing never requires computing coordinates by hand.
//!
//! # Overview
//!
//! - [`creation`] - leaf constructors: circles, rectangles, polygons, paths, arcs, text, images
//! - [`Diagram`] - the immutable tree, with transform, style and naming operations
//! - [`combinators`] - `beside`, `above`, `hcat`, `vcat`, `concat` and alignment
//! - Queries - [`Diagram::envelope`], [`Diagram::bounding_box`],
//!   [`Diagram::subdiagram_bounding_box`]
//! - Connectors - [`Diagram::connect`] and [`Diagram::connect_outer`]
//! - Rendering contract - [`Diagram::primitives`]
//! - [`config`] - default style and font settings loaded from TOML
//! - [`text`] - text measurement
//!
//! # Example
//!
//! ```
//! use tessera::{
//!     color::Color,
//!     combinators::hcat,
//!     creation::{circle, square, triangle},
//!     geometry::Cardinal,
//! };
//!
//! # fn main() -> Result<(), tessera::TesseraError> {
//! let row = hcat([
//!     circle(1.0)?.named("left"),
//!     square(2.0)?.fill_color(Color::new("orange")?),
//!     triangle(2.0)?.named("right"),
//! ]);
//!
//! let linked = row.connect_outer("left", Cardinal::North, "right", Cardinal::North)?;
//! assert_eq!(linked.primitives(&Default::default()).len(), 4);
//! # Ok(())
//! # }
//! ```

pub mod combinators;
pub mod config;
pub mod creation;
pub mod text;

mod connect;
mod diagram;
mod envelope;
mod error;
mod render;
mod trace;

pub use tessera_core::{color, geometry, name, shape, style, transform};

pub use tessera_core::error::ShapeError;

pub use diagram::{Diagram, Node, Primitive};
pub use error::TesseraError;
pub use render::ResolvedPrimitive;
pub use trace::Subdiagram;

//! Tessera Core Types and Definitions
//!
//! This crate provides the value types the Tessera diagram algebra is built
//! from. It includes:
//!
//! - **Geometry**: Points, vectors, sizes, bounds and cardinal anchors ([`geometry`] module)
//! - **Transforms**: Composable affine maps ([`transform::Transform`])
//! - **Shapes**: Primitive shapes with analytic support functions ([`shape`] module)
//! - **Styles**: Partial and resolved style records ([`style`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Names**: Interned subdiagram labels ([`name::Name`])
//! - **Errors**: Construction errors ([`error::ShapeError`])

pub mod color;
pub mod error;
pub mod geometry;
pub mod name;
pub mod shape;
pub mod style;
pub mod transform;

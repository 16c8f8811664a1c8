//! Shapes for the selkit utilities.
//!
//! Currently a single value object, [`Rectangle`].

/// Axis-aligned rectangle.
pub mod rectangle;

pub use rectangle::{Rectangle, make_rectangle};

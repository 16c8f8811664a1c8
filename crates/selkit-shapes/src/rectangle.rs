//! A width/height pair whose area is always derived from the current fields.

use selkit_json::{Arguments, JsonError, Positional};
use serde::{Deserialize, Serialize};

/// The dimensions of a rectangular object.
///
/// Fields are public and may be changed freely; [`Rectangle::area`] is
/// recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height` for the current field values.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Create a new rectangle with the given dimensions.
#[must_use]
pub const fn make_rectangle(width: f64, height: f64) -> Rectangle {
    Rectangle::new(width, height)
}

/// Positional form `(width, height)`, used by `from_json`.
impl Positional for Rectangle {
    const NAME: &'static str = "Rectangle";
    const ARITY: usize = 2;

    fn from_arguments(args: &Arguments) -> Result<Self, JsonError> {
        Ok(Self::new(args.f64(0)?, args.f64(1)?))
    }
}

//! Public entry points for the selkit utilities.
//!
//! # Scope
//!
//! This crate provides:
//! - **Shapes** - [`make_rectangle`] and [`Rectangle`]
//! - **JSON** - [`to_json`], [`from_json`] and positional [`Prototype`]s
//! - **CSS selectors** - the [`css_selector_builder`] façade
//!
//! ```
//! use selkit_core::{Positional, Rectangle, css_selector_builder, from_json, make_rectangle, to_json};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rect = make_rectangle(10.0, 20.0);
//! assert_eq!(rect.area(), 200.0);
//!
//! let json = to_json(&rect)?;
//! let copy = from_json(&Rectangle::prototype(), &json)?;
//! assert_eq!(copy, rect);
//!
//! let selector = css_selector_builder::id("main")?.add_class("container")?;
//! assert_eq!(selector.render(), "#main.container");
//! # Ok(())
//! # }
//! ```

pub use selkit_css as css;
pub use selkit_json as json;
pub use selkit_shapes as shapes;

pub use selkit_css::css_selector_builder;
pub use selkit_css::{Combinator, FragmentKind, SelectorBuilder, SelectorConstructionError, Specificity};
pub use selkit_json::{
    Arguments, JsonError, Positional, Prototype, from_json, from_json_as, to_json, to_json_pretty,
};
pub use selkit_shapes::{Rectangle, make_rectangle};

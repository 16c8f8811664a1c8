//! Every selector starts here: each function creates a fresh
//! [`SelectorBuilder`], applies one fragment and hands the builder back for
//! chaining.
//!
//! ```
//! use selkit_css::css_selector_builder as css;
//!
//! # fn main() -> Result<(), selkit_css::SelectorConstructionError> {
//! let list = css::element("ul")?.add_class("nav")?;
//! let item = css::element("li")?.add_pseudo_class("first-child")?;
//! assert_eq!(css::combine(&list, ">", &item).render(), "ul.nav > li:first-child");
//! # Ok(())
//! # }
//! ```
//!
//! The fragment functions return `Result` only so that they chain uniformly
//! with the builder methods; a single fragment on an empty builder never fails.

use crate::error::SelectorConstructionError;
use crate::selector::SelectorBuilder;

/// Start a selector with a type selector, e.g. `div`.
///
/// # Errors
/// Never fails on a fresh builder.
pub fn element(tag: impl Into<String>) -> Result<SelectorBuilder, SelectorConstructionError> {
    SelectorBuilder::new().set_element(tag)
}

/// Start a selector with an ID selector, rendered `#value`.
///
/// # Errors
/// Never fails on a fresh builder.
pub fn id(value: impl Into<String>) -> Result<SelectorBuilder, SelectorConstructionError> {
    SelectorBuilder::new().set_id(value)
}

/// Start a selector with a class selector, rendered `.name`.
///
/// # Errors
/// Never fails on a fresh builder.
pub fn class(name: impl Into<String>) -> Result<SelectorBuilder, SelectorConstructionError> {
    SelectorBuilder::new().add_class(name)
}

/// Start a selector with an attribute selector, rendered `[expr]`.
///
/// # Errors
/// Never fails on a fresh builder.
pub fn attr(expr: impl Into<String>) -> Result<SelectorBuilder, SelectorConstructionError> {
    SelectorBuilder::new().add_attribute(expr)
}

/// Start a selector with a pseudo-class, rendered `:name`.
///
/// # Errors
/// Never fails on a fresh builder.
pub fn pseudo_class(name: impl Into<String>) -> Result<SelectorBuilder, SelectorConstructionError> {
    SelectorBuilder::new().add_pseudo_class(name)
}

/// Start a selector with a pseudo-element, rendered `::name`.
///
/// # Errors
/// Never fails on a fresh builder.
pub fn pseudo_element(
    name: impl Into<String>,
) -> Result<SelectorBuilder, SelectorConstructionError> {
    SelectorBuilder::new().set_pseudo_element(name)
}

/// Join two selectors: renders as `left + " " + combinator + " " + right`.
///
/// `combinator` may be a [`Combinator`](crate::Combinator) or any string,
/// which is used verbatim.
#[must_use]
pub fn combine(
    left: &SelectorBuilder,
    combinator: impl AsRef<str>,
    right: &SelectorBuilder,
) -> SelectorBuilder {
    SelectorBuilder::new().combine(left, combinator, right)
}

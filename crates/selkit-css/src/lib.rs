//! Fluent construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector Builder** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - Canonical fragment ordering and singleton checks
//!   - Combinators (descendant, child, next-sibling, subsequent-sibling)
//!   - Specificity of the built selector
//!
//! - **Façade** - [`css_selector_builder`], one entry point per fragment kind
//!   plus `combine`
//!
//! # Not Implemented
//!
//! - Parsing selector strings back into builders
//! - Validation of fragment text (names and expressions are emitted verbatim)

/// Entry points that start a new selector.
pub mod css_selector_builder;
/// Selector construction errors.
pub mod error;
/// Selector fragments, combinators, specificity and the builder.
pub mod selector;

pub use error::SelectorConstructionError;
pub use selector::{Combinator, FragmentKind, SelectorBuilder, Specificity};

//! Error types for selector construction.

use thiserror::Error;

use crate::selector::FragmentKind;

/// Errors raised while appending fragments to a
/// [`SelectorBuilder`](crate::selector::SelectorBuilder).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectorConstructionError {
    /// A singleton fragment (id or pseudo-element) was set a second time.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector ({0} repeated)"
    )]
    Duplicate(FragmentKind),

    /// A fragment was appended after a fragment of a later category.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({fragment} after {after})"
    )]
    Order {
        /// The fragment that was rejected.
        fragment: FragmentKind,
        /// The latest fragment already present in the builder.
        after: FragmentKind,
    },
}

impl SelectorConstructionError {
    /// The fragment whose append was rejected.
    #[must_use]
    pub const fn fragment(&self) -> FragmentKind {
        match self {
            Self::Duplicate(fragment) | Self::Order { fragment, .. } => *fragment,
        }
    }
}

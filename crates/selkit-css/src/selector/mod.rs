//! CSS selector fragments and the selector builder.
//!
//! This module defines the vocabulary of
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) the builder works
//! with: the fragment categories of a compound selector, the combinators that
//! join two selectors, and selector specificity.

mod builder;

pub use builder::SelectorBuilder;

use std::ops::Add;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The categories of simple selector a builder accepts, in the only order the
/// builder allows them to appear. The derived `Ord` follows declaration order,
/// so `FragmentKind::Element < FragmentKind::PseudoElement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors),
    /// rendered verbatim. Example: `div`
    Element,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors),
    /// rendered as `#value`.
    Id,
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html),
    /// rendered as `.name`.
    Class,
    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors),
    /// rendered as `[expr]`.
    Attribute,
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes),
    /// rendered as `:name`.
    PseudoClass,
    /// [§ 4.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements),
    /// rendered as `::name`.
    PseudoElement,
}

impl FragmentKind {
    /// Whether a selector may carry at most one fragment of this kind.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// The text written in front of a fragment of this kind when rendering.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// The text written after a fragment of this kind when rendering.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Displays as, and parses from, its token. [`SelectorBuilder::combine`]
/// also accepts raw token strings, so these variants are a convenience rather
/// than a restriction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter,
)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A selector of the form 'A B' represents an element B that is an
    /// arbitrary descendant of some ancestor element A."
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// `A + B`: B immediately follows A under the same parent.
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// `A ~ B`: B follows A, not necessarily immediately, under the same parent.
    #[strum(serialize = "~")]
    SubsequentSibling,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// `A > B`: B is a direct child of A.
    #[strum(serialize = ">")]
    Child,
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

/// Complex selectors add up the specificity of every compound they contain.
/// Each component saturates at `u32::MAX`.
impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(
            self.0.saturating_add(rhs.0),
            self.1.saturating_add(rhs.1),
            self.2.saturating_add(rhs.2),
        )
    }
}

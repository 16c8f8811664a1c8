//! The fluent selector builder.

use std::fmt;
use std::str::FromStr;

use selkit_common::warning::warn_once;

use super::{Combinator, FragmentKind, Specificity};
use crate::error::SelectorConstructionError;

/// A selector joined from two others by [`SelectorBuilder::combine`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct Combined {
    text: String,
    specificity: Specificity,
}

/// Accumulates the fragments of a compound selector and renders them in
/// canonical order.
///
/// Fragments must be appended in the order
/// element → id → class → attribute → pseudo-class → pseudo-element; element,
/// id and pseudo-element may each appear once. Every append consumes the
/// builder and hands it back on success, so chains read naturally with `?`:
///
/// ```
/// use selkit_css::css_selector_builder::element;
///
/// # fn main() -> Result<(), selkit_css::SelectorConstructionError> {
/// let selector = element("a")?
///     .add_attribute(r#"href$=".png""#)?
///     .add_pseudo_class("focus")?;
/// assert_eq!(selector.render(), r#"a[href$=".png"]:focus"#);
/// # Ok(())
/// # }
/// ```
///
/// Builders are normally created through the
/// [`css_selector_builder`](crate::css_selector_builder) functions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    combined: Option<Combined>,
}

impl SelectorBuilder {
    /// Create an empty builder. Renders as the empty string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type selector. It must be the first fragment of the selector,
    /// so this fails if anything at all has been set already (including a
    /// previous element).
    ///
    /// # Errors
    /// [`SelectorConstructionError::Order`] if any fragment is already present.
    pub fn set_element(mut self, tag: impl Into<String>) -> Result<Self, SelectorConstructionError> {
        if let Some(after) = self.last_fragment() {
            return Err(SelectorConstructionError::Order {
                fragment: FragmentKind::Element,
                after,
            });
        }
        self.element = Some(tag.into());
        self.trace(FragmentKind::Element);
        Ok(self)
    }

    /// Set the ID selector.
    ///
    /// # Errors
    /// [`SelectorConstructionError::Duplicate`] if an id is already set,
    /// [`SelectorConstructionError::Order`] if a class or any later fragment
    /// is present.
    pub fn set_id(mut self, value: impl Into<String>) -> Result<Self, SelectorConstructionError> {
        if self.id.is_some() {
            return Err(SelectorConstructionError::Duplicate(FragmentKind::Id));
        }
        self.check_order(FragmentKind::Id)?;
        self.id = Some(value.into());
        self.trace(FragmentKind::Id);
        Ok(self)
    }

    /// Append a class selector.
    ///
    /// # Errors
    /// [`SelectorConstructionError::Order`] if an attribute, pseudo-class or
    /// pseudo-element is present.
    pub fn add_class(mut self, name: impl Into<String>) -> Result<Self, SelectorConstructionError> {
        self.check_order(FragmentKind::Class)?;
        self.classes.push(name.into());
        self.trace(FragmentKind::Class);
        Ok(self)
    }

    /// Append an attribute selector. `expr` is the text between the brackets,
    /// e.g. `href$=".png"`.
    ///
    /// # Errors
    /// [`SelectorConstructionError::Order`] if a pseudo-class or
    /// pseudo-element is present.
    pub fn add_attribute(mut self, expr: impl Into<String>) -> Result<Self, SelectorConstructionError> {
        self.check_order(FragmentKind::Attribute)?;
        self.attributes.push(expr.into());
        self.trace(FragmentKind::Attribute);
        Ok(self)
    }

    /// Append a pseudo-class, e.g. `focus` or `nth-of-type(2)`.
    ///
    /// # Errors
    /// [`SelectorConstructionError::Order`] if a pseudo-element is present.
    pub fn add_pseudo_class(mut self, name: impl Into<String>) -> Result<Self, SelectorConstructionError> {
        self.check_order(FragmentKind::PseudoClass)?;
        self.pseudo_classes.push(name.into());
        self.trace(FragmentKind::PseudoClass);
        Ok(self)
    }

    /// Set the pseudo-element. Being the last category, it never violates
    /// ordering.
    ///
    /// # Errors
    /// [`SelectorConstructionError::Duplicate`] if a pseudo-element is
    /// already set.
    pub fn set_pseudo_element(
        mut self,
        name: impl Into<String>,
    ) -> Result<Self, SelectorConstructionError> {
        if self.pseudo_element.is_some() {
            return Err(SelectorConstructionError::Duplicate(FragmentKind::PseudoElement));
        }
        self.pseudo_element = Some(name.into());
        self.trace(FragmentKind::PseudoElement);
        Ok(self)
    }

    /// Join two selectors with a combinator: the result renders as
    /// `left + " " + combinator + " " + right`.
    ///
    /// Any token is interpolated verbatim. Tokens other than the four
    /// [`Combinator`]s are accepted but reported once through the warning
    /// channel. Once combined, the builder's own fragments no longer affect
    /// rendering.
    #[must_use]
    pub fn combine(
        mut self,
        left: &Self,
        combinator: impl AsRef<str>,
        right: &Self,
    ) -> Self {
        let token = combinator.as_ref();
        if Combinator::from_str(token).is_err() {
            let _ = warn_once("CSS", &format!("unknown combinator token '{token}'"));
        }

        self.combined = Some(Combined {
            text: format!("{left} {token} {right}"),
            specificity: left.specificity() + right.specificity(),
        });

        #[cfg(feature = "builder-trace")]
        eprintln!("[selkit CSS] combine {token:?} -> {self}");

        self
    }

    /// Render the selector string.
    ///
    /// A combined builder returns the joined string unchanged; otherwise the
    /// fragments are concatenated in canonical order. An empty builder
    /// renders as `""`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The type selector, if set.
    #[must_use]
    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// The ID selector, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Class names in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Attribute expressions in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Pseudo-classes in insertion order.
    #[must_use]
    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    /// The pseudo-element, if set.
    #[must_use]
    pub fn pseudo_element(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// Every fragment in rendering order, tagged with its category. A
    /// combined builder still reports the fragments it held before combining.
    pub fn fragments(&self) -> impl Iterator<Item = (FragmentKind, &str)> {
        let singles = [
            (FragmentKind::Element, &self.element),
            (FragmentKind::Id, &self.id),
        ];
        let lists = [
            (FragmentKind::Class, &self.classes),
            (FragmentKind::Attribute, &self.attributes),
            (FragmentKind::PseudoClass, &self.pseudo_classes),
        ];

        singles
            .into_iter()
            .filter_map(|(kind, value)| value.as_deref().map(|value| (kind, value)))
            .chain(
                lists
                    .into_iter()
                    .flat_map(|(kind, values)| values.iter().map(move |value| (kind, value.as_str()))),
            )
            .chain(
                self.pseudo_element
                    .as_deref()
                    .map(|value| (FragmentKind::PseudoElement, value)),
            )
    }

    /// Whether this builder holds a combined selector.
    #[must_use]
    pub const fn is_combined(&self) -> bool {
        self.combined.is_some()
    }

    /// Whether this builder renders as the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combined.is_none() && self.last_fragment().is_none()
    }

    /// The latest fragment category present, which locks out every earlier
    /// category for the rest of this builder's life.
    #[must_use]
    pub fn last_fragment(&self) -> Option<FragmentKind> {
        if self.pseudo_element.is_some() {
            Some(FragmentKind::PseudoElement)
        } else if !self.pseudo_classes.is_empty() {
            Some(FragmentKind::PseudoClass)
        } else if !self.attributes.is_empty() {
            Some(FragmentKind::Attribute)
        } else if !self.classes.is_empty() {
            Some(FragmentKind::Class)
        } else if self.id.is_some() {
            Some(FragmentKind::Id)
        } else if self.element.is_some() {
            Some(FragmentKind::Element)
        } else {
            None
        }
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// For a combined builder, the sum of both operands' specificities.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        if let Some(combined) = &self.combined {
            return combined.specificity;
        }

        let a = u32::from(self.id.is_some());
        let b = count(&self.classes) + count(&self.attributes) + count(&self.pseudo_classes);
        let c = u32::from(self.element.is_some()) + u32::from(self.pseudo_element.is_some());
        Specificity(a, b, c)
    }

    /// Reject `kind` if a fragment of a later category is already present.
    fn check_order(&self, kind: FragmentKind) -> Result<(), SelectorConstructionError> {
        match self.last_fragment() {
            Some(after) if after > kind => Err(SelectorConstructionError::Order {
                fragment: kind,
                after,
            }),
            _ => Ok(()),
        }
    }

    #[cfg(feature = "builder-trace")]
    fn trace(&self, kind: FragmentKind) {
        eprintln!("[selkit CSS] {kind} -> {self}");
    }

    #[cfg(not(feature = "builder-trace"))]
    #[allow(clippy::unused_self)]
    const fn trace(&self, _kind: FragmentKind) {}
}

fn count(items: &[String]) -> u32 {
    u32::try_from(items.len()).unwrap_or(u32::MAX)
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(combined) = &self.combined {
            return f.write_str(&combined.text);
        }

        for (kind, value) in self.fragments() {
            write!(f, "{}{value}{}", kind.prefix(), kind.suffix())?;
        }
        Ok(())
    }
}

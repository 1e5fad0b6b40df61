//! Selector values and the builder entry points.
//!
//! A [`Selector`] is an owned value: every append consumes the previous
//! value and returns a new one, so independent chains never share state.

mod category;
mod combinator;

pub use category::Category;
pub use combinator::Combinator;

use std::fmt;

use selkit_common::warning::warn_once;

use crate::error::SelectorError;

/// A selector under construction.
///
/// Holds the rendered text so far plus the category state needed to check
/// the next append. For a combined selector the category state is that of
/// the rightmost compound, so further appends extend it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// Accumulated selector text.
    rendered: String,
    /// Category of the most recent part, `None` before the first append.
    last: Option<Category>,
    has_element: bool,
    has_id: bool,
    has_pseudo_element: bool,
}

impl Selector {
    /// An empty selector with no parts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rendered: String::new(),
            last: None,
            has_element: false,
            has_id: false,
            has_pseudo_element: false,
        }
    }

    /// Append a part of the given category.
    ///
    /// Singleton categories are checked before ordering, so appending a
    /// second element after a class reports a duplicate rather than an
    /// ordering problem.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicateCategory`] if `category` is a
    /// singleton already present, or [`SelectorError::OrderViolation`] if the
    /// previous part must come after `category`.
    pub fn append(mut self, category: Category, value: &str) -> Result<Self, SelectorError> {
        if self.contains(category) {
            return Err(SelectorError::DuplicateCategory { category });
        }
        if let Some(after) = self.last.filter(|&last| last > category) {
            return Err(SelectorError::OrderViolation { category, after });
        }

        self.rendered.push_str(category.prefix());
        self.rendered.push_str(value);
        self.rendered.push_str(category.suffix());
        self.last = Some(category);
        match category {
            Category::Element => self.has_element = true,
            Category::Id => self.has_id = true,
            Category::PseudoElement => self.has_pseudo_element = true,
            Category::Class | Category::Attribute | Category::PseudoClass => {}
        }
        Ok(self)
    }

    /// Append a type selector, verbatim.
    ///
    /// # Errors
    ///
    /// Fails if the selector already has an element or any other part.
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Element, value)
    }

    /// Append `#value`.
    ///
    /// # Errors
    ///
    /// Fails if the selector already has an id, or a class, attribute,
    /// pseudo-class or pseudo-element.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Id, value)
    }

    /// Append `.value`.
    ///
    /// # Errors
    ///
    /// Fails after an attribute, pseudo-class or pseudo-element.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Class, value)
    }

    /// Append `[value]`. The attribute expression is not escaped.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-class or pseudo-element.
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Attribute, value)
    }

    /// Append `:value`.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-element.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoClass, value)
    }

    /// Append `::value`.
    ///
    /// # Errors
    ///
    /// Fails if the selector already has a pseudo-element.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoElement, value)
    }

    /// Join `self` and `right` with a combinator: `"{self} {combinator} {right}"`.
    ///
    /// Any token is used verbatim; tokens other than the four CSS combinators
    /// produce a one-time warning.
    #[must_use]
    pub fn combine(self, combinator: impl AsRef<str>, right: Self) -> Self {
        let combinator = combinator.as_ref();
        if Combinator::from_token(combinator).is_none() {
            warn_once(
                "selector",
                &format!("{combinator:?} is not a CSS combinator; using it verbatim"),
            );
        }

        let Self {
            rendered: right_rendered,
            last,
            has_element,
            has_id,
            has_pseudo_element,
        } = right;

        Self {
            rendered: format!("{} {combinator} {right_rendered}", self.rendered),
            last,
            has_element,
            has_id,
            has_pseudo_element,
        }
    }

    /// Take the rendered text, leaving this selector's text empty.
    ///
    /// A second call returns `""` until more parts are appended. Category
    /// state is kept, so the ordering rules still apply afterwards.
    pub fn stringify(&mut self) -> String {
        std::mem::take(&mut self.rendered)
    }

    /// The rendered text, without resetting it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Whether no text is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    /// Category of the most recently appended part.
    #[must_use]
    pub const fn last_category(&self) -> Option<Category> {
        self.last
    }

    const fn contains(&self, category: Category) -> bool {
        match category {
            Category::Element => self.has_element,
            Category::Id => self.has_id,
            Category::PseudoElement => self.has_pseudo_element,
            Category::Class | Category::Attribute | Category::PseudoClass => false,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.rendered
    }
}

/// Entry points for building selectors.
///
/// Each function starts a fresh [`Selector`]; chain further parts on the
/// returned value.
///
/// ```
/// use selkit_css::{Combinator, SelectorBuilder, SelectorError};
///
/// let mut selector = SelectorBuilder::combine(
///     SelectorBuilder::element("div")?,
///     Combinator::NextSibling,
///     SelectorBuilder::element("table")?,
/// );
/// assert_eq!(selector.stringify(), "div + table");
/// # Ok::<(), SelectorError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorBuilder;

impl SelectorBuilder {
    /// Start a selector with a type selector.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh selector; the `Result` matches the chained form.
    pub fn element(value: &str) -> Result<Selector, SelectorError> {
        Selector::new().element(value)
    }

    /// Start a selector with `#value`.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh selector; the `Result` matches the chained form.
    pub fn id(value: &str) -> Result<Selector, SelectorError> {
        Selector::new().id(value)
    }

    /// Start a selector with `.value`.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh selector; the `Result` matches the chained form.
    pub fn class(value: &str) -> Result<Selector, SelectorError> {
        Selector::new().class(value)
    }

    /// Start a selector with `[value]`.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh selector; the `Result` matches the chained form.
    pub fn attr(value: &str) -> Result<Selector, SelectorError> {
        Selector::new().attr(value)
    }

    /// Start a selector with `:value`.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh selector; the `Result` matches the chained form.
    pub fn pseudo_class(value: &str) -> Result<Selector, SelectorError> {
        Selector::new().pseudo_class(value)
    }

    /// Start a selector with `::value`.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh selector; the `Result` matches the chained form.
    pub fn pseudo_element(value: &str) -> Result<Selector, SelectorError> {
        Selector::new().pseudo_element(value)
    }

    /// Join two selectors with a combinator. See [`Selector::combine`].
    #[must_use]
    pub fn combine(left: Selector, combinator: impl AsRef<str>, right: Selector) -> Selector {
        left.combine(combinator, right)
    }
}

//! Selector part categories and their literal forms.

use strum_macros::{Display, EnumIter, EnumString};

/// The kind of a simple selector within a compound selector.
///
/// Variants are declared in the order they must appear, so the derived
/// `Ord` is the grammar order: a part may follow any part whose category
/// compares less than or equal to its own.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    /// Type selector, appended verbatim: `div`
    Element = 1,
    /// ID selector: `#main`
    Id,
    /// Class selector: `.container`
    Class,
    /// Attribute selector: `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,
    /// Pseudo-class: `:focus`
    PseudoClass,
    /// Pseudo-element: `::before`
    PseudoElement,
}

impl Category {
    /// Text written before the part's value.
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

    /// Text written after the part's value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// Whether the category may appear at most once per compound selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

//! Errors raised while building a selector.

use thiserror::Error;

use crate::selector::Category;

/// A selector part was appended in a position the grammar does not allow.
///
/// The messages are fixed: every duplicate reports the same text, and every
/// ordering problem reports the same text, regardless of which part failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id, or pseudo-element was appended a second time.
    #[error(
        "element, id and pseudo-element should not occur more than one time inside the selector"
    )]
    DuplicateCategory {
        /// The singleton category that was repeated.
        category: Category,
    },

    /// A part was appended after a part that must follow it.
    #[error(
        "selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// The category being appended.
        category: Category,
        /// The category of the previous part.
        after: Category,
    },
}

impl SelectorError {
    /// The category whose append failed.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::DuplicateCategory { category } | Self::OrderViolation { category, .. } => {
                *category
            }
        }
    }
}

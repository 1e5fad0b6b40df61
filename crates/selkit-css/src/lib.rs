//! CSS selector builder for selkit.
//!
//! # Scope
//!
//! This crate assembles selector strings from ordered parts:
//!
//! ```text
//! element#id.class[attr]:pseudo-class::pseudo-element
//!           \----/\----/\----------/
//!           may repeat
//! ```
//!
//! Compound selectors are joined with combinators (`' '`, `'+'`, `'~'`, `'>'`).
//! Parts must appear in the order above; element, id and pseudo-element may
//! appear at most once per compound.
//!
//! ```
//! use selkit_css::{SelectorBuilder, SelectorError};
//!
//! let mut selector = SelectorBuilder::element("a")?
//!     .attr(r#"href$=".png""#)?
//!     .pseudo_class("focus")?;
//! assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
//! # Ok::<(), SelectorError>(())
//! ```
//!
//! # Not Yet Implemented
//!
//! - Validation of part values (`value` is appended verbatim)
//! - Selector lists (`a, b`)

pub mod error;
pub mod selector;

pub use error::SelectorError;
pub use selector::{Category, Combinator, Selector, SelectorBuilder};

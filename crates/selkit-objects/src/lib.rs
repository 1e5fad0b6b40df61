//! Plain data records and JSON helpers for selkit.
//!
//! - **Shapes** - [`Rectangle`] and [`Circle`] records behind the [`Shape`] trait
//! - **JSON** - [`encode`] any serializable value, [`decode_as`] JSON text
//!   into a concrete type so its methods are available on the result
//!
//! ```
//! use selkit_objects::{Circle, Shape, decode_as};
//!
//! let circle: Circle = decode_as(r#"{"radius":10}"#)?;
//! assert_eq!(circle.radius, 10.0);
//! assert!(circle.area() > 314.0);
//! # Ok::<(), selkit_objects::JsonError>(())
//! ```

pub mod error;
pub mod json;
pub mod shape;

pub use error::JsonError;
pub use json::{decode_as, encode};
pub use shape::{Circle, Rectangle, Shape, rectangle};

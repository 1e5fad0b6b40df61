//! JSON encoding and typed decoding.
//!
//! [`decode_as`] plays the part of "parse, then attach a prototype": the
//! type parameter chooses which methods the decoded value has, and the JSON
//! supplies its fields. Fields the target type does not declare are ignored.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::JsonError;

/// Serialize `value` as compact JSON.
///
/// Struct fields appear in declaration order and `serde_json::Value`
/// objects keep insertion order.
///
/// ```
/// use selkit_objects::{Rectangle, encode};
///
/// assert_eq!(encode(&[1, 2, 3])?, "[1,2,3]");
/// assert_eq!(encode(&Rectangle::new(10.0, 20.0))?, r#"{"width":10.0,"height":20.0}"#);
/// # Ok::<(), selkit_objects::JsonError>(())
/// ```
///
/// # Errors
///
/// Returns [`JsonError::Encode`] if the value's `Serialize` impl fails.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Parse `json` into a `T`.
///
/// # Errors
///
/// Returns [`JsonError::Parse`] with the parser's error if the text is not
/// valid JSON or does not have the shape `T` expects.
pub fn decode_as<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    serde_json::from_str(json).map_err(JsonError::Parse)
}

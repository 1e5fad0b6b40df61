//! Errors from the JSON helpers.

use thiserror::Error;

/// Failure to encode or decode JSON.
///
/// The underlying `serde_json` error is kept intact as the source.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The value could not be serialized (e.g. a map with non-string keys).
    #[error("failed to encode JSON")]
    Encode(#[source] serde_json::Error),

    /// The text was not valid JSON for the target type.
    #[error("failed to parse JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

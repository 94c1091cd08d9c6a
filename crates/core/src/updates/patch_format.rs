//! Serde helpers for `Patch<T>` fields.
//!
//! Use together with `#[serde(default)]` so that a missing key stays `None`:
//!
//! ```ignore
//! #[serde(default, deserialize_with = "patch_format::deserialize")]
//! pub title: Patch<String>,
//! ```

use serde::{Deserialize, Deserializer};

use super::Patch;

/// Deserialize a present key into `Some(None)` (null) or `Some(Some(v))`.
///
/// A value of the wrong type is an error, never a silent default.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Patch<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Like [`deserialize`] for text fields where an empty (or whitespace-only)
/// string means the same as an explicit null.
pub fn deserialize_blank_as_null<'de, D>(deserializer: D) -> Result<Patch<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(Some(raw.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })))
}

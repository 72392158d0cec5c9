use crate::error::{Error, Result};
use serde_json::Value;

/// Extracts the `patches` list from a decoded `patches.json` document.
///
/// The value is returned verbatim; individual entries are not validated.
///
/// # Arguments
///
/// * `url` - Where the document came from, used in error messages.
/// * `document` - The decoded JSON document.
///
/// # Returns
///
/// * `Ok(Value)` - The value stored under `patches`.
/// * `Err(Error::MissingKey)` - The document is not an object with a `patches` key.
pub fn extract_patch_changes(url: &str, mut document: Value) -> Result<Value> {
    document
        .get_mut("patches")
        .map(Value::take)
        .ok_or_else(|| Error::MissingKey {
            url: url.to_string(),
            key: "patches",
        })
}

/// Decodes a `patches.json` body and extracts its `patches` list.
pub fn parse_patch_changes(url: &str, body: &str) -> Result<Value> {
    let document: Value = serde_json::from_str(body).map_err(|source| Error::Malformed {
        url: url.to_string(),
        source,
    })?;
    extract_patch_changes(url, document)
}

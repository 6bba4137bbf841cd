//! Collection Codec - JSON Encoding of a Whole Collection
//!
//! The store file and every backup hold the same thing: one JSON array
//! with every record of the collection, in collection order.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DataStoreError, Result};

/// Encode the full collection as a compact JSON array.
pub fn encode<T: Serialize>(items: &[T]) -> Result<String> {
    serde_json::to_string(items).map_err(DataStoreError::Encode)
}

/// Decode a collection read from `path`.
///
/// `path` only labels the error; nothing is read here.
pub fn decode<T: DeserializeOwned>(path: &Path, content: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|source| DataStoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

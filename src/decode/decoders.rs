//! Decoder implementations

use super::types::Fragment;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

// ============================================================================
// JSON Array Decoder
// ============================================================================

/// Strict decoder for page bodies that must be a JSON array of `T`
///
/// Anything else (an object, a scalar, trailing garbage, an element that does
/// not match `T`) is a [`Error::MalformedBody`].
#[derive(Debug, Clone, Copy)]
pub struct JsonArrayDecoder<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Default for JsonArrayDecoder<T> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> JsonArrayDecoder<T> {
    /// Create a new decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a page body
    pub fn decode(&self, body: &[u8]) -> Result<Fragment<T>> {
        serde_json::from_slice::<Vec<T>>(body)
            .map(Fragment::new)
            .map_err(|e| Error::malformed_body(format!("error unmarshaling json: {e}")))
    }
}

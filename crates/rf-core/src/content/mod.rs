//! Content API payload types.
//!
//! The content API returns JSON arrays of screen copy. Decoding into typed
//! payloads happens here, at the client boundary, so a malformed server
//! payload fails fast instead of leaking loosely-typed values into
//! rendering code.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::ports::ContentError;

/// A titled card with ordered instruction steps.
///
/// Guides, FAQs and the Gov.br requirement notices all share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCard {
    pub title: String,
    pub steps: Vec<String>,
}

/// A bank product offer shown on the "Meu Banco" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankProduct {
    pub title: String,
    pub icon: String,
    pub features: Vec<String>,
    pub link: String,
}

/// Decode a raw JSON payload into a typed list.
pub fn decode_list<T: DeserializeOwned>(value: serde_json::Value) -> Result<Vec<T>, ContentError> {
    serde_json::from_value(value).map_err(|e| ContentError::Schema(e.to_string()))
}

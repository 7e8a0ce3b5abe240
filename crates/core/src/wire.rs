//! Wire error encoding
//!
//! All errors encode to JSON as:
//! ```json
//! {
//!   "code": "ArgumentCount",
//!   "message": "incorrect number of arguments for write: expecting 2, got 1",
//!   "details": {"function": "write", "expected": 2, "actual": 1}
//! }
//! ```
//!
//! | Code | Description |
//! |------|-------------|
//! | ArgumentCount | Wrong number of arguments |
//! | UnknownFunction | Function name not dispatched |
//! | KeyLookup | Store could not return a value |
//! | StoreError | Store failure passed through |

use serde::{Deserialize, Serialize};

/// Wire error representation for JSON encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireError {
    /// The canonical error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl WireError {
    /// Create a new wire error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Encode as a compact JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!("{{\"code\":\"{}\",\"message\":\"unencodable\"}}", self.code)
        })
    }
}

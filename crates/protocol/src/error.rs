//! Error payloads returned by the remote endpoint.

use serde::{Deserialize, Serialize};

/// Error payload nested under `value` in a non-2xx response.
///
/// `error` carries the W3C error code, e.g. `"no such element"`,
/// `"element not interactable"`, `"session not created"`, `"timeout"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorValue {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacktrace: Option<String>,
}

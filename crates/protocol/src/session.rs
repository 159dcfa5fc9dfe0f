//! New-session request/response shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capabilities::Capabilities;

/// Body of `POST /session`.
///
/// ```json
/// {
///   "capabilities": {
///     "alwaysMatch": { "platformName": "Android", ... }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSessionRequest {
    pub capabilities: CapabilityRequest,
}

/// The `capabilities` object of a new-session request.
///
/// Only `alwaysMatch` is used; `firstMatch` negotiation is not part of
/// this harness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityRequest {
    pub always_match: Capabilities,
}

/// Payload of a successful new-session response, nested under `value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionValue {
    /// Session ID assigned by the remote endpoint.
    pub session_id: String,
    /// Capabilities the endpoint actually settled on.
    #[serde(default)]
    pub capabilities: Value,
}

/// Every successful WebDriver response nests its payload under `value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueResponse<T> {
    pub value: T,
}

//! Find-element and element-interaction shapes.

use serde::{Deserialize, Serialize};

/// The W3C web element identifier key.
///
/// Element references on the wire are objects with this single magic key,
/// e.g. `{"element-6066-11e4-a52e-4f735466cecf": "42.1"}`.
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Body of `POST /session/{id}/element`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindElementRequest {
    /// Locator strategy literal, e.g. `"accessibility id"`.
    pub using: String,
    /// Selector for the chosen strategy.
    pub value: String,
}

/// Element reference returned by a find-element request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRef {
    #[serde(rename = "element-6066-11e4-a52e-4f735466cecf")]
    pub element_id: String,
}

/// Body of `POST /session/{id}/element/{eid}/value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendKeysRequest {
    pub text: String,
}

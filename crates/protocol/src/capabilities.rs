//! Capability records sent when requesting a new session.

use serde::{Deserialize, Serialize};

/// Capability record placed under `alwaysMatch` in a new-session request.
///
/// `platformName` is the only bare W3C key; everything else is
/// vendor-prefixed with `appium:` as required since Appium 2. Optional
/// fields are omitted from the JSON entirely when absent - an iOS session
/// request must not contain an `appium:avd` key at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub platform_name: String,
    #[serde(rename = "appium:automationName")]
    pub automation_name: String,
    #[serde(rename = "appium:app")]
    pub app: String,
    #[serde(rename = "appium:deviceName")]
    pub device_name: String,
    #[serde(rename = "appium:platformVersion")]
    pub platform_version: String,
    /// Emulator image to boot before the session starts. Android only.
    #[serde(
        rename = "appium:avd",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub avd: Option<String>,
}

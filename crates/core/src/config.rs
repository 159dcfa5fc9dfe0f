//! Typed configuration snapshot for a test run.
//!
//! Values are read once at load time and treated as read-only from then
//! on; the capability snapshot for a session is assembled at session-build
//! time.

use std::path::Path;

use serde::Deserialize;

use crate::capabilities::SessionCapabilities;
use crate::error::{Error, Result};
use crate::platform::Platform;

/// Run configuration: which platform to target, where the Appium endpoint
/// lives, and the per-platform device parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub platform: Platform,
    pub appium_url: String,
    pub android: DeviceConfig,
    pub ios: DeviceConfig,
}

/// Device parameters for one platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    pub app_path: String,
    pub device_name: String,
    pub platform_version: String,
}

impl Config {
    /// Loads a snapshot from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Assembles the capability snapshot for `platform`.
    ///
    /// Android boots an emulator image named after the device.
    pub fn capabilities_for(&self, platform: Platform) -> SessionCapabilities {
        let device = match platform {
            Platform::Android => &self.android,
            Platform::Ios => &self.ios,
        };
        let capabilities = SessionCapabilities::new(
            &device.app_path,
            &device.device_name,
            &device.platform_version,
        );
        match platform {
            Platform::Android => capabilities.with_avd(device.device_name.clone()),
            Platform::Ios => capabilities,
        }
    }
}

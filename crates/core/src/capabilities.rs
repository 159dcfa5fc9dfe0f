//! Session capability building.

use appium_protocol::Capabilities;

use crate::platform::Platform;

/// Platform-specific inputs for one new session.
///
/// Built fresh per session and never mutated once the session exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCapabilities {
    pub app: String,
    pub device_name: String,
    pub platform_version: String,
    /// Emulator image to boot. Meaningful on Android only; when unset,
    /// the device name doubles as the image name.
    pub avd: Option<String>,
}

impl SessionCapabilities {
    pub fn new(
        app: impl Into<String>,
        device_name: impl Into<String>,
        platform_version: impl Into<String>,
    ) -> Self {
        Self {
            app: app.into(),
            device_name: device_name.into(),
            platform_version: platform_version.into(),
            avd: None,
        }
    }

    /// Sets an explicit emulator image name.
    pub fn with_avd(mut self, avd: impl Into<String>) -> Self {
        self.avd = Some(avd.into());
        self
    }

    /// Builds the wire capability record for `platform`.
    ///
    /// Fields that are not meaningful on the target platform are omitted
    /// from the record entirely: an iOS session never carries an AVD, even
    /// when one was set.
    pub fn to_wire(&self, platform: Platform) -> Capabilities {
        Capabilities {
            platform_name: platform.as_str().to_string(),
            automation_name: platform.automation_name().to_string(),
            app: self.app.clone(),
            device_name: self.device_name.clone(),
            platform_version: self.platform_version.clone(),
            avd: match platform {
                Platform::Android => self
                    .avd
                    .clone()
                    .or_else(|| Some(self.device_name.clone())),
                Platform::Ios => None,
            },
        }
    }
}

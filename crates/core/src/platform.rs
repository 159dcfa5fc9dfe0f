//! Target platform selection.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Target mobile platform for a session.
///
/// Chosen once per run from configuration. Exactly one `Platform` governs
/// both capability building and locator resolution for the lifetime of a
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Wire literal for the `platformName` capability.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }

    /// Automation backend Appium drives on this platform.
    pub(crate) fn automation_name(self) -> &'static str {
        match self {
            Platform::Android => "UiAutomator2",
            Platform::Ios => "XCUITest",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    /// Case-insensitive: `"android"`, `"ANDROID"`, `"iOS"` all parse.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            other => Err(Error::Config(format!("unknown platform '{other}'"))),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Platform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

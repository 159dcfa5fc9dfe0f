// appium-harness: client and screen models for driving the mobile app's
// login flow through a remote Appium session.
//
// The same test logic runs unmodified against Android and iOS: the session
// factory builds a platform-specific capability set from one configuration
// input, and screen models bind their controls through per-platform
// locator variants.

pub mod capabilities;
pub mod config;
pub mod error;
pub mod locator;
pub mod platform;
pub mod screens;
pub mod session;

/// Default bounded wait for visibility polling, in milliseconds.
///
/// Matches the 5-second explicit wait the login flow uses for the
/// post-submit alert.
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 5000;

pub use capabilities::SessionCapabilities;
pub use config::{Config, DeviceConfig};
pub use error::{Error, Result};
pub use locator::{Locator, LocatorSpec, Strategy};
pub use platform::Platform;
pub use screens::{HomeScreen, LoginScreen};
pub use session::{Element, Session};

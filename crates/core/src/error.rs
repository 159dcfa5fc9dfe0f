//! Error taxonomy for the harness.
//!
//! No variant is ever swallowed or retried by the core: every failure
//! propagates to the test orchestration layer, which decides pass/fail.

use appium_protocol::ErrorValue;

use crate::platform::Platform;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Endpoint URL malformed or unreachable, or the capability set was
    /// rejected. Fatal; aborts the run.
    #[error("session creation failed: {0}")]
    SessionCreation(String),

    /// A declared control has no locator variant for the active platform.
    /// A declarative gap in the screen definition, not a transient failure.
    #[error("control '{control}' has no locator registered for {platform}")]
    ElementResolution {
        control: &'static str,
        platform: Platform,
    },

    /// The control is not currently present in the UI tree.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// The control is present but not accepting interaction.
    #[error("element not interactable: {0}")]
    ElementNotInteractable(String),

    /// A bounded wait elapsed before its condition held.
    #[error("timed out: {0}")]
    Timeout(String),

    /// Unexpected wire shape, or an error code outside the known taxonomy.
    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Maps a W3C error payload onto the harness taxonomy.
pub(crate) fn from_wire_error(error: ErrorValue) -> Error {
    match error.error.as_str() {
        "no such element" => Error::ElementNotFound(error.message),
        "element not interactable" | "invalid element state" => {
            Error::ElementNotInteractable(error.message)
        }
        "timeout" => Error::Timeout(error.message),
        "session not created" => Error::SessionCreation(error.message),
        _ => Error::Protocol(error.message),
    }
}

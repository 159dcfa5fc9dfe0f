//! Wire types for the W3C WebDriver / Appium protocol.
//!
//! This crate contains the serde-serializable types used for communication
//! with an Appium endpoint over HTTP+JSON. These types represent the
//! "protocol layer" - the shapes of data as they appear on the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization
//! * 1:1 with protocol: Match the W3C WebDriver spec as Appium speaks it
//! * Stable: Changes only when the wire protocol changes
//!
//! Higher-level ergonomic APIs are built on top of these types in
//! `appium-harness`.

pub mod capabilities;
pub mod element;
pub mod error;
pub mod session;

pub use capabilities::*;
pub use element::*;
pub use error::*;
pub use session::*;

//! Locator strategies and per-platform locator specs.
//!
//! A logical control declares one locator variant per platform. The two
//! variants are opaque (strategy, selector) pairs: platforms may share a
//! strategy and differ only in selector, or use entirely different
//! strategies. No cross-platform mapping is assumed, and resolution never
//! falls back to another platform's variant.

use crate::error::{Error, Result};
use crate::platform::Platform;

/// Named find-element strategy, as Appium spells it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    AccessibilityId,
    /// Resource id (`android:id/...` and friends).
    Id,
    XPath,
    /// iOS class chain query.
    ClassChain,
    /// iOS predicate string.
    Predicate,
    /// Android UiAutomator expression.
    UiAutomator,
}

impl Strategy {
    /// The `using` literal for a find-element request.
    pub fn wire_name(self) -> &'static str {
        match self {
            Strategy::AccessibilityId => "accessibility id",
            Strategy::Id => "id",
            Strategy::XPath => "xpath",
            Strategy::ClassChain => "-ios class chain",
            Strategy::Predicate => "-ios predicate string",
            Strategy::UiAutomator => "-android uiautomator",
        }
    }
}

/// Strategy + selector pair for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    pub strategy: Strategy,
    pub selector: String,
}

impl Locator {
    pub fn new(strategy: Strategy, selector: impl Into<String>) -> Self {
        Self {
            strategy,
            selector: selector.into(),
        }
    }

    pub fn accessibility_id(selector: impl Into<String>) -> Self {
        Self::new(Strategy::AccessibilityId, selector)
    }

    pub fn id(selector: impl Into<String>) -> Self {
        Self::new(Strategy::Id, selector)
    }

    pub fn xpath(selector: impl Into<String>) -> Self {
        Self::new(Strategy::XPath, selector)
    }

    pub fn class_chain(selector: impl Into<String>) -> Self {
        Self::new(Strategy::ClassChain, selector)
    }

    pub fn predicate(selector: impl Into<String>) -> Self {
        Self::new(Strategy::Predicate, selector)
    }

    pub fn ui_automator(selector: impl Into<String>) -> Self {
        Self::new(Strategy::UiAutomator, selector)
    }
}

/// Per-platform locator variants for one logical control.
///
/// Declared once per control, never mutated.
#[derive(Debug, Clone, Default)]
pub struct LocatorSpec {
    android: Option<Locator>,
    ios: Option<Locator>,
}

impl LocatorSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the Android variant.
    pub fn android(mut self, locator: Locator) -> Self {
        self.android = Some(locator);
        self
    }

    /// Registers the iOS variant.
    pub fn ios(mut self, locator: Locator) -> Self {
        self.ios = Some(locator);
        self
    }

    /// Both platforms share `locator`.
    pub fn both(locator: Locator) -> Self {
        Self {
            android: Some(locator.clone()),
            ios: Some(locator),
        }
    }

    /// Selects the variant registered for `platform`.
    ///
    /// A missing variant is a declarative gap in the screen definition:
    /// the error is surfaced immediately and must not be retried.
    pub fn resolve(&self, control: &'static str, platform: Platform) -> Result<&Locator> {
        let variant = match platform {
            Platform::Android => self.android.as_ref(),
            Platform::Ios => self.ios.as_ref(),
        };
        variant.ok_or(Error::ElementResolution { control, platform })
    }
}

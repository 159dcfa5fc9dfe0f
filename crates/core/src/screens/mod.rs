//! Screen models for the app under test.
//!
//! One struct per application screen. Each screen borrows the session it
//! was built for, so a model can never outlive it or be rebound to a
//! different session. Construction resolves every declared control's
//! locator variant for the session's platform up front; the elements
//! themselves are looked up lazily, at action time.

mod home;
mod login;

pub use home::HomeScreen;
pub use login::LoginScreen;

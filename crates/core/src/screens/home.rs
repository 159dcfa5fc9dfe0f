//! Landing screen with the navigation menu.

use crate::error::Result;
use crate::locator::{Locator, LocatorSpec};
use crate::session::Session;

pub struct HomeScreen<'a> {
    session: &'a Session,
    login_menu: Locator,
}

impl<'a> HomeScreen<'a> {
    pub fn new(session: &'a Session) -> Result<Self> {
        let login_menu = LocatorSpec::both(Locator::accessibility_id("Login"))
            .resolve("login-menu", session.platform())?
            .clone();
        Ok(Self {
            session,
            login_menu,
        })
    }

    /// Opens the login form from the navigation menu.
    pub async fn open_login(&self) -> Result<()> {
        let menu = self.session.find_element(&self.login_menu).await?;
        self.session.click(&menu).await
    }
}

//! Login form plus the post-submit alert.

use tracing::debug;

use crate::error::Result;
use crate::locator::{Locator, LocatorSpec};
use crate::session::Session;

pub struct LoginScreen<'a> {
    session: &'a Session,
    email: Locator,
    password: Locator,
    login_button: Locator,
    alert_message: Locator,
    alert_button: Locator,
}

impl<'a> LoginScreen<'a> {
    /// Binds every control for the session's platform.
    ///
    /// Fails with [`Error::ElementResolution`] when a control has no
    /// locator variant for that platform; the screen never reaches a
    /// usable state in that case.
    ///
    /// [`Error::ElementResolution`]: crate::error::Error::ElementResolution
    pub fn new(session: &'a Session) -> Result<Self> {
        let platform = session.platform();
        let bind = |control, spec: LocatorSpec| -> Result<Locator> {
            Ok(spec.resolve(control, platform)?.clone())
        };

        Ok(Self {
            session,
            email: bind(
                "email",
                LocatorSpec::both(Locator::accessibility_id("input-email")),
            )?,
            password: bind(
                "password",
                LocatorSpec::both(Locator::accessibility_id("input-password")),
            )?,
            login_button: bind(
                "login-button",
                LocatorSpec::new()
                    .android(Locator::accessibility_id("button-LOGIN"))
                    .ios(Locator::class_chain(
                        r#"**/XCUIElementTypeOther[`name == "LOGIN"`][2]"#,
                    )),
            )?,
            alert_message: bind(
                "alert-message",
                LocatorSpec::new()
                    .android(Locator::id("android:id/message"))
                    .ios(Locator::xpath("//XCUIElementTypeStaticText[2]")),
            )?,
            alert_button: bind(
                "alert-button",
                LocatorSpec::new()
                    .android(Locator::id("android:id/button1"))
                    .ios(Locator::accessibility_id("OK")),
            )?,
        })
    }

    /// Types the credentials into the form.
    pub async fn enter_credentials(&self, email: &str, password: &str) -> Result<()> {
        let field = self.session.find_element(&self.email).await?;
        self.session.send_keys(&field, email).await?;

        let field = self.session.find_element(&self.password).await?;
        self.session.send_keys(&field, password).await
    }

    /// Taps the login button.
    ///
    /// Every call goes to the wire; nothing is debounced.
    pub async fn submit(&self) -> Result<()> {
        let button = self.session.find_element(&self.login_button).await?;
        self.session.click(&button).await
    }

    /// Fills the form and submits it.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        debug!(email, "logging in");
        self.enter_credentials(email, password).await?;
        self.submit().await
    }

    /// Waits for the post-submit alert and returns its message.
    pub async fn read_feedback_text(&self) -> Result<String> {
        let message = self.session.wait_for_displayed(&self.alert_message).await?;
        self.session.text(&message).await
    }

    /// Dismisses the alert.
    pub async fn acknowledge(&self) -> Result<()> {
        let button = self.session.find_element(&self.alert_button).await?;
        self.session.click(&button).await
    }
}

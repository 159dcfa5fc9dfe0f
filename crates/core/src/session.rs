//! Session factory and the live session handle.
//!
//! A session is created once per test run against the configured Appium
//! endpoint and driven sequentially by one thread of control. The handle
//! owns the remote session exclusively and must be released with
//! [`Session::quit`] on every exit path, including failures - leaked
//! sessions hold device/emulator capacity on the remote end.

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use appium_protocol::{
    CapabilityRequest, ElementRef, ErrorValue, FindElementRequest, NewSessionRequest,
    NewSessionValue, SendKeysRequest, ValueResponse,
};

use crate::DEFAULT_WAIT_TIMEOUT_MS;
use crate::capabilities::SessionCapabilities;
use crate::error::{Error, Result, from_wire_error};
use crate::locator::Locator;
use crate::platform::Platform;

/// Polling interval for the bounded visibility wait.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Reference to an element the remote end has located.
///
/// Valid only for the session that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: String,
}

impl Element {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl From<ElementRef> for Element {
    fn from(value: ElementRef) -> Self {
        Self {
            id: value.element_id,
        }
    }
}

/// Handle to a live remote automation session.
#[derive(Debug)]
pub struct Session {
    http: Client,
    base: Url,
    session_id: String,
    platform: Platform,
    wait_timeout: Duration,
    open: bool,
}

impl Session {
    /// Requests a new session from the remote endpoint.
    ///
    /// A pure mapping from (platform, capabilities) to a fresh session:
    /// no retries, no caching - each call opens one independent remote
    /// session. Fails with [`Error::SessionCreation`] when the endpoint
    /// URL is malformed, the endpoint is unreachable, or it rejects the
    /// capability set.
    pub async fn create(
        appium_url: &str,
        platform: Platform,
        capabilities: &SessionCapabilities,
    ) -> Result<Session> {
        let base = Url::parse(appium_url).map_err(|e| {
            Error::SessionCreation(format!("invalid endpoint '{appium_url}': {e}"))
        })?;

        let request = NewSessionRequest {
            capabilities: CapabilityRequest {
                always_match: capabilities.to_wire(platform),
            },
        };

        debug!(%platform, endpoint = %base, "requesting session");

        let http = Client::new();
        let url = format!("{}/session", base.as_str().trim_end_matches('/'));
        let response = http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::SessionCreation(format!("endpoint unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(match read_wire_error(response).await {
                Error::SessionCreation(message) => Error::SessionCreation(message),
                other => Error::SessionCreation(other.to_string()),
            });
        }

        let body: ValueResponse<NewSessionValue> = response
            .json()
            .await
            .map_err(|e| Error::Protocol(format!("malformed new-session response: {e}")))?;

        debug!(session_id = %body.value.session_id, "session created");

        Ok(Session {
            http,
            base,
            session_id: body.value.session_id,
            platform,
            wait_timeout: Duration::from_millis(DEFAULT_WAIT_TIMEOUT_MS),
            open: true,
        })
    }

    /// Platform this session was created for. Governs all locator
    /// resolution against it.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Session ID assigned by the remote endpoint.
    pub fn id(&self) -> &str {
        &self.session_id
    }

    /// Overrides the bounded wait used by [`Session::wait_for_displayed`].
    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    /// Finds one element by the given locator.
    pub async fn find_element(&self, locator: &Locator) -> Result<Element> {
        let request = FindElementRequest {
            using: locator.strategy.wire_name().to_string(),
            value: locator.selector.clone(),
        };
        let element: ElementRef = self.post("element", &request).await?;
        Ok(element.into())
    }

    /// Types `text` into the element.
    pub async fn send_keys(&self, element: &Element, text: &str) -> Result<()> {
        let request = SendKeysRequest {
            text: text.to_string(),
        };
        let _: serde_json::Value = self
            .post(&format!("element/{}/value", element.id), &request)
            .await?;
        Ok(())
    }

    /// Activates (taps) the element.
    pub async fn click(&self, element: &Element) -> Result<()> {
        let _: serde_json::Value = self
            .post(
                &format!("element/{}/click", element.id),
                &serde_json::json!({}),
            )
            .await?;
        Ok(())
    }

    /// Returns the element's currently displayed text.
    pub async fn text(&self, element: &Element) -> Result<String> {
        self.get(&format!("element/{}/text", element.id)).await
    }

    /// Whether the element is currently displayed.
    pub async fn is_displayed(&self, element: &Element) -> Result<bool> {
        self.get(&format!("element/{}/displayed", element.id)).await
    }

    /// Polls until the control is present and displayed, or the bounded
    /// wait elapses.
    ///
    /// This is the only suspension point in the core. The timeout is the
    /// sole abort mechanism; an expired wait surfaces [`Error::Timeout`]
    /// and is never retried here.
    pub async fn wait_for_displayed(&self, locator: &Locator) -> Result<Element> {
        let deadline = tokio::time::Instant::now() + self.wait_timeout;
        loop {
            match self.find_element(locator).await {
                Ok(element) => match self.is_displayed(&element).await {
                    Ok(true) => return Ok(element),
                    Ok(false) => {}
                    Err(Error::ElementNotFound(_)) => {}
                    Err(e) => return Err(e),
                },
                Err(Error::ElementNotFound(_)) => {}
                Err(e) => return Err(e),
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(Error::Timeout(format!(
                    "'{}' (using {}) did not become visible within {:?}",
                    locator.selector,
                    locator.strategy.wire_name(),
                    self.wait_timeout,
                )));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Terminates the remote session.
    ///
    /// Consumes the handle; call exactly once on every exit path, normal
    /// completion or failure.
    pub async fn quit(mut self) -> Result<()> {
        self.open = false;
        debug!(session_id = %self.session_id, "deleting session");
        let response = self.http.delete(self.endpoint("")).send().await?;
        if !response.status().is_success() {
            return Err(read_wire_error(response).await);
        }
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.base.as_str().trim_end_matches('/');
        if path.is_empty() {
            format!("{base}/session/{}", self.session_id)
        } else {
            format!("{base}/session/{}/{path}", self.session_id)
        }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let response = self.http.post(self.endpoint(path)).json(body).send().await?;
        read_value(response).await
    }

    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!(path, "GET");
        let response = self.http.get(self.endpoint(path)).send().await?;
        read_value(response).await
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.open {
            warn!(
                session_id = %self.session_id,
                "session dropped without quit(); the remote session may leak"
            );
        }
    }
}

/// Unwraps the `value` payload of a successful response, or maps the
/// endpoint's error payload onto the harness taxonomy.
async fn read_value<T: DeserializeOwned>(response: Response) -> Result<T> {
    if response.status().is_success() {
        let body: ValueResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::Protocol(format!("malformed response body: {e}")))?;
        Ok(body.value)
    } else {
        Err(read_wire_error(response).await)
    }
}

async fn read_wire_error(response: Response) -> Error {
    let status = response.status();
    match response.json::<ValueResponse<ErrorValue>>().await {
        Ok(body) => from_wire_error(body.value),
        Err(e) => Error::Protocol(format!("HTTP {status} with unreadable error body: {e}")),
    }
}

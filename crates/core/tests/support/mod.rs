//! In-process mock of an Appium endpoint.
//!
//! Serves just enough of the W3C WebDriver surface for the login flow:
//! one app instance with a scripted state machine (home -> login form ->
//! alert), a fixed element table per platform, and hooks for the failure
//! modes the harness has to surface (rejected capabilities, slow alert,
//! non-interactable input).

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use appium_harness::Platform;

const LOGIN_MENU: &str = "elem-login-menu";
const EMAIL: &str = "elem-email";
const PASSWORD: &str = "elem-password";
const SUBMIT: &str = "elem-submit";
const ALERT_MESSAGE: &str = "elem-alert-message";
const ALERT_OK: &str = "elem-alert-ok";

const IOS_SUBMIT_CHAIN: &str = r#"**/XCUIElementTypeOther[`name == "LOGIN"`][2]"#;
const FEEDBACK_TEXT: &str = "You are logged in!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Home,
    Login,
    Alert,
}

#[derive(Debug)]
struct ServerState {
    platform: Platform,
    sessions_created: u32,
    session_deleted: bool,
    last_capabilities: Option<Value>,
    reject_sessions: bool,
    screen: Screen,
    email: String,
    password: String,
    submitted: Option<(String, String)>,
    submit_count: u32,
    /// The alert reports displayed=false for this many checks.
    alert_visible_after: u32,
    displayed_checks: u32,
    password_disabled: bool,
}

impl ServerState {
    fn new(platform: Platform) -> Self {
        Self {
            platform,
            sessions_created: 0,
            session_deleted: false,
            last_capabilities: None,
            reject_sessions: false,
            screen: Screen::Home,
            email: String::new(),
            password: String::new(),
            submitted: None,
            submit_count: 0,
            alert_visible_after: 0,
            displayed_checks: 0,
            password_disabled: false,
        }
    }
}

type Shared = Arc<Mutex<ServerState>>;

pub struct MockAppium {
    addr: SocketAddr,
    state: Shared,
    handle: JoinHandle<()>,
}

impl MockAppium {
    pub async fn start(platform: Platform) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let state: Shared = Arc::new(Mutex::new(ServerState::new(platform)));
        let router = Router::new()
            .route("/session", post(new_session))
            .route("/session/{sid}", delete(delete_session))
            .route("/session/{sid}/element", post(find_element))
            .route("/session/{sid}/element/{eid}/value", post(send_keys))
            .route("/session/{sid}/element/{eid}/click", post(click))
            .route("/session/{sid}/element/{eid}/text", get(text))
            .route("/session/{sid}/element/{eid}/displayed", get(displayed))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock endpoint");
        let addr = listener.local_addr().expect("failed to read local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("mock endpoint stopped");
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn shutdown(&self) {
        self.handle.abort();
    }

    /// The `alwaysMatch` record of the most recent new-session request.
    pub fn last_capabilities(&self) -> Value {
        self.state
            .lock()
            .unwrap()
            .last_capabilities
            .clone()
            .expect("no session was requested")
    }

    pub fn sessions_created(&self) -> u32 {
        self.state.lock().unwrap().sessions_created
    }

    pub fn session_deleted(&self) -> bool {
        self.state.lock().unwrap().session_deleted
    }

    pub fn submit_count(&self) -> u32 {
        self.state.lock().unwrap().submit_count
    }

    /// Credentials as they stood when the login button was last tapped.
    pub fn submitted_credentials(&self) -> Option<(String, String)> {
        self.state.lock().unwrap().submitted.clone()
    }

    /// Makes every new-session request fail with `session not created`.
    pub fn reject_sessions(&self) {
        self.state.lock().unwrap().reject_sessions = true;
    }

    /// The alert element reports displayed=false for the first `checks`
    /// displayed queries.
    pub fn alert_visible_after(&self, checks: u32) {
        self.state.lock().unwrap().alert_visible_after = checks;
    }

    /// The password field rejects input with `element not interactable`.
    pub fn disable_password_field(&self) {
        self.state.lock().unwrap().password_disabled = true;
    }
}

fn ok(value: Value) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "value": value })))
}

fn error(status: StatusCode, code: &str, message: &str) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(json!({ "value": { "error": code, "message": message } })),
    )
}

async fn new_session(
    State(state): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    let always_match = body["capabilities"]["alwaysMatch"].clone();
    state.last_capabilities = Some(always_match.clone());

    if state.reject_sessions {
        return error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "session not created",
            "the endpoint rejected the capability set",
        );
    }

    state.sessions_created += 1;
    state.screen = Screen::Home;
    let session_id = format!("mock-session-{}", state.sessions_created);
    ok(json!({ "sessionId": session_id, "capabilities": always_match }))
}

async fn delete_session(
    State(state): State<Shared>,
    Path(_sid): Path<String>,
) -> (StatusCode, Json<Value>) {
    state.lock().unwrap().session_deleted = true;
    ok(Value::Null)
}

async fn find_element(
    State(state): State<Shared>,
    Path(_sid): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let state = state.lock().unwrap();
    let using = body["using"].as_str().unwrap_or_default();
    let value = body["value"].as_str().unwrap_or_default();

    match lookup(&state, using, value) {
        Some(id) => ok(json!({ "element-6066-11e4-a52e-4f735466cecf": id })),
        None => error(
            StatusCode::NOT_FOUND,
            "no such element",
            &format!("no element for {using} '{value}' on the current screen"),
        ),
    }
}

/// Element table: which (strategy, selector) pairs resolve on the current
/// screen, per platform.
fn lookup(state: &ServerState, using: &str, value: &str) -> Option<&'static str> {
    let android = state.platform == Platform::Android;
    let on_form = matches!(state.screen, Screen::Login | Screen::Alert);
    let on_alert = state.screen == Screen::Alert;

    match (using, value) {
        ("accessibility id", "Login") if state.screen == Screen::Home => Some(LOGIN_MENU),
        ("accessibility id", "input-email") if on_form => Some(EMAIL),
        ("accessibility id", "input-password") if on_form => Some(PASSWORD),
        ("accessibility id", "button-LOGIN") if android && on_form => Some(SUBMIT),
        ("-ios class chain", IOS_SUBMIT_CHAIN) if !android && on_form => Some(SUBMIT),
        ("id", "android:id/message") if android && on_alert => Some(ALERT_MESSAGE),
        ("xpath", "//XCUIElementTypeStaticText[2]") if !android && on_alert => {
            Some(ALERT_MESSAGE)
        }
        ("id", "android:id/button1") if android && on_alert => Some(ALERT_OK),
        ("accessibility id", "OK") if !android && on_alert => Some(ALERT_OK),
        _ => None,
    }
}

async fn send_keys(
    State(state): State<Shared>,
    Path((_sid, eid)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    let text = body["text"].as_str().unwrap_or_default().to_string();

    match eid.as_str() {
        EMAIL => state.email = text,
        PASSWORD => {
            if state.password_disabled {
                return error(
                    StatusCode::BAD_REQUEST,
                    "element not interactable",
                    "the password field is not accepting input",
                );
            }
            state.password = text;
        }
        _ => {
            return error(
                StatusCode::BAD_REQUEST,
                "invalid element state",
                &format!("element '{eid}' does not accept text"),
            );
        }
    }
    ok(Value::Null)
}

async fn click(
    State(state): State<Shared>,
    Path((_sid, eid)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();

    match eid.as_str() {
        LOGIN_MENU => state.screen = Screen::Login,
        SUBMIT => {
            state.submit_count += 1;
            state.submitted = Some((state.email.clone(), state.password.clone()));
            state.screen = Screen::Alert;
            state.displayed_checks = 0;
        }
        ALERT_OK => state.screen = Screen::Login,
        _ => {}
    }
    ok(Value::Null)
}

async fn text(
    State(_state): State<Shared>,
    Path((_sid, eid)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    let value = if eid == ALERT_MESSAGE {
        FEEDBACK_TEXT
    } else {
        ""
    };
    ok(json!(value))
}

async fn displayed(
    State(state): State<Shared>,
    Path((_sid, eid)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    let visible = if eid == ALERT_MESSAGE {
        state.displayed_checks += 1;
        state.displayed_checks > state.alert_visible_after
    } else {
        true
    };
    ok(json!(visible))
}

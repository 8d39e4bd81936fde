//! End-to-end tests driving the router with a cookie-carrying client.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use studybot_infra::sqlite::pool::DatabasePool;
use studybot_types::config::{AppConfig, DEFAULT_SECRET_KEY};

use crate::http::handlers::auth::{
    INVALID_LOGIN_MESSAGE, LOGGED_IN_MESSAGE, LOGGED_OUT_MESSAGE, MISSING_FIELDS_MESSAGE,
    REGISTERED_MESSAGE, USERNAME_TAKEN_MESSAGE,
};
use crate::http::extractors::session::LOGIN_REQUIRED_MESSAGE;
use crate::http::router::{build_router, SESSION_COOKIE_NAME};
use crate::state::AppState;

const GREETING: &str = "Hello 👋! How can I assist you today?";

/// Browser stand-in: one router, one cookie jar with a single session cookie.
struct TestClient {
    router: Router,
    state: AppState,
    cookie: Option<String>,
    _dir: TempDir,
}

impl TestClient {
    async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let pool = DatabasePool::open(&dir.path().join("studybot.db"))
            .await
            .unwrap();
        let state = AppState::from_parts(
            pool,
            AppConfig::default(),
            DEFAULT_SECRET_KEY,
            dir.path().to_path_buf(),
        )
        .unwrap();

        Self {
            router: build_router(state.clone()),
            state,
            cookie: None,
            _dir: dir,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> Response {
        let response = self.router.clone().oneshot(request).await.unwrap();
        if let Some(value) = response.headers().get(header::SET_COOKIE) {
            let pair = value.to_str().unwrap().split(';').next().unwrap();
            let (name, cookie_value) = pair.split_once('=').unwrap();
            assert_eq!(name, SESSION_COOKIE_NAME);
            // An empty value is the removal cookie for a deleted session.
            self.cookie = (!cookie_value.is_empty()).then(|| pair.to_string());
        }
        response
    }

    async fn get(&mut self, uri: &str) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> Response {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{k}={}", encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }

    async fn register(&mut self, username: &str, password: &str) -> Response {
        self.post_form("/register", &[("username", username), ("password", password)])
            .await
    }

    async fn login(&mut self, username: &str, password: &str) -> Response {
        self.post_form("/login", &[("username", username), ("password", password)])
            .await
    }
}

/// Minimal form encoding for the characters these tests use.
fn encode(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace('+', "%2B")
        .replace(' ', "+")
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

fn history_len(html: &str) -> usize {
    html.matches("class=\"entry entry-").count()
}

#[tokio::test]
async fn test_health_reports_ok() {
    let mut client = TestClient::new().await;
    let response = client.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_anonymous_landing_page_sets_no_cookie() {
    let mut client = TestClient::new().await;
    let response = client.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let html = body_text(response).await;
    assert!(html.contains("/login"));
    assert!(html.contains("/register"));
}

#[tokio::test]
async fn test_register_redirects_to_login_with_flash() {
    let mut client = TestClient::new().await;
    let response = client.register("alice", "pw").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let html = body_text(client.get("/login").await).await;
    assert!(html.contains(REGISTERED_MESSAGE));

    // Flashes are shown once.
    let html = body_text(client.get("/login").await).await;
    assert!(!html.contains(REGISTERED_MESSAGE));
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let mut client = TestClient::new().await;
    client.register("alice", "pw").await;

    let response = client.register("alice", "other").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(USERNAME_TAKEN_MESSAGE));

    let users = client.state.auth_service.list_users().await.unwrap();
    assert_eq!(users.len(), 1);

    // The original password still works.
    let response = client.login("alice", "pw").await;
    assert_eq!(location(&response), "/chatbot");
}

#[tokio::test]
async fn test_blank_registration_fields_are_rejected() {
    let mut client = TestClient::new().await;

    let response = client.register("", "pw").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(MISSING_FIELDS_MESSAGE));

    let response = client
        .post_form("/register", &[("username", "bob")])
        .await;
    assert!(body_text(response).await.contains(MISSING_FIELDS_MESSAGE));

    let users = client.state.auth_service.list_users().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_wrong_password_does_not_sign_in() {
    let mut client = TestClient::new().await;
    client.register("alice", "pw").await;

    let response = client.login("alice", "nope").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(INVALID_LOGIN_MESSAGE));

    let response = client.login("mallory", "pw").await;
    assert!(body_text(response).await.contains(INVALID_LOGIN_MESSAGE));

    let response = client.get("/chatbot").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let html = body_text(client.get("/login").await).await;
    assert!(html.contains(LOGIN_REQUIRED_MESSAGE));
}

#[tokio::test]
async fn test_chat_flow_from_login_to_logout() {
    let mut client = TestClient::new().await;
    client.register("alice", "pw").await;

    let response = client.login("alice", "pw").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/chatbot");

    let html = body_text(client.get("/chatbot").await).await;
    assert!(html.contains(LOGGED_IN_MESSAGE));
    assert!(html.contains("alice"));
    assert_eq!(history_len(&html), 0);

    let response = client.post_form("/chatbot", &[("message", "hello")]).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert_eq!(history_len(&html), 2);
    assert!(html.contains(GREETING));

    // Blank messages leave the history alone.
    let html = body_text(client.post_form("/chatbot", &[("message", "   ")]).await).await;
    assert_eq!(history_len(&html), 2);

    let html = body_text(client.get("/chatbot").await).await;
    assert_eq!(history_len(&html), 2);

    let response = client.get("/logout").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let html = body_text(client.get("/").await).await;
    assert!(html.contains(LOGGED_OUT_MESSAGE));

    let response = client.get("/chatbot").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_anonymous_session_records_do_not_accumulate() {
    let mut client = TestClient::new().await;
    let store = client.state.session_store.clone();
    let mut used_cookies = Vec::new();

    for _ in 0..50 {
        client.cookie = None;

        // The login-required warning needs a record to travel in...
        let response = client.get("/chatbot").await;
        assert_eq!(location(&response), "/login");
        let cookie = client.cookie.clone().unwrap();
        assert_eq!(store.len().await, 1);

        // ...which is deleted once the flash has been shown.
        let html = body_text(client.get("/login").await).await;
        assert!(html.contains(LOGIN_REQUIRED_MESSAGE));
        assert!(client.cookie.is_none());
        assert!(store.is_empty().await);

        used_cookies.push(cookie);
    }

    for cookie in used_cookies {
        client.cookie = Some(cookie);
        let response = client.get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_logout_releases_session_record() {
    let mut client = TestClient::new().await;
    let store = client.state.session_store.clone();
    client.register("alice", "pw").await;
    client.get("/login").await;
    assert!(store.is_empty().await);

    client.login("alice", "pw").await;
    client.post_form("/chatbot", &[("message", "hello")]).await;
    assert_eq!(store.len().await, 1);

    client.get("/logout").await;
    assert_eq!(store.len().await, 1);
    let html = body_text(client.get("/").await).await;
    assert!(html.contains(LOGGED_OUT_MESSAGE));
    assert!(store.is_empty().await);
    assert!(client.cookie.is_none());
}

#[tokio::test]
async fn test_login_starts_with_empty_history() {
    let mut client = TestClient::new().await;
    client.register("alice", "pw").await;
    client.login("alice", "pw").await;
    client.post_form("/chatbot", &[("message", "exam dates")]).await;

    // Signing in again, without logging out, resets the conversation.
    client.login("alice", "pw").await;
    let html = body_text(client.get("/chatbot").await).await;
    assert_eq!(history_len(&html), 0);
}

#[tokio::test]
async fn test_session_cookie_is_required() {
    let mut client = TestClient::new().await;
    client.register("alice", "pw").await;
    client.login("alice", "pw").await;

    client.cookie = None;
    let response = client.get("/chatbot").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_tampered_cookie_is_ignored() {
    let mut client = TestClient::new().await;
    client.register("alice", "pw").await;
    client.login("alice", "pw").await;

    let cookie = client.cookie.clone().unwrap();
    client.cookie = Some(format!("{cookie}x"));
    let response = client.get("/chatbot").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

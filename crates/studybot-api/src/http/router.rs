//! Axum router configuration with middleware.
//!
//! Pages are served at the root. Middleware: signed cookie sessions held in
//! memory with an idle timeout (see `EphemeralSessionStore`), request tracing.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer};

use crate::http::handlers;
use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "studybot_session";

/// Sessions idle for longer than this are treated as expired.
pub const SESSION_IDLE_TIMEOUT: Duration = Duration::hours(12);

/// How often expired session records are swept from the store.
pub const SESSION_SWEEP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(300);

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(state.session_store.clone())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(state.config.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(SESSION_IDLE_TIMEOUT))
        .with_signed(state.session_key.clone());

    Router::new()
        .route("/", get(handlers::home::index))
        .route(
            "/register",
            get(handlers::auth::register_form).post(handlers::auth::register),
        )
        .route(
            "/login",
            get(handlers::auth::login_form).post(handlers::auth::login),
        )
        .route(
            "/chatbot",
            get(handlers::chat::show).post(handlers::chat::send),
        )
        .route("/logout", get(handlers::auth::logout))
        .route("/health", get(health_check))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness check.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

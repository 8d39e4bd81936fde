//! Application error type rendered as a generic HTML 500 page.
//!
//! User-recoverable failures (missing fields, taken usernames, bad credentials)
//! never reach this type: handlers turn them into flash messages. What remains
//! is infrastructure failure, which is logged in full and shown generically.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use studybot_types::error::AuthError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Auth failure a handler did not turn into a flash (storage, hashing).
    Auth(AuthError),
    /// Session store or session extraction failure.
    Session(String),
    /// Template lookup or rendering failure.
    Template(String),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(e: tower_sessions::session::Error) -> Self {
        AppError::Session(e.to_string())
    }
}

impl From<minijinja::Error> for AppError {
    fn from(e: minijinja::Error) -> Self {
        AppError::Template(e.to_string())
    }
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::Auth(_) => "AUTH_ERROR",
            AppError::Session(_) => "SESSION_ERROR",
            AppError::Template(_) => "TEMPLATE_ERROR",
        }
    }

    /// Underlying failure, for the log only.
    fn detail(&self) -> String {
        match self {
            AppError::Auth(e) => e.to_string(),
            AppError::Session(detail) | AppError::Template(detail) => detail.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let code = self.code();
        tracing::error!(code, detail = %self.detail(), "request failed");

        let body = format!(
            "<!doctype html>\n<html><head><title>Error</title></head><body>\
             <h1>{} {}</h1><p>Something went wrong ({code}). Please try again.</p>\
             <p><a href=\"/\">Back to home</a></p></body></html>",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error"),
        );

        (status, Html(body)).into_response()
    }
}

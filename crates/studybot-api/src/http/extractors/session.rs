//! Typed per-request session record.
//!
//! Everything a browser session carries (the signed-in user, the chat
//! history, pending flash messages) lives in one serde record stored under a
//! single key in `tower-sessions`. Handlers extract [`SessionContext`], mutate
//! `ctx.data`, and call [`SessionContext::commit`] before responding.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use studybot_core::chat::log::ConversationLog;
use studybot_types::user::{User, UserId};

use crate::http::error::AppError;
use crate::state::AppState;

/// Key under which [`SessionData`] is stored in the session.
pub const SESSION_DATA_KEY: &str = "studybot.session";

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to view that page.";

/// The signed-in identity kept in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Danger,
    Warning,
    Info,
}

/// A one-shot message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionData {
    pub user: Option<SessionUser>,
    pub history: ConversationLog,
    pub flashes: Vec<Flash>,
}

impl SessionData {
    /// Mark `user` as signed in and start a fresh conversation.
    pub fn sign_in(&mut self, user: &User) {
        self.user = Some(SessionUser::from(user));
        self.history.clear();
    }

    /// Forget the user and their conversation. Pending flashes survive.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.history.clear();
    }

    /// Nothing worth keeping a server-side record for.
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.history.is_empty() && self.flashes.is_empty()
    }

    pub fn flash(&mut self, level: FlashLevel, message: impl Into<String>) {
        self.flashes.push(Flash {
            level,
            message: message.into(),
        });
    }

    pub fn take_flashes(&mut self) -> Vec<Flash> {
        std::mem::take(&mut self.flashes)
    }
}

/// Session handle plus the decoded record.
pub struct SessionContext {
    session: Session,
    pub data: SessionData,
    loaded: SessionData,
}

impl SessionContext {
    pub fn new(session: Session, data: SessionData) -> Self {
        Self {
            session,
            loaded: data.clone(),
            data,
        }
    }

    /// Persist `data` if it changed since it was loaded or last committed.
    ///
    /// Untouched anonymous sessions are never written, so no cookie is issued
    /// until there is something to remember. A record that drains back to the
    /// empty state (signed out, no history, no flashes) is deleted from the
    /// store and its cookie removed.
    pub async fn commit(&mut self) -> Result<(), AppError> {
        if self.data == self.loaded {
            return Ok(());
        }
        if self.data.is_empty() {
            self.session.flush().await?;
        } else {
            self.session.insert(SESSION_DATA_KEY, &self.data).await?;
        }
        self.loaded = self.data.clone();
        Ok(())
    }

    /// Issue a new session id, keeping the record. Used on login.
    pub async fn rotate_id(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        Ok(())
    }
}

impl FromRequestParts<AppState> for SessionContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Session(msg.to_string()))?;

        let data = match session.get::<SessionData>(SESSION_DATA_KEY).await {
            Ok(data) => data.unwrap_or_default(),
            Err(e) => {
                // A record from an older layout is dropped, not fatal.
                tracing::warn!(error = %e, "discarding unreadable session record");
                SessionData::default()
            }
        };

        Ok(Self::new(session, data))
    }
}

/// Session of a signed-in user.
///
/// Rejects with a warning flash and a redirect to `/login` when nobody is
/// signed in.
pub struct SignedIn {
    pub ctx: SessionContext,
    pub user: SessionUser,
}

impl FromRequestParts<AppState> for SignedIn {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let mut ctx = SessionContext::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match ctx.data.user.clone() {
            Some(user) => Ok(Self { ctx, user }),
            None => {
                ctx.data.flash(FlashLevel::Warning, LOGIN_REQUIRED_MESSAGE);
                ctx.commit().await.map_err(IntoResponse::into_response)?;
                Err(Redirect::to("/login").into_response())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            id: UserId(7),
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[test]
    fn test_sign_in_resets_history() {
        let mut data = SessionData::default();
        data.history.record_turn("hi", "hello");

        data.sign_in(&alice());

        assert!(data.user.is_some());
        assert_eq!(data.user.as_ref().unwrap().username, "alice");
        assert!(data.history.is_empty());
    }

    #[test]
    fn test_sign_out_keeps_flashes() {
        let mut data = SessionData::default();
        data.sign_in(&alice());
        data.history.record_turn("hi", "hello");

        data.sign_out();
        data.flash(FlashLevel::Info, "You have been logged out.");

        assert!(data.user.is_none());
        assert!(data.history.is_empty());
        assert_eq!(data.flashes.len(), 1);
    }

    #[test]
    fn test_take_flashes_drains() {
        let mut data = SessionData::default();
        data.flash(FlashLevel::Success, "one");
        data.flash(FlashLevel::Danger, "two");

        let taken = data.take_flashes();
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[1].level, FlashLevel::Danger);
        assert!(data.take_flashes().is_empty());
    }

    #[test]
    fn test_session_data_serde_shape() {
        let mut data = SessionData::default();
        data.sign_in(&alice());
        data.flash(FlashLevel::Warning, "careful");

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["user"]["id"], 7);
        assert_eq!(json["user"]["username"], "alice");
        assert_eq!(json["flashes"][0]["level"], "warning");
        assert!(json["history"].as_array().unwrap().is_empty());
        assert!(json.get("password_hash").is_none());

        let back: SessionData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_is_empty_tracks_what_needs_storing() {
        let mut data = SessionData::default();
        assert!(data.is_empty());

        data.flash(FlashLevel::Warning, "careful");
        assert!(!data.is_empty());
        data.take_flashes();
        assert!(data.is_empty());

        data.sign_in(&alice());
        assert!(!data.is_empty());
        data.sign_out();
        assert!(data.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let data: SessionData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, SessionData::default());
    }
}

//! Chatbot page for signed-in users.

use axum::extract::State;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;

use studybot_core::chat::service::handle_message;

use crate::http::error::AppError;
use crate::http::extractors::session::SignedIn;
use crate::http::templates::render_page;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatForm {
    pub message: String,
}

/// GET /chatbot - Show the conversation so far.
pub async fn show(
    State(state): State<AppState>,
    SignedIn { mut ctx, .. }: SignedIn,
) -> Result<Response, AppError> {
    render_page(&state, &mut ctx, "chatbot.html").await
}

/// POST /chatbot - Answer one message and show the updated conversation.
pub async fn send(
    State(state): State<AppState>,
    SignedIn { mut ctx, user }: SignedIn,
    Form(form): Form<ChatForm>,
) -> Result<Response, AppError> {
    if handle_message(&mut ctx.data.history, &form.message).is_some() {
        tracing::debug!(user_id = %user.id, "answered chat message");
    }
    render_page(&state, &mut ctx, "chatbot.html").await
}

//! Registration, login, and logout pages.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use studybot_types::error::AuthError;

use crate::http::error::AppError;
use crate::http::extractors::session::{FlashLevel, SessionContext};
use crate::http::templates::render_page;
use crate::state::AppState;

pub const REGISTERED_MESSAGE: &str = "Registration successful. Please log in.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please provide both username and password.";
pub const USERNAME_TAKEN_MESSAGE: &str = "Username already taken. Choose another.";
pub const LOGGED_IN_MESSAGE: &str = "Logged in successfully.";
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid username or password.";
pub const LOGGED_OUT_MESSAGE: &str = "You have been logged out.";

/// Form body shared by `/register` and `/login`. Absent fields are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// GET /register
pub async fn register_form(
    State(state): State<AppState>,
    mut ctx: SessionContext,
) -> Result<Response, AppError> {
    render_page(&state, &mut ctx, "register.html").await
}

/// POST /register - Create an account, then send the user to the login page.
pub async fn register(
    State(state): State<AppState>,
    mut ctx: SessionContext,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, AppError> {
    match state
        .auth_service
        .register(&form.username, &form.password)
        .await
    {
        Ok(_) => {
            ctx.data.flash(FlashLevel::Success, REGISTERED_MESSAGE);
            ctx.commit().await?;
            Ok(Redirect::to("/login").into_response())
        }
        Err(AuthError::MissingCredentials) => {
            ctx.data.flash(FlashLevel::Danger, MISSING_FIELDS_MESSAGE);
            render_page(&state, &mut ctx, "register.html").await
        }
        Err(AuthError::UsernameTaken(_)) => {
            ctx.data.flash(FlashLevel::Danger, USERNAME_TAKEN_MESSAGE);
            render_page(&state, &mut ctx, "register.html").await
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /login
pub async fn login_form(
    State(state): State<AppState>,
    mut ctx: SessionContext,
) -> Result<Response, AppError> {
    render_page(&state, &mut ctx, "login.html").await
}

/// POST /login - Sign in and open the chatbot with an empty history.
pub async fn login(
    State(state): State<AppState>,
    mut ctx: SessionContext,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, AppError> {
    match state
        .auth_service
        .login(&form.username, &form.password)
        .await
    {
        Ok(user) => {
            ctx.rotate_id().await?;
            ctx.data.sign_in(&user);
            ctx.data.flash(FlashLevel::Success, LOGGED_IN_MESSAGE);
            ctx.commit().await?;
            Ok(Redirect::to("/chatbot").into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            ctx.data.flash(FlashLevel::Danger, INVALID_LOGIN_MESSAGE);
            render_page(&state, &mut ctx, "login.html").await
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /logout - Forget the user and their conversation.
pub async fn logout(mut ctx: SessionContext) -> Result<Response, AppError> {
    if let Some(user) = &ctx.data.user {
        tracing::info!(user_id = %user.id, "logged out");
    }
    ctx.data.sign_out();
    ctx.data.flash(FlashLevel::Info, LOGGED_OUT_MESSAGE);
    ctx.commit().await?;
    Ok(Redirect::to("/").into_response())
}

//! Landing page.

use axum::extract::State;
use axum::response::Response;

use crate::http::error::AppError;
use crate::http::extractors::session::SessionContext;
use crate::http::templates::render_page;
use crate::state::AppState;

/// GET / - Landing page, showing the signed-in username if any.
pub async fn index(
    State(state): State<AppState>,
    mut ctx: SessionContext,
) -> Result<Response, AppError> {
    render_page(&state, &mut ctx, "index.html").await
}

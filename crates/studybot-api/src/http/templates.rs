//! Embedded HTML templates.
//!
//! Templates are compiled into the binary and loaded into one minijinja
//! environment at startup. Auto-escaping is on for `.html` names, so user
//! text (usernames, chat messages) is always escaped on output.

use axum::response::{Html, IntoResponse, Response};
use minijinja::{context, Environment, Value};
use studybot_types::chat::HistoryEntry;

use crate::http::error::AppError;
use crate::http::extractors::session::SessionContext;
use crate::state::AppState;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("register.html", include_str!("../../templates/register.html")),
    ("login.html", include_str!("../../templates/login.html")),
    ("chatbot.html", include_str!("../../templates/chatbot.html")),
];

/// Build the template environment with every embedded template registered.
pub fn build_environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    for &(name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

/// Template rows for the transcript: speaker class, display label, text.
pub fn history_rows(entries: &[HistoryEntry]) -> Vec<Value> {
    entries
        .iter()
        .map(|entry| {
            context! {
                speaker => entry.speaker.to_string(),
                label => entry.speaker.label(),
                text => entry.text.as_str(),
            }
        })
        .collect()
}

/// Render a page for the current session.
///
/// Drains pending flash messages (persisting the drained state), then renders
/// `template` with the signed-in username, the flashes, and the conversation
/// history.
pub async fn render_page(
    state: &AppState,
    ctx: &mut SessionContext,
    template: &str,
) -> Result<Response, AppError> {
    let flashes = ctx.data.take_flashes();
    ctx.commit().await?;

    let username = ctx.data.user.as_ref().map(|u| u.username.as_str());
    let html = state.templates.get_template(template)?.render(context! {
        username => username,
        flashes => flashes,
        history => history_rows(ctx.data.history.entries()),
    })?;

    Ok(Html(html).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_compile() {
        let env = build_environment().unwrap();
        for &(name, _) in TEMPLATES {
            assert!(env.get_template(name).is_ok(), "{name} missing");
        }
    }

    #[test]
    fn test_user_text_is_escaped() {
        let env = build_environment().unwrap();
        let html = env
            .get_template("chatbot.html")
            .unwrap()
            .render(context! {
                username => "<b>eve</b>",
                flashes => Vec::<String>::new(),
                history => history_rows(&[HistoryEntry::user("<script>x</script>")]),
            })
            .unwrap();
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>eve</b>"));
    }

    #[test]
    fn test_transcript_uses_speaker_labels() {
        let env = build_environment().unwrap();
        let html = env
            .get_template("chatbot.html")
            .unwrap()
            .render(context! {
                username => "alice",
                flashes => Vec::<String>::new(),
                history => history_rows(&[HistoryEntry::user("hi"), HistoryEntry::bot("hello")]),
            })
            .unwrap();
        assert!(html.contains("<span class=\"speaker-user\">You:</span>"));
        assert!(html.contains("<span class=\"speaker-bot\">Bot:</span>"));
        assert!(html.contains("class=\"entry entry-bot\""));
    }

    #[test]
    fn test_index_shows_username_when_signed_in() {
        let env = build_environment().unwrap();
        let tmpl = env.get_template("index.html").unwrap();

        let signed_in = tmpl
            .render(context! { username => "alice", flashes => Vec::<String>::new() })
            .unwrap();
        assert!(signed_in.contains("alice"));
        assert!(signed_in.contains("/logout"));

        let anonymous = tmpl
            .render(context! { username => None::<String>, flashes => Vec::<String>::new() })
            .unwrap();
        assert!(anonymous.contains("/login"));
        assert!(anonymous.contains("/register"));
    }
}

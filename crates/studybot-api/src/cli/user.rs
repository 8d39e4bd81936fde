//! Account management CLI commands: add, list.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use dialoguer::Password;

use crate::state::AppState;

/// Register an account from the terminal.
///
/// # Examples
///
/// ```bash
/// # Hidden prompt (recommended)
/// studybot user add alice
///
/// # Script/automation mode
/// STUDYBOT_PASSWORD=... studybot user add alice
/// ```
pub async fn add_user(
    state: &AppState,
    username: &str,
    password: Option<String>,
    json: bool,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt(format!("Password for {}", style(username).bold()))
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let user = state.auth_service.register(username, &password).await?;

    if json {
        println!("{}", serde_json::to_string(&user)?);
    } else {
        println!(
            "  {} User '{}' registered (id {})",
            style("✓").green().bold(),
            style(&user.username).bold(),
            user.id
        );
    }

    Ok(())
}

/// List registered accounts.
pub async fn list_users(state: &AppState, json: bool) -> Result<()> {
    let users = state.auth_service.list_users().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&users)?);
        return Ok(());
    }

    if users.is_empty() {
        println!();
        println!(
            "  {} No users registered. Add one with: {}",
            style("i").blue().bold(),
            style("studybot user add <name>").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("Username").fg(Color::White),
    ]);

    for user in &users {
        table.add_row(vec![
            Cell::new(user.id).fg(Color::DarkGrey),
            Cell::new(&user.username).fg(Color::Cyan),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} user{}",
        style(users.len()).bold(),
        if users.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

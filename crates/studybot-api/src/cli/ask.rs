//! Offline responder commands: ask, rules.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use studybot_core::responder::{self, Rule, Trigger};

/// Answer one question with the rule table and print the reply.
pub fn ask(words: &[String], json: bool) -> Result<()> {
    let message = words.join(" ");
    let reply = responder::respond(&message);
    let rule = responder::matching_rule(&message);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "message": message,
                "topic": rule.map(|r| r.topic),
                "reply": reply,
            })
        );
        return Ok(());
    }

    println!();
    println!("  {} {}", style("You:").bold(), message);
    println!("  {} {}", style("Bot:").cyan().bold(), reply);
    if let Some(rule) = rule {
        println!("  {}", style(format!("matched rule: {}", rule.topic)).dim());
    }
    println!();

    Ok(())
}

/// Print the rule table, optionally filtered by needle text.
pub fn list_rules(needle: Option<&str>, json: bool) -> Result<()> {
    let needle = needle.map(str::to_lowercase);
    let selected: Vec<(usize, &Rule)> = responder::rules()
        .iter()
        .enumerate()
        .filter(|(_, rule)| match &needle {
            Some(n) => rule.trigger.needles().iter().any(|x| x.contains(n.as_str())),
            None => true,
        })
        .collect();

    if json {
        let rows: Vec<serde_json::Value> = selected
            .iter()
            .map(|(idx, rule)| serde_json::json!({ "position": idx + 1, "rule": rule }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Topic").fg(Color::White),
        Cell::new("Trigger").fg(Color::White),
        Cell::new("Reply").fg(Color::White),
    ]);

    for (idx, rule) in &selected {
        table.add_row(vec![
            Cell::new(idx + 1).fg(Color::DarkGrey),
            Cell::new(rule.topic).fg(Color::Cyan),
            Cell::new(describe_trigger(&rule.trigger)),
            Cell::new(rule.reply),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} rule{} (first match wins, top to bottom)",
        style(selected.len()).bold(),
        if selected.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

fn describe_trigger(trigger: &Trigger) -> String {
    let quoted: Vec<String> = trigger.needles().iter().map(|n| format!("\"{n}\"")).collect();
    match trigger {
        Trigger::Any(_) => quoted.join(" or "),
        Trigger::All(_) => quoted.join(" and "),
    }
}

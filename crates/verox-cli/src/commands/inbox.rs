use super::load_catalog;
use crate::render;
use anyhow::{Result, bail};
use colored::Colorize;
use verox_core::config::AppConfig;
use verox_core::inbox::{inbox_thread, search_inbox};

/// Lists lead conversations matching `query`, or prints one lead's thread.
pub async fn run(config: &AppConfig, query: &str, lead: Option<&str>, json: bool) -> Result<()> {
    let catalog = load_catalog(config).await?;

    if let Some(id) = lead {
        let Some(lead) = catalog.find_lead(id) else {
            bail!("No lead with id {}", id);
        };
        let thread = inbox_thread(&lead);
        if json {
            println!("{}", serde_json::to_string_pretty(&thread)?);
            return Ok(());
        }
        println!("{}", format!("{} · {}", lead.name, lead.franchise).bold());
        for message in &thread {
            println!("{}", render::message(message));
        }
        return Ok(());
    }

    let conversations = search_inbox(catalog.leads(), query);
    tracing::debug!("[inbox] {} conversations match {:?}", conversations.len(), query);
    if json {
        println!("{}", serde_json::to_string_pretty(&conversations)?);
        return Ok(());
    }
    if conversations.is_empty() {
        println!("{}", "No conversations found".yellow());
    }
    for lead in &conversations {
        println!("{}", render::inbox_row(lead));
    }
    Ok(())
}

use super::load_catalog;
use crate::render;
use anyhow::{Result, bail};
use colored::Colorize;
use verox_core::advisor::advise;
use verox_core::config::AppConfig;

pub async fn run(config: &AppConfig, text: &str, json: bool) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Message must not be empty");
    }
    let catalog = load_catalog(config).await?;
    let reply = advise(text, &catalog);
    tracing::debug!("[recommend] intent={}", reply.intent);

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    println!("{}", format!("intent: {}", reply.intent).bright_black());
    println!("{}", reply.text.bright_blue());
    if reply.recommendations.is_empty() {
        println!("{}", "No matching franchises in the catalog.".yellow());
    }
    for franchise in &reply.recommendations {
        println!("{}", render::franchise_card(franchise));
    }
    Ok(())
}

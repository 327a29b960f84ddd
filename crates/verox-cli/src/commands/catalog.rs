use super::load_catalog;
use crate::render;
use anyhow::Result;
use colored::Colorize;
use verox_core::config::AppConfig;

pub async fn run(config: &AppConfig, json: bool) -> Result<()> {
    let catalog = load_catalog(config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.franchises())?);
        return Ok(());
    }

    println!(
        "{}",
        format!("{} franchises", catalog.franchises().len()).bright_magenta().bold()
    );
    for franchise in catalog.franchises() {
        println!("{}", render::franchise_card(franchise));
    }
    Ok(())
}

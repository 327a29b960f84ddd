use super::load_catalog;
use crate::render;
use anyhow::Result;
use colored::Colorize;
use verox_core::config::AppConfig;
use verox_core::pipeline::{LeadFilter, PipelineStats};

pub async fn run(config: &AppConfig, filter: LeadFilter, stats: bool, json: bool) -> Result<()> {
    let catalog = load_catalog(config).await?;
    let leads = filter.apply(catalog.roster());
    tracing::debug!("[leads] {} of {} leads match", leads.len(), catalog.roster().count());

    if stats {
        let stats = PipelineStats::from_leads(&leads);
        if json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("{}", render::pipeline_stats(&stats));
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&leads)?);
        return Ok(());
    }

    if leads.is_empty() {
        println!("{}", "No leads match the filter.".yellow());
    }
    for lead in &leads {
        println!("{}", render::lead_row(lead));
    }
    Ok(())
}

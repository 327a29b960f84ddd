//! Terminal rendering of domain records.

use chrono::Local;
use colored::{ColoredString, Colorize};
use verox_core::catalog::{FranchiseRecord, LeadQuality, LeadRecord, thousands_label};
use verox_core::inbox::{lead_transcript, next_actions};
use verox_core::pipeline::PipelineStats;
use verox_core::session::{Message, MessageRole};
use verox_core::view::ViewRouter;

fn match_badge(score: u8) -> ColoredString {
    let label = format!("{}% Match", score);
    if score >= 80 {
        label.bright_green().bold()
    } else if score >= 60 {
        label.yellow()
    } else {
        label.bright_black()
    }
}

fn quality_badge(quality: LeadQuality) -> ColoredString {
    let label = quality.to_string();
    match quality {
        LeadQuality::Hot => label.bright_red().bold(),
        LeadQuality::Warm => label.yellow(),
        LeadQuality::Cold => label.bright_blue(),
    }
}

/// Compact card shown under an advisor reply.
pub fn franchise_card(franchise: &FranchiseRecord) -> String {
    format!(
        "  {} {}  {}\n    {}\n    Investment {}  ROI {}%  Success {}%",
        format!("[{}]", franchise.id).bright_black(),
        franchise.name.bold(),
        match_badge(franchise.match_score),
        franchise.tagline.italic(),
        franchise.investment_range_label(),
        franchise.roi,
        franchise.success_rate
    )
}

/// Full franchise overlay.
pub fn franchise_detail(franchise: &FranchiseRecord) -> String {
    let mut out = vec![
        format!("{}  {}", franchise.name.bold().bright_magenta(), match_badge(franchise.match_score)),
        franchise.tagline.italic().to_string(),
        format!(
            "{} · Est. {} · {} units",
            franchise.industry, franchise.established, franchise.active_units
        ),
        String::new(),
        format!("Investment        {}", franchise.investment_range_label()),
        format!("Avg revenue       {}", thousands_label(franchise.avg_revenue)),
        format!("ROI               {}%", franchise.roi),
        format!("Success rate      {}%", franchise.success_rate),
        format!("Satisfaction      {:.1}/5", franchise.satisfaction_score),
        format!("Support rating    {:.1}/5", franchise.support_rating),
        format!("Profitability     {} months", franchise.months_to_profitability),
        format!("Territories open  {}", franchise.territories_available),
        format!("Liquid capital    {}", thousands_label(franchise.liquid_capital_required())),
        String::new(),
        "Investment breakdown".underline().to_string(),
    ];
    out.extend(
        franchise
            .investment_breakdown()
            .iter()
            .map(|(name, amount)| format!("  {:<16}{}", name, thousands_label(*amount))),
    );
    if !franchise.training.is_empty() {
        out.push(String::new());
        out.push(format!("Training: {}", franchise.training));
    }
    out.join("\n")
}

/// One roster line.
pub fn lead_row(lead: &LeadRecord) -> String {
    format!(
        "{:>4}  {:<18} {:<6} {:<12} {:<20} intent {:>3}%  {}",
        format!("#{}", lead.id).bright_black(),
        lead.name,
        quality_badge(lead.quality),
        lead.stage.to_string(),
        lead.franchise,
        lead.intent_score,
        lead.timestamp.with_timezone(&Local).format("%Y-%m-%d")
    )
}

pub fn lead_detail(lead: &LeadRecord) -> String {
    let mut out = vec![
        format!("{}  {}  {}", lead.name.bold(), quality_badge(lead.quality), lead.stage),
        format!("Interested in {}", lead.franchise.bright_magenta()),
        String::new(),
        format!("Email      {}", lead.email),
        format!("Phone      {}", lead.phone),
        format!("Budget     {}", lead.budget),
        format!("Timeline   {}", lead.timeline),
        format!("Sentiment  {}", lead.sentiment),
        format!("Intent     {}%", lead.intent_score),
        format!(
            "Last seen  {}",
            lead.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ),
        String::new(),
        "Conversation".underline().to_string(),
    ];
    out.extend(lead_transcript(lead).iter().map(message));
    out.push(String::new());
    out.push("Recommended next actions".underline().to_string());
    out.extend(
        next_actions(lead)
            .into_iter()
            .map(|action| format!("  {}\n    {}", action.title.bold(), action.detail.bright_black())),
    );
    out.join("\n")
}

/// One inbox line: who wrote and what they said last.
pub fn inbox_row(lead: &LeadRecord) -> String {
    format!(
        "{:>4}  {:<18} {}  {}",
        format!("#{}", lead.id).bright_black(),
        lead.name.bold(),
        lead.timestamp.with_timezone(&Local).format("%m-%d %H:%M").to_string().bright_black(),
        lead.last_message.italic()
    )
}

pub fn pipeline_stats(stats: &PipelineStats) -> String {
    let mut out = vec![
        format!("Total leads           {}", stats.total),
        format!(
            "Hot / Warm / Cold     {} / {} / {}",
            stats.hot.to_string().bright_red(),
            stats.warm.to_string().yellow(),
            stats.cold.to_string().bright_blue()
        ),
        format!("Active conversations  {}", stats.active_conversations),
        String::new(),
        "Pipeline".underline().to_string(),
    ];
    out.extend(stats.stage_distribution.iter().map(|(stage, count)| {
        format!(
            "  {:<12}{:>3}  {:>5.1}%",
            stage.to_string(),
            count,
            stats.stage_share(*stage)
        )
    }));
    out.join("\n")
}

pub fn message(message: &Message) -> String {
    let time = message.created_at.with_timezone(&Local).format("%H:%M");
    match message.role {
        MessageRole::User => format!("{} {}", time.to_string().bright_black(), message.content.green()),
        MessageRole::Assistant => format!(
            "{} {}",
            time.to_string().bright_black(),
            message.content.bright_blue()
        ),
    }
}

/// Short description of the current screen for the prompt.
pub fn prompt(router: &ViewRouter) -> String {
    match router.franchise_overlay() {
        Some(franchise) => format!("{}+{}> ", router.view().name(), franchise.id),
        None => format!("{}> ", router.view().name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verox_core::catalog::Catalog;

    #[test]
    fn test_franchise_detail_lists_breakdown() {
        colored::control::set_override(false);
        let catalog = Catalog::reference();
        let text = franchise_detail(&catalog.franchises()[0]);
        assert!(text.contains("Franchise Fee"));
        assert!(text.contains("Working Capital"));
        assert!(text.contains(&catalog.franchises()[0].investment_range_label()));
    }

    #[test]
    fn test_pipeline_stats_lists_each_stage() {
        colored::control::set_override(false);
        let catalog = Catalog::reference();
        let stats = PipelineStats::from_leads(catalog.roster());
        let text = pipeline_stats(&stats);
        for stage in stats.stage_distribution.keys() {
            assert!(text.contains(&stage.to_string()));
        }
        assert!(text.contains(&format!("Total leads           {}", stats.total)));
    }

    #[test]
    fn test_lead_detail_shows_conversation_and_actions() {
        colored::control::set_override(false);
        let catalog = Catalog::reference();
        let lead = catalog.find_lead("1").unwrap();
        let text = lead_detail(&lead);
        assert!(text.contains("Conversation"));
        assert!(text.contains("I'm your VeroX AI advisor"));
        assert!(text.contains(&lead.last_message));
        assert!(text.contains(&format!("help you with {}", lead.franchise)));
        assert!(text.contains("Schedule Discovery Call"));
        assert!(text.contains(&format!("They've shown interest in {}", lead.franchise)));
    }

    #[test]
    fn test_inbox_row_shows_last_message() {
        colored::control::set_override(false);
        let catalog = Catalog::reference();
        let lead = &catalog.leads()[2];
        let row = inbox_row(lead);
        assert!(row.contains(&lead.name));
        assert!(row.contains(&lead.last_message));
    }

    #[test]
    fn test_prompt_shows_overlay() {
        let catalog = Catalog::reference();
        let mut router = ViewRouter::new();
        assert_eq!(prompt(&router), "landing> ");
        router.go_to_chat();
        router.view_franchise(catalog.franchises()[1].clone());
        assert_eq!(
            prompt(&router),
            format!("chat+{}> ", catalog.franchises()[1].id)
        );
    }
}

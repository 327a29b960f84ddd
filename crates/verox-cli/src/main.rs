use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use verox_core::catalog::{LeadQuality, PipelineStage};
use verox_core::config::AppConfig;
use verox_core::error::Result as VeroxResult;
use verox_infrastructure::ConfigService;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "verox")]
#[command(about = "VeroX - conversational franchise advisor with a lead pipeline", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/verox/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the advisor (default)
    Chat,
    /// Answer a single message without starting a conversation
    Recommend {
        /// The message to classify
        text: String,
        /// Print the reply as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the franchise catalog
    Catalog {
        #[arg(long)]
        json: bool,
    },
    /// Query the lead roster
    Leads {
        /// Search name, email or franchise
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(long)]
        quality: Option<LeadQuality>,
        #[arg(long)]
        stage: Option<PipelineStage>,
        /// Show dashboard statistics instead of the roster
        #[arg(long)]
        stats: bool,
        #[arg(long)]
        json: bool,
    },
    /// Search lead conversations or print one lead's thread
    Inbox {
        /// Search name or last message
        #[arg(default_value = "")]
        query: String,
        /// Print the full thread for this lead id
        #[arg(long)]
        lead: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Log level to start with; the defaults apply when the config did not load.
fn log_level(loaded: &VeroxResult<AppConfig>) -> String {
    match loaded {
        Ok(config) => config.logging.level.clone(),
        Err(_) => AppConfig::default().logging.level,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    // A failed load is retried by get_config once tracing can report it
    init_tracing(&log_level(&config_service.load()));
    let config = config_service.get_config();
    tracing::debug!("[verox] Effective config: {:?}", config);

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => commands::chat::run(&config).await?,
        Commands::Recommend { text, json } => commands::recommend::run(&config, &text, json).await?,
        Commands::Catalog { json } => commands::catalog::run(&config, json).await?,
        Commands::Leads {
            query,
            quality,
            stage,
            stats,
            json,
        } => {
            let filter = verox_core::pipeline::LeadFilter {
                query,
                quality,
                stage,
            };
            commands::leads::run(&config, filter, stats, json).await?
        }
        Commands::Inbox { query, lead, json } => {
            commands::inbox::run(&config, &query, lead.as_deref(), json).await?
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config)?,
            ConfigAction::Path => commands::config::path(&config_service)?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use verox_core::VeroxError;

    #[test]
    fn test_log_level_follows_loaded_config() {
        let mut config = AppConfig::default();
        config.logging.level = "debug".to_string();
        assert_eq!(log_level(&Ok(config)), "debug");
        assert_eq!(log_level(&Err(VeroxError::config("unreadable"))), "info");
    }
}

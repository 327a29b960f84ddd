//! Interactive advisor chat.
//!
//! A rustyline REPL on top of [`ChatService`]. Plain lines are sent to the
//! advisor; lines starting with `/` navigate between screens or manage
//! conversations. Replies arrive asynchronously and are printed by a
//! background task subscribed to [`ChatEvent`]s.

use super::catalog_repository;
use crate::render;
use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::borrow::Cow::{self, Borrowed, Owned};
use verox_application::{ChatEvent, ChatService};
use verox_core::catalog::{CONVERSATION_STARTERS, GREETING};
use verox_core::config::AppConfig;
use verox_core::inbox::search_inbox;
use verox_core::pipeline::{LeadFilter, PipelineStats};
use verox_core::view::{View, ViewRouter};

const COMMANDS: [&str; 16] = [
    "/home",
    "/chat",
    "/dashboard",
    "/leads",
    "/lead",
    "/inbox",
    "/back",
    "/franchise",
    "/close",
    "/new",
    "/history",
    "/select",
    "/delete",
    "/help",
    "/quit",
    "/exit",
];

/// A parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Home,
    Chat,
    Dashboard,
    Leads(String),
    Lead(String),
    Inbox(String),
    Back,
    Franchise(String),
    Close,
    New,
    History,
    Select(String),
    Delete(String),
    Help,
    Quit,
    Say(String),
    Unknown(String),
}

impl ReplCommand {
    fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        if !trimmed.starts_with('/') {
            return Some(Self::Say(trimmed.to_string()));
        }

        let (name, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim().to_string()),
            None => (trimmed, String::new()),
        };
        let command = match name {
            "/home" => Self::Home,
            "/chat" => Self::Chat,
            "/dashboard" => Self::Dashboard,
            "/leads" => Self::Leads(arg),
            "/lead" if !arg.is_empty() => Self::Lead(arg),
            "/inbox" => Self::Inbox(arg),
            "/back" => Self::Back,
            "/franchise" if !arg.is_empty() => Self::Franchise(arg),
            "/close" => Self::Close,
            "/new" => Self::New,
            "/history" => Self::History,
            "/select" if !arg.is_empty() => Self::Select(arg),
            "/delete" if !arg.is_empty() => Self::Delete(arg),
            "/help" => Self::Help,
            "/quit" | "/exit" => Self::Quit,
            _ => Self::Unknown(trimmed.to_string()),
        };
        Some(command)
    }
}

/// Slash commands that extend `line`, or nothing once an argument is typed.
fn matching_commands(line: &str) -> impl Iterator<Item = &'static str> + '_ {
    let completable = line.starts_with('/') && !line.contains(' ');
    COMMANDS
        .into_iter()
        .filter(move |cmd| completable && cmd.starts_with(line))
}

/// rustyline helper completing and hinting slash commands.
#[derive(Clone)]
struct CliHelper;

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = matching_commands(&line[..pos])
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        matching_commands(line)
            .find(|cmd| cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

fn print_help() {
    let lines = [
        ("<text>", "ask the advisor (opens the chat)"),
        ("1-4", "pick a conversation starter in an empty chat"),
        ("/home /chat /dashboard", "switch screens"),
        ("/leads [query]", "list leads, optionally filtered"),
        ("/lead <id>", "open a lead"),
        ("/inbox [query]", "search lead conversations"),
        ("/back", "return from a lead to the dashboard"),
        ("/franchise <id>", "open franchise details"),
        ("/close", "close franchise details"),
        ("/new /history", "start or list conversations"),
        ("/select <id> /delete <id>", "switch to or delete a conversation"),
        ("/quit", "exit"),
    ];
    for (usage, text) in lines {
        println!("  {:<28}{}", usage.bright_cyan(), text.bright_black());
    }
}

fn print_greeting() {
    println!("{}", GREETING.bright_blue());
    for (i, starter) in CONVERSATION_STARTERS.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).bright_black(), starter.italic());
    }
}

async fn print_conversation(service: &ChatService) {
    let session = service.snapshot().await;
    if session.is_empty() {
        print_greeting();
        return;
    }
    for message in session.messages() {
        println!("{}", render::message(message));
    }
    for franchise in session.recommendations() {
        println!("{}", render::franchise_card(franchise));
    }
    if session.is_composing() {
        println!("{}", "advisor is typing...".bright_black().italic());
    }
}

fn print_dashboard(service: &ChatService) {
    let catalog = service.catalog();
    println!("{}", "Dashboard".bright_magenta().bold());
    println!("{}", render::pipeline_stats(&PipelineStats::from_leads(catalog.roster())));
    println!();
    println!("{}", "Recent leads".underline());
    for lead in catalog.leads() {
        println!("{}", render::lead_row(lead));
    }
}

async fn print_history(service: &ChatService) {
    let active_id = service.active_session_id().await;
    let summaries = service.list_summaries().await;
    if summaries.is_empty() {
        println!("{}", "No conversations yet.".bright_black());
    }
    for summary in summaries {
        let marker = if summary.id == active_id { "*" } else { " " };
        println!(
            "{} {}  {}  {}",
            marker.bright_green(),
            summary.id.bright_black(),
            summary.title.bold(),
            summary.preview.italic()
        );
    }
}

/// Prints events for the active conversation as they arrive.
fn spawn_event_printer(service: ChatService) -> tokio::task::JoinHandle<()> {
    let mut events = service.subscribe();
    tokio::spawn(async move {
        loop {
            let event = match events.recv().await {
                Ok(event) => event,
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("[chat] Event printer skipped {} events", skipped);
                    continue;
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            };
            if event.session_id() != service.active_session_id().await {
                continue;
            }
            match event {
                ChatEvent::ComposingChanged { composing: true, .. } => {
                    println!("{}", "advisor is typing...".bright_black().italic());
                }
                ChatEvent::AssistantReplied {
                    message,
                    recommendations,
                    ..
                } => {
                    println!("{}", render::message(&message));
                    for franchise in &recommendations {
                        println!("{}", render::franchise_card(franchise));
                    }
                }
                _ => {}
            }
        }
    })
}

async fn handle(
    command: ReplCommand,
    service: &ChatService,
    router: &mut ViewRouter,
) -> Result<bool> {
    let catalog = service.catalog().clone();
    match command {
        ReplCommand::Home => {
            router.go_to_home();
            println!("{}", "VeroX - find the franchise that fits you.".bright_magenta().bold());
            println!("{}", "Type a message or /chat to talk to the advisor.".bright_black());
        }
        ReplCommand::Chat => {
            router.go_to_chat();
            print_conversation(service).await;
        }
        ReplCommand::Dashboard => {
            router.go_to_dashboard();
            print_dashboard(service);
        }
        ReplCommand::Leads(query) => {
            let filter = LeadFilter {
                query,
                ..LeadFilter::default()
            };
            for lead in filter.apply(catalog.roster()) {
                println!("{}", render::lead_row(&lead));
            }
        }
        ReplCommand::Lead(id) => match catalog.find_lead(&id) {
            Some(lead) => {
                println!("{}", render::lead_detail(&lead));
                router.view_lead(lead);
            }
            None => println!("{}", format!("No lead with id {}", id).yellow()),
        },
        ReplCommand::Inbox(query) => {
            let conversations = search_inbox(catalog.leads(), &query);
            if conversations.is_empty() {
                println!("{}", "No conversations found".bright_black());
            }
            for lead in &conversations {
                println!("{}", render::inbox_row(lead));
            }
        }
        ReplCommand::Back => {
            if matches!(router.view(), View::LeadDetail { .. }) {
                router.back_from_lead();
                print_dashboard(service);
            }
        }
        ReplCommand::Franchise(key) => {
            let franchise = catalog
                .find_franchise(&key)
                .or_else(|| catalog.find_franchise_by_name(&key));
            match franchise {
                Some(franchise) => {
                    println!("{}", render::franchise_detail(&franchise));
                    router.view_franchise(franchise);
                }
                None => println!("{}", format!("No franchise {}", key).yellow()),
            }
        }
        ReplCommand::Close => router.close_franchise_modal(),
        ReplCommand::New => {
            service.start_new().await;
            router.go_to_chat();
            print_greeting();
        }
        ReplCommand::History => print_history(service).await,
        ReplCommand::Select(id) => match service.select(&id).await {
            Ok(()) => {
                router.go_to_chat();
                print_conversation(service).await;
            }
            Err(e) => println!("{}", e.to_string().yellow()),
        },
        ReplCommand::Delete(id) => {
            if service.delete(&id).await {
                println!("{}", format!("Deleted conversation {}", id).bright_black());
            } else {
                println!("{}", format!("No conversation {}", id).yellow());
            }
        }
        ReplCommand::Help => print_help(),
        ReplCommand::Quit => return Ok(false),
        ReplCommand::Say(text) => {
            if !matches!(router.view(), View::Chat) {
                router.go_to_chat();
            }
            let session = service.snapshot().await;
            let text = match text.parse::<usize>() {
                Ok(n) if (1..=session.suggestions().len()).contains(&n) => {
                    session.suggestions()[n - 1].to_string()
                }
                _ => text,
            };
            println!("{}", format!("> {}", text).green());
            // The handle is dropped; the reply is printed by the event task
            let _ = service.submit(&text).await;
        }
        ReplCommand::Unknown(line) => {
            println!("{}", format!("Unknown command: {}", line).bright_black());
        }
    }
    Ok(true)
}

pub async fn run(config: &AppConfig) -> Result<()> {
    let repository = catalog_repository(config);
    let service = ChatService::from_repository(repository.as_ref(), &config.chat).await?;
    let printer = spawn_event_printer(service.clone());
    let mut router = ViewRouter::new();

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper));

    println!("{}", "=== VeroX Advisor ===".bright_magenta().bold());
    println!("{}", "Type a message to chat, /help for commands, /quit to exit.".bright_black());
    println!();

    loop {
        match rl.readline(&render::prompt(&router)) {
            Ok(line) => {
                let Some(command) = ReplCommand::parse(&line) else {
                    continue;
                };
                let _ = rl.add_history_entry(line.as_str());
                if !handle(command, &service, &mut router).await? {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type /quit to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    printer.abort();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text() {
        assert_eq!(
            ReplCommand::parse("  show me food  "),
            Some(ReplCommand::Say("show me food".to_string()))
        );
        assert_eq!(ReplCommand::parse("   "), None);
    }

    #[test]
    fn test_parse_commands_with_arguments() {
        assert_eq!(ReplCommand::parse("/lead 3"), Some(ReplCommand::Lead("3".to_string())));
        assert_eq!(
            ReplCommand::parse("/leads sarah j"),
            Some(ReplCommand::Leads("sarah j".to_string()))
        );
        assert_eq!(ReplCommand::parse("/leads"), Some(ReplCommand::Leads(String::new())));
        assert_eq!(ReplCommand::parse("/exit"), Some(ReplCommand::Quit));
    }

    #[test]
    fn test_missing_argument_is_unknown() {
        assert_eq!(
            ReplCommand::parse("/lead"),
            Some(ReplCommand::Unknown("/lead".to_string()))
        );
        assert_eq!(
            ReplCommand::parse("/bogus"),
            Some(ReplCommand::Unknown("/bogus".to_string()))
        );
    }

    #[test]
    fn test_every_listed_command_parses() {
        for command in COMMANDS {
            let line = format!("{} 1", command);
            assert!(
                !matches!(ReplCommand::parse(&line), Some(ReplCommand::Unknown(_))),
                "{command}"
            );
        }
    }

    #[test]
    fn test_matching_commands_share_prefix() {
        let matches: Vec<_> = matching_commands("/le").collect();
        assert_eq!(matches, vec!["/leads", "/lead"]);
        assert_eq!(matching_commands("/hel").collect::<Vec<_>>(), vec!["/help"]);
        assert_eq!(matching_commands("/lead 2").count(), 0);
        assert_eq!(matching_commands("hello").count(), 0);
        assert_eq!(matching_commands("/").count(), COMMANDS.len());
    }

    #[test]
    fn test_inbox_argument_is_optional() {
        assert_eq!(ReplCommand::parse("/inbox"), Some(ReplCommand::Inbox(String::new())));
        assert_eq!(
            ReplCommand::parse("/inbox funding"),
            Some(ReplCommand::Inbox("funding".to_string()))
        );
    }

    #[tokio::test]
    async fn test_lead_round_trip_through_repl() {
        let config = AppConfig::default();
        let service = ChatService::from_repository(catalog_repository(&config).as_ref(), &config.chat)
            .await
            .unwrap();
        let mut router = ViewRouter::new();

        assert!(handle(ReplCommand::Lead("2".into()), &service, &mut router).await.unwrap());
        assert_eq!(router.view().name(), "lead-detail");
        handle(ReplCommand::Back, &service, &mut router).await.unwrap();
        assert_eq!(router.view(), &View::Dashboard);
        assert!(!handle(ReplCommand::Quit, &service, &mut router).await.unwrap());
    }
}

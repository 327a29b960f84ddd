//! Lead conversations for the CRM inbox and lead detail page.
//!
//! Leads carry only their latest message; the surrounding exchange with the
//! advisor is reconstructed from the lead record so that every lead has a
//! readable thread.

use crate::catalog::LeadRecord;
use crate::session::Message;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const ADVISOR_OPENING: &str = "Hello! I'm your VeroX AI advisor. How can I help you today?";

/// The short exchange shown on a lead's detail page.
///
/// Opening, the lead's last message, and the advisor's follow-up, placed
/// one hour, thirty minutes and fifteen minutes before the lead's timestamp.
pub fn lead_transcript(lead: &LeadRecord) -> Vec<Message> {
    vec![
        Message::assistant(ADVISOR_OPENING, lead.timestamp - Duration::minutes(60)),
        Message::user(lead.last_message.clone(), lead.timestamp - Duration::minutes(30)),
        Message::assistant(
            format!(
                "Great! I'd be happy to help you with {}. Let me pull up the information for you.",
                lead.franchise
            ),
            lead.timestamp - Duration::minutes(15),
        ),
    ]
}

/// The full inbox thread for a lead, ending with its last message.
pub fn inbox_thread(lead: &LeadRecord) -> Vec<Message> {
    vec![
        Message::assistant(ADVISOR_OPENING, lead.timestamp - Duration::minutes(120)),
        Message::user(
            format!("I'm interested in learning more about {}.", lead.franchise),
            lead.timestamp - Duration::minutes(90),
        ),
        Message::assistant(
            format!(
                "Great choice! {} is one of our top-performing franchises. Let me share some key details with you.",
                lead.franchise
            ),
            lead.timestamp - Duration::minutes(60),
        ),
        Message::user(lead.last_message.clone(), lead.timestamp),
    ]
}

/// Inbox search: case-insensitive match on the lead's name or last message.
///
/// An empty query keeps every conversation.
pub fn search_inbox<'a>(
    leads: impl IntoIterator<Item = &'a Arc<LeadRecord>>,
    query: &str,
) -> Vec<Arc<LeadRecord>> {
    let query = query.trim().to_lowercase();
    leads
        .into_iter()
        .filter(|lead| {
            query.is_empty()
                || lead.name.to_lowercase().contains(&query)
                || lead.last_message.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// A suggested follow-up step for a lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextAction {
    pub title: String,
    pub detail: String,
}

/// Follow-up steps shown on the lead detail page.
pub fn next_actions(lead: &LeadRecord) -> Vec<NextAction> {
    let action = |title: &str, detail: String| NextAction {
        title: title.to_string(),
        detail,
    };
    vec![
        action(
            "Schedule Discovery Call",
            "High intent score suggests they're ready for deeper conversation".to_string(),
        ),
        action(
            "Send Franchise Disclosure",
            format!("They've shown interest in {}", lead.franchise),
        ),
        action(
            "Set Follow-up Reminder",
            "Follow up within 24 hours to maintain engagement".to_string(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::session::MessageRole;

    fn roles(messages: &[Message]) -> Vec<MessageRole> {
        messages.iter().map(|m| m.role).collect()
    }

    #[test]
    fn test_lead_transcript_wraps_last_message() {
        let catalog = Catalog::reference();
        let lead = catalog.find_lead("1").unwrap();
        let transcript = lead_transcript(&lead);

        assert_eq!(
            roles(&transcript),
            vec![MessageRole::Assistant, MessageRole::User, MessageRole::Assistant]
        );
        assert_eq!(transcript[1].content, lead.last_message);
        assert!(transcript[2].content.contains(&lead.franchise));
        assert_eq!(transcript[0].created_at, lead.timestamp - Duration::hours(1));
        assert!(transcript.windows(2).all(|w| w[0].created_at < w[1].created_at));
        assert!(transcript.iter().all(|m| m.created_at < lead.timestamp));
    }

    #[test]
    fn test_inbox_thread_ends_at_lead_timestamp() {
        let catalog = Catalog::reference();
        let lead = catalog.find_lead("3").unwrap();
        let thread = inbox_thread(&lead);

        assert_eq!(thread.len(), 4);
        assert!(thread[1].content.contains(&lead.franchise));
        let last = thread.last().unwrap();
        assert!(last.is_user());
        assert_eq!(last.content, lead.last_message);
        assert_eq!(last.created_at, lead.timestamp);
        assert_eq!(thread[0].created_at, lead.timestamp - Duration::hours(2));
    }

    #[test]
    fn test_search_matches_name_or_last_message() {
        let catalog = Catalog::reference();

        let by_name = search_inbox(catalog.leads(), "sarah");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Sarah Johnson");

        let by_message = search_inbox(catalog.leads(), "FUNDING");
        assert_eq!(by_message.len(), 1);
        assert!(by_message[0].last_message.contains("funding"));

        assert_eq!(search_inbox(catalog.leads(), "  ").len(), catalog.leads().len());
        assert!(search_inbox(catalog.leads(), "zzz-no-match").is_empty());
    }

    #[test]
    fn test_search_ignores_franchise_and_email() {
        let catalog = Catalog::reference();
        let lead = &catalog.leads()[0];
        assert!(search_inbox(catalog.leads(), &lead.email).is_empty());
        assert!(search_inbox(catalog.leads(), &lead.franchise)
            .iter()
            .all(|l| l.last_message.contains(&lead.franchise) || l.name.contains(&lead.franchise)));
    }

    #[test]
    fn test_next_actions_name_the_franchise() {
        let catalog = Catalog::reference();
        let lead = catalog.find_lead("2").unwrap();
        let actions = next_actions(&lead);
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0].title, "Schedule Discovery Call");
        assert_eq!(
            actions[1].detail,
            format!("They've shown interest in {}", lead.franchise)
        );
    }
}

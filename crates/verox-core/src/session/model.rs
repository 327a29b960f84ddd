//! Conversation session domain model.
//!
//! A session is one user's exchange with the advisor: the ordered message
//! history, the current recommendation list and the composing indicator.

use super::app_mode::{PendingReply, SessionState};
use super::message::Message;
use crate::advisor::advise;
use crate::catalog::{CONVERSATION_STARTERS, Catalog, FranchiseRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Represents a conversation with the advisor.
///
/// State machine:
///
/// ```text
/// Idle --submit_user_message--> AwaitingReply --produce_assistant_reply--> Idle
/// ```
///
/// Several replies may be pending at once. Each resolves on its own and
/// replaces the recommendation list, so the last one produced wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSession {
    /// Unique session identifier (UUID format)
    id: String,
    /// Messages in display order
    messages: Vec<Message>,
    /// Recommendations derived from the most recently answered user message
    recommendations: Vec<Arc<FranchiseRecord>>,
    /// Replies scheduled but not yet produced
    pending_replies: usize,
    /// Number of assistant replies produced so far
    completed_turns: usize,
    /// When the session was opened
    created_at: DateTime<Utc>,
}

impl ConversationSession {
    /// Creates an empty session with a fresh id.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), now)
    }

    pub fn with_id(id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            messages: Vec::new(),
            recommendations: Vec::new(),
            pending_replies: 0,
            completed_turns: 0,
            created_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// The recommendation list shown next to the chat.
    ///
    /// Empty until the first reply, and empty again whenever the latest
    /// reply matched nothing.
    pub fn recommendations(&self) -> &[Arc<FranchiseRecord>] {
        &self.recommendations
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn completed_turns(&self) -> usize {
        self.completed_turns
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    /// True while any reply is pending.
    pub fn is_composing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn state(&self) -> SessionState {
        if self.is_composing() {
            SessionState::AwaitingReply
        } else {
            SessionState::Idle
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn first_user_message(&self) -> Option<&Message> {
        self.messages.iter().find(|m| m.is_user())
    }

    /// Quick replies to offer; only available before the user has said anything.
    pub fn suggestions(&self) -> &'static [&'static str] {
        if self.first_user_message().is_none() {
            &CONVERSATION_STARTERS
        } else {
            &[]
        }
    }

    /// Appends a user message and schedules the assistant reply.
    ///
    /// Whitespace-only text is ignored and returns `None`. Submitting while a
    /// reply is already pending is allowed; each submission gets its own
    /// pending reply.
    pub fn submit_user_message(&mut self, text: &str, now: DateTime<Utc>) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }

        let message = Message::user(text, now);
        let pending = PendingReply {
            session_id: self.id.clone(),
            trigger_message_id: message.id.clone(),
            trigger_text: message.content.clone(),
        };
        self.messages.push(message);
        self.pending_replies += 1;
        Some(pending)
    }

    /// Produces the assistant reply for a pending user message.
    ///
    /// Classifies the triggering text, replaces the recommendation list
    /// wholesale and appends the canned response.
    pub fn produce_assistant_reply(
        &mut self,
        pending: &PendingReply,
        catalog: &Catalog,
        now: DateTime<Utc>,
    ) -> &Message {
        debug_assert_eq!(pending.session_id, self.id);

        let reply = advise(&pending.trigger_text, catalog);
        self.recommendations = reply.recommendations;
        self.messages.push(Message::assistant(reply.text, now));
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.completed_turns += 1;

        // Just pushed
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::{Intent, classify, recommend};
    use crate::session::message::MessageRole;

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let session = ConversationSession::new(Utc::now());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.is_empty());
        assert!(session.recommendations().is_empty());
        assert_eq!(session.suggestions().len(), 4);
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let mut session = ConversationSession::new(Utc::now());
        assert!(session.submit_user_message("", Utc::now()).is_none());
        assert!(session.submit_user_message("   \n\t", Utc::now()).is_none());
        assert!(session.is_empty());
        assert!(!session.is_composing());
    }

    #[test]
    fn test_submit_enters_awaiting_reply() {
        let mut session = ConversationSession::new(Utc::now());
        let pending = session
            .submit_user_message("Show me food franchises", Utc::now())
            .unwrap();

        assert_eq!(session.state(), SessionState::AwaitingReply);
        assert!(session.is_composing());
        assert_eq!(pending.session_id, session.id());
        assert_eq!(pending.trigger_message_id, session.messages()[0].id);
        assert_eq!(session.messages()[0].role, MessageRole::User);
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_reply_round_trip() {
        let catalog = Catalog::reference();
        let mut session = ConversationSession::new(Utc::now());
        let text = "Show me food franchises";
        let pending = session.submit_user_message(text, Utc::now()).unwrap();

        let reply = session.produce_assistant_reply(&pending, &catalog, Utc::now());
        assert_eq!(reply.role, MessageRole::Assistant);
        assert_eq!(reply.content, Intent::FoodAndBeverage.canned_response());

        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.last_message().unwrap().role, MessageRole::Assistant);
        assert_eq!(session.recommendations(), recommend(classify(text), &catalog).as_slice());
        assert_eq!(session.completed_turns(), 1);
    }

    #[test]
    fn test_recommendations_replaced_not_merged() {
        let catalog = Catalog::reference();
        let mut session = ConversationSession::new(Utc::now());

        let food = session.submit_user_message("food", Utc::now()).unwrap();
        session.produce_assistant_reply(&food, &catalog, Utc::now());
        let health = session.submit_user_message("health", Utc::now()).unwrap();
        session.produce_assistant_reply(&health, &catalog, Utc::now());

        let names: Vec<&str> = session.recommendations().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["FitZone 24/7", "HealthFirst Clinics"]);
    }

    #[test]
    fn test_overlapping_replies_resolve_independently() {
        let catalog = Catalog::reference();
        let mut session = ConversationSession::new(Utc::now());

        let first = session.submit_user_message("food", Utc::now()).unwrap();
        let second = session.submit_user_message("passive income", Utc::now()).unwrap();
        assert_eq!(session.pending_replies(), 2);

        session.produce_assistant_reply(&first, &catalog, Utc::now());
        assert!(session.is_composing());
        session.produce_assistant_reply(&second, &catalog, Utc::now());
        assert!(!session.is_composing());

        // Last resolved wins.
        assert_eq!(
            session.recommendations(),
            recommend(Intent::BudgetConscious, &catalog).as_slice()
        );
        let roles: Vec<MessageRole> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::User,
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::Assistant
            ]
        );
    }

    #[test]
    fn test_empty_match_clears_recommendations() {
        let records: Vec<_> = Catalog::reference()
            .franchises()
            .iter()
            .filter(|f| f.name == "CleanPro Services")
            .map(|f| (**f).clone())
            .collect();
        let catalog = Catalog::from_franchises(records).unwrap();
        let mut session = ConversationSession::new(Utc::now());

        let general = session.submit_user_message("hello", Utc::now()).unwrap();
        session.produce_assistant_reply(&general, &catalog, Utc::now());
        assert_eq!(session.recommendations().len(), 1);

        let health = session
            .submit_user_message("I want a healthcare franchise", Utc::now())
            .unwrap();
        session.produce_assistant_reply(&health, &catalog, Utc::now());
        assert!(session.recommendations().is_empty());
    }
}

//! Conversation store.
//!
//! Keeps every session of the current process together with the sidebar
//! summaries, and tracks which session is active.

use super::app_mode::PendingReply;
use super::message::Message;
use super::model::ConversationSession;
use super::summary::{ConversationSummary, DEFAULT_TITLE_MAX_CHARS};
use crate::catalog::Catalog;
use crate::error::{Result, VeroxError};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Manages conversation sessions and their summaries.
///
/// `ConversationStore` is responsible for:
/// - Holding the active session, which always exists (possibly empty)
/// - Switching between sessions
/// - Creating and refreshing summaries as replies are produced
/// - Deleting sessions
///
/// A session only gets a summary once its first reply has been produced, so
/// conversations without a completed turn never show up in the sidebar.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    sessions: HashMap<String, ConversationSession>,
    summaries: HashMap<String, ConversationSummary>,
    active_id: String,
    title_max_chars: usize,
}

impl ConversationStore {
    /// Creates a store with a single empty active session.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_title_max_chars(DEFAULT_TITLE_MAX_CHARS, now)
    }

    pub fn with_title_max_chars(title_max_chars: usize, now: DateTime<Utc>) -> Self {
        let session = ConversationSession::new(now);
        let active_id = session.id().to_string();
        let mut sessions = HashMap::new();
        sessions.insert(active_id.clone(), session);
        Self {
            sessions,
            summaries: HashMap::new(),
            active_id,
            title_max_chars,
        }
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn active(&self) -> &ConversationSession {
        // The active id is always present in `sessions`.
        &self.sessions[&self.active_id]
    }

    pub fn session(&self, session_id: &str) -> Option<&ConversationSession> {
        self.sessions.get(session_id)
    }

    pub fn summary(&self, session_id: &str) -> Option<&ConversationSummary> {
        self.summaries.get(session_id)
    }

    /// Lists summaries, most recent activity first.
    pub fn list_summaries(&self) -> Vec<ConversationSummary> {
        let mut summaries: Vec<_> = self.summaries.values().cloned().collect();
        summaries.sort_by(|a, b| {
            b.last_activity
                .cmp(&a.last_activity)
                .then_with(|| a.id.cmp(&b.id))
        });
        summaries
    }

    /// Makes an existing session active.
    ///
    /// # Errors
    ///
    /// Returns `VeroxError::NotFound` if no session has the given id.
    pub fn select(&mut self, session_id: &str) -> Result<()> {
        if !self.sessions.contains_key(session_id) {
            return Err(VeroxError::not_found("Conversation", session_id));
        }
        self.discard_active_if_blank(session_id);
        self.active_id = session_id.to_string();
        Ok(())
    }

    /// Switches to a fresh, empty session and returns its id.
    ///
    /// No summary is recorded for it until its first reply.
    pub fn start_new(&mut self, now: DateTime<Utc>) -> &str {
        let session = ConversationSession::new(now);
        let id = session.id().to_string();
        self.discard_active_if_blank(&id);
        self.sessions.insert(id.clone(), session);
        self.active_id = id;
        &self.active_id
    }

    /// Deletes a session and its summary.
    ///
    /// Deleting the active session behaves like [`start_new`](Self::start_new).
    /// Returns `true` if anything was removed.
    pub fn delete(&mut self, session_id: &str, now: DateTime<Utc>) -> bool {
        let was_active = self.active_id == session_id;
        let removed_session = self.sessions.remove(session_id).is_some();
        let removed_summary = self.summaries.remove(session_id).is_some();
        if was_active {
            let session = ConversationSession::new(now);
            self.active_id = session.id().to_string();
            self.sessions.insert(self.active_id.clone(), session);
        }
        removed_session || removed_summary
    }

    /// Submits user text to the active session.
    pub fn submit(&mut self, text: &str, now: DateTime<Utc>) -> Option<PendingReply> {
        let active_id = self.active_id.clone();
        self.sessions
            .get_mut(&active_id)
            .and_then(|session| session.submit_user_message(text, now))
    }

    /// Produces the reply for a pending message and refreshes the summary.
    ///
    /// Returns `None` when the addressed session no longer exists; a late
    /// reply never brings a deleted conversation back.
    pub fn complete_reply(
        &mut self,
        pending: &PendingReply,
        catalog: &Catalog,
        now: DateTime<Utc>,
    ) -> Option<Message> {
        let session = self.sessions.get_mut(&pending.session_id)?;
        let reply = session
            .produce_assistant_reply(pending, catalog, now)
            .clone();

        match self.summaries.get_mut(&pending.session_id) {
            Some(summary) => summary.touch(pending.trigger_text.clone(), now),
            None => {
                let first = session
                    .first_user_message()
                    .map(|m| m.content.as_str())
                    .unwrap_or(pending.trigger_text.as_str());
                let summary = ConversationSummary::new(
                    pending.session_id.clone(),
                    first,
                    pending.trigger_text.clone(),
                    now,
                    self.title_max_chars,
                );
                self.summaries.insert(pending.session_id.clone(), summary);
            }
        }

        Some(reply)
    }

    /// Drops the current active session when leaving it with nothing in it.
    fn discard_active_if_blank(&mut self, next_id: &str) {
        if self.active_id == next_id {
            return;
        }
        if self.active().is_empty() {
            let id = self.active_id.clone();
            self.sessions.remove(&id);
        }
    }
}

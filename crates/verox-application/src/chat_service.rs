//! Chat use case implementation.
//!
//! This module provides the `ChatService` which drives the conversation
//! store on the tokio runtime: it accepts user messages, schedules the
//! simulated advisor reply and publishes state changes to subscribers.

use crate::event::ChatEvent;
use anyhow::Result;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock, broadcast};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use verox_core::catalog::{Catalog, CatalogRepository};
use verox_core::config::ChatConfig;
use verox_core::error::Result as CoreResult;
use verox_core::session::{ConversationSession, ConversationStore, ConversationSummary, PendingReply};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Use case for chatting with the advisor.
///
/// # Responsibilities
///
/// - Accepting user messages into the active session
/// - Producing each assistant reply after the configured delay, without
///   blocking the caller
/// - Cancelling pending replies when their conversation is deleted
/// - Selecting, starting and deleting conversations
/// - Publishing every state change as a [`ChatEvent`]
///
/// # Thread Safety
///
/// The service is cheap to clone; clones share the same store, catalog and
/// event channel. All mutation goes through the store's `RwLock`.
#[derive(Clone)]
pub struct ChatService {
    /// Sessions and summaries
    store: Arc<RwLock<ConversationStore>>,
    /// Read-only catalog shared by every session
    catalog: Arc<Catalog>,
    /// Simulated advisor latency
    reply_delay: Duration,
    /// Event fan-out to render layers
    events: broadcast::Sender<ChatEvent>,
    /// Cancellation handle per session with replies in flight
    reply_tokens: Arc<Mutex<HashMap<String, CancellationToken>>>,
}

impl ChatService {
    /// Creates a new `ChatService`.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The catalog recommendations are drawn from
    /// * `config` - Reply delay and summary title length
    pub fn new(catalog: Arc<Catalog>, config: &ChatConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store: Arc::new(RwLock::new(ConversationStore::with_title_max_chars(
                config.title_max_chars,
                Utc::now(),
            ))),
            catalog,
            reply_delay: config.reply_delay(),
            events,
            reply_tokens: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Loads the catalog from `repository` and builds the service around it.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub async fn from_repository(
        repository: &dyn CatalogRepository,
        config: &ChatConfig,
    ) -> Result<Self> {
        let catalog = repository.load().await?;
        tracing::info!(
            "[ChatService] Catalog loaded: {} franchises, {} leads",
            catalog.franchises().len(),
            catalog.roster().count()
        );
        Ok(Self::new(catalog, config))
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.events.subscribe()
    }

    /// Returns a copy of the active session.
    pub async fn snapshot(&self) -> ConversationSession {
        self.store.read().await.active().clone()
    }

    pub async fn active_session_id(&self) -> String {
        self.store.read().await.active_id().to_string()
    }

    /// Lists conversation summaries, newest first.
    pub async fn list_summaries(&self) -> Vec<ConversationSummary> {
        self.store.read().await.list_summaries()
    }

    /// Submits user text to the active session.
    ///
    /// Whitespace-only text is ignored and returns `None`. Otherwise the
    /// user message is appended immediately and the reply is produced by a
    /// background task after the configured delay. The returned handle
    /// resolves once that task has finished (or been cancelled).
    pub async fn submit(&self, text: &str) -> Option<JoinHandle<()>> {
        let (pending, message) = {
            let mut store = self.store.write().await;
            let pending = store.submit(text, Utc::now())?;
            let message = store.active().last_message().cloned()?;
            (pending, message)
        };

        tracing::debug!(
            "[ChatService] User message accepted: session_id={}, message_id={}",
            pending.session_id,
            message.id
        );
        self.publish(ChatEvent::UserMessageAppended {
            session_id: pending.session_id.clone(),
            message,
        });
        self.publish(ChatEvent::ComposingChanged {
            session_id: pending.session_id.clone(),
            composing: true,
        });

        let token = self.reply_token(&pending.session_id).await;
        let service = self.clone();
        Some(tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(
                        "[ChatService] Pending reply cancelled: session_id={}",
                        pending.session_id
                    );
                }
                _ = tokio::time::sleep(service.reply_delay) => {
                    service.deliver_reply(pending).await;
                }
            }
        }))
    }

    /// Makes an existing conversation active.
    ///
    /// # Errors
    ///
    /// Returns `VeroxError::NotFound` for unknown ids.
    pub async fn select(&self, session_id: &str) -> CoreResult<()> {
        self.store.write().await.select(session_id)?;
        tracing::debug!("[ChatService] Selected session: {}", session_id);
        self.publish(ChatEvent::ActiveSessionChanged {
            session_id: session_id.to_string(),
        });
        Ok(())
    }

    /// Switches to a new, empty conversation and returns its id.
    pub async fn start_new(&self) -> String {
        let session_id = self.store.write().await.start_new(Utc::now()).to_string();
        tracing::debug!("[ChatService] Started new session: {}", session_id);
        self.publish(ChatEvent::ActiveSessionChanged {
            session_id: session_id.clone(),
        });
        session_id
    }

    /// Deletes a conversation.
    ///
    /// Replies still pending for it are cancelled so they cannot bring the
    /// conversation back. Deleting the active conversation switches to a new
    /// empty one. Returns `true` if anything was removed.
    pub async fn delete(&self, session_id: &str) -> bool {
        if let Some(token) = self.reply_tokens.lock().await.remove(session_id) {
            token.cancel();
        }

        let (removed, active_changed, active_id) = {
            let mut store = self.store.write().await;
            let was_active = store.active_id() == session_id;
            let removed = store.delete(session_id, Utc::now());
            (removed, was_active, store.active_id().to_string())
        };

        if removed {
            tracing::info!("[ChatService] Deleted session: {}", session_id);
            self.publish(ChatEvent::ConversationDeleted {
                session_id: session_id.to_string(),
            });
        }
        if active_changed {
            self.publish(ChatEvent::ActiveSessionChanged {
                session_id: active_id,
            });
        }
        removed
    }

    async fn reply_token(&self, session_id: &str) -> CancellationToken {
        self.reply_tokens
            .lock()
            .await
            .entry(session_id.to_string())
            .or_default()
            .clone()
    }

    async fn deliver_reply(&self, pending: PendingReply) {
        let (message, recommendations, composing) = {
            let mut store = self.store.write().await;
            let Some(message) = store.complete_reply(&pending, &self.catalog, Utc::now()) else {
                tracing::debug!(
                    "[ChatService] Dropping reply for missing session: {}",
                    pending.session_id
                );
                return;
            };
            let Some(session) = store.session(&pending.session_id) else {
                return;
            };
            let composing = session.is_composing();
            if !composing {
                // Under the store lock so a concurrent submit gets a fresh token
                self.reply_tokens.lock().await.remove(&pending.session_id);
            }
            (message, session.recommendations().to_vec(), composing)
        };

        tracing::debug!(
            "[ChatService] Reply delivered: session_id={}, recommendations={}",
            pending.session_id,
            recommendations.len()
        );
        self.publish(ChatEvent::AssistantReplied {
            session_id: pending.session_id.clone(),
            message,
            recommendations,
        });
        if !composing {
            self.publish(ChatEvent::ComposingChanged {
                session_id: pending.session_id,
                composing: false,
            });
        }
    }

    fn publish(&self, event: ChatEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}

use serde::Serialize;
use std::sync::Arc;
use verox_core::catalog::FranchiseRecord;
use verox_core::session::Message;

/// State changes published by the chat service.
///
/// Render layers subscribe to these and redraw; they never poll.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// A user message was accepted.
    UserMessageAppended { session_id: String, message: Message },
    /// The composing indicator of a session turned on or off.
    ComposingChanged { session_id: String, composing: bool },
    /// The advisor answered; the recommendation list was replaced.
    AssistantReplied {
        session_id: String,
        message: Message,
        recommendations: Vec<Arc<FranchiseRecord>>,
    },
    /// A different session became active.
    ActiveSessionChanged { session_id: String },
    /// A conversation and its summary were removed.
    ConversationDeleted { session_id: String },
}

impl ChatEvent {
    pub fn session_id(&self) -> &str {
        match self {
            ChatEvent::UserMessageAppended { session_id, .. }
            | ChatEvent::ComposingChanged { session_id, .. }
            | ChatEvent::AssistantReplied { session_id, .. }
            | ChatEvent::ActiveSessionChanged { session_id }
            | ChatEvent::ConversationDeleted { session_id } => session_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_serializes_with_type_tag() {
        let event = ChatEvent::ComposingChanged {
            session_id: "s1".to_string(),
            composing: true,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "composing_changed");
        assert_eq!(value["session_id"], "s1");
        assert_eq!(value["composing"], true);
    }

    #[test]
    fn test_session_id_accessor() {
        let event = ChatEvent::UserMessageAppended {
            session_id: "s2".to_string(),
            message: Message::user("hi", Utc::now()),
        };
        assert_eq!(event.session_id(), "s2");
    }
}

//! Session state types.

use serde::{Deserialize, Serialize};

/// Represents whether a session is waiting on the advisor.
///
/// The only externally observable difference between the two states is the
/// composing indicator shown while a reply is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No reply is pending; the session accepts input.
    Idle,
    /// At least one user message is waiting for its assistant reply.
    AwaitingReply,
}

/// A reply that has been scheduled but not yet produced.
///
/// Returned when a user message is accepted and handed back when the
/// simulated delay elapses. The advisor answers the triggering text only,
/// never the full history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReply {
    /// Session the reply belongs to
    pub session_id: String,
    /// Id of the user message that triggered the reply
    pub trigger_message_id: String,
    /// Text of the triggering user message
    pub trigger_text: String,
}

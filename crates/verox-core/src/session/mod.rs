//! Session domain module.
//!
//! This module contains the conversation session state machine, message
//! types, sidebar summaries and the store that ties them together.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`MessageRole`, `Message`)
//! - `app_mode`: Session state types (`SessionState`, `PendingReply`)
//! - `model`: The session state machine (`ConversationSession`)
//! - `summary`: Sidebar projection (`ConversationSummary`)
//! - `store`: Session lifecycle management (`ConversationStore`)
//!
//! # Usage
//!
//! ```
//! use chrono::Utc;
//! use verox_core::catalog::Catalog;
//! use verox_core::session::{ConversationStore, MessageRole};
//!
//! let catalog = Catalog::reference();
//! let mut store = ConversationStore::new(Utc::now());
//! let pending = store.submit("Show me food franchises", Utc::now()).unwrap();
//! let reply = store.complete_reply(&pending, &catalog, Utc::now()).unwrap();
//! assert_eq!(reply.role, MessageRole::Assistant);
//! assert_eq!(store.active().recommendations().len(), 2);
//! ```

mod app_mode;
mod message;
mod model;
mod store;
mod summary;

// Re-export public API
pub use app_mode::{PendingReply, SessionState};
pub use message::{Message, MessageRole};
pub use model::ConversationSession;
pub use store::ConversationStore;
pub use summary::{ConversationSummary, DEFAULT_TITLE_MAX_CHARS, derive_title};

//! Conversation summaries for the history sidebar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of characters kept from the first user message.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 30;

const ELLIPSIS: &str = "...";

/// A list-displayable projection of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Id of the summarized session
    pub id: String,
    /// Derived from the first user message
    pub title: String,
    /// The user message that triggered the latest reply
    pub preview: String,
    /// Time of the latest reply
    pub last_activity: DateTime<Utc>,
}

impl ConversationSummary {
    pub fn new(
        id: impl Into<String>,
        first_user_message: &str,
        preview: impl Into<String>,
        now: DateTime<Utc>,
        title_max_chars: usize,
    ) -> Self {
        Self {
            id: id.into(),
            title: derive_title(first_user_message, title_max_chars),
            preview: preview.into(),
            last_activity: now,
        }
    }

    /// Records a later turn: replaces preview and timestamp, keeps the title.
    pub fn touch(&mut self, preview: impl Into<String>, now: DateTime<Utc>) {
        self.preview = preview.into();
        self.last_activity = now;
    }
}

/// Builds a sidebar title from the first user message.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn derive_title(first_user_message: &str, max_chars: usize) -> String {
    let trimmed = first_user_message.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let mut title: String = trimmed.chars().take(max_chars).collect();
    title.push_str(ELLIPSIS);
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_kept() {
        assert_eq!(derive_title("  Food ideas  ", 30), "Food ideas");
    }

    #[test]
    fn test_long_title_truncated_with_ellipsis() {
        let title = derive_title("I have $100k to invest. Show me food franchises", 30);
        assert_eq!(title, "I have $100k to invest. Show m...");
        assert_eq!(title.chars().count(), 33);
    }

    #[test]
    fn test_exact_length_not_truncated() {
        let text = "a".repeat(30);
        assert_eq!(derive_title(&text, 30), text);
    }

    #[test]
    fn test_multibyte_truncation() {
        let text = "☕".repeat(40);
        let title = derive_title(&text, 30);
        assert_eq!(title, format!("{}...", "☕".repeat(30)));
    }

    #[test]
    fn test_touch_keeps_title() {
        let t0 = Utc::now();
        let mut summary = ConversationSummary::new("s1", "food", "food", t0, 30);
        let t1 = t0 + chrono::Duration::seconds(5);
        summary.touch("health", t1);
        assert_eq!(summary.title, "food");
        assert_eq!(summary.preview, "health");
        assert_eq!(summary.last_activity, t1);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single utterance in a discussion.
///
/// Immutable once created; ordering is creation order. Within one discussion
/// timestamps are monotonically non-decreasing because turns run strictly
/// sequentially.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub agent_name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub topic: String,
}

impl Message {
    /// Create a message stamped with the current time.
    pub fn new(
        agent_name: impl Into<String>,
        content: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            content: content.into(),
            timestamp: Utc::now(),
            topic: topic.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_new_stamps_current_time() {
        let before = Utc::now();
        let message = Message::new("Dr. Test", "An observation", "A topic");
        let after = Utc::now();

        assert_eq!(message.agent_name, "Dr. Test");
        assert_eq!(message.content, "An observation");
        assert_eq!(message.topic, "A topic");
        assert!(message.timestamp >= before && message.timestamp <= after);
    }

    #[test]
    fn test_sequential_messages_are_non_decreasing() {
        let first = Message::new("A", "one", "t");
        let second = Message::new("A", "two", "t");
        assert!(second.timestamp >= first.timestamp);
    }
}

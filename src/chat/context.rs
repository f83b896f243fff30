//! Per-session conversation context
//!
//! Holds the little state the dispatcher needs between turns: who the user is,
//! the last follow-up prompt shown, and a topic awaiting a yes/no confirmation.

use serde::{Deserialize, Deserializer, Serialize};

/// Topic armed by a clarifying question, resolved by an affirmative reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum PendingTopic {
    HowToPlay,
    Deposit,
    Tournament,
    /// Any tag without a detailed answer. Falls through to general matching.
    Unknown(String),
}

impl PendingTopic {
    pub fn tag(&self) -> &str {
        match self {
            Self::HowToPlay => "how-to-play",
            Self::Deposit => "deposit",
            Self::Tournament => "tournament",
            Self::Unknown(tag) => tag,
        }
    }

    /// The empty tag means nothing is pending
    pub fn from_tag(tag: &str) -> Option<Self> {
        let topic = match tag {
            "" => return None,
            "how-to-play" => Self::HowToPlay,
            "deposit" => Self::Deposit,
            "tournament" => Self::Tournament,
            other => Self::Unknown(other.to_string()),
        };
        Some(topic)
    }
}

impl From<PendingTopic> for String {
    fn from(topic: PendingTopic) -> Self {
        topic.tag().to_string()
    }
}

/// Snapshot of a session's conversation state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    pub last_question: String,
    pub user_name: String,
    #[serde(default, deserialize_with = "pending_from_tag")]
    pub pending_topic: Option<PendingTopic>,
}

fn pending_from_tag<'de, D>(deserializer: D) -> Result<Option<PendingTopic>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = Option::<String>::deserialize(deserializer)?;
    Ok(tag.as_deref().and_then(PendingTopic::from_tag))
}

/// Partial update, merged shallowly into a [`ConversationContext`]
///
/// Fields left as `None` are untouched. `pending_topic: Some(None)` clears the
/// latch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextUpdate {
    pub last_question: Option<String>,
    pub user_name: Option<String>,
    pub pending_topic: Option<Option<PendingTopic>>,
}

impl ContextUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_question(mut self, question: impl Into<String>) -> Self {
        self.last_question = Some(question.into());
        self
    }

    #[must_use]
    pub fn user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn pending_topic(mut self, topic: PendingTopic) -> Self {
        self.pending_topic = Some(Some(topic));
        self
    }

    #[must_use]
    pub fn clear_pending_topic(mut self) -> Self {
        self.pending_topic = Some(None);
        self
    }
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `partial` into the current state. No validation.
    pub fn update(&mut self, partial: ContextUpdate) {
        if let Some(question) = partial.last_question {
            self.last_question = question;
        }
        if let Some(name) = partial.user_name {
            self.user_name = name;
        }
        if let Some(topic) = partial.pending_topic {
            self.pending_topic = topic;
        }
    }

    pub fn snapshot(&self) -> ConversationContext {
        self.clone()
    }

    /// Seed the user name at session start
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.update(ContextUpdate::new().user_name(name));
    }

    /// The user's name, or `None` when unset or empty
    pub fn user_name(&self) -> Option<&str> {
        Some(self.user_name.as_str()).filter(|name| !name.is_empty())
    }

    pub fn pending_topic(&self) -> Option<&PendingTopic> {
        self.pending_topic.as_ref()
    }
}

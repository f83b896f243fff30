//! Conversation turns and their outbound links

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Bot,
    User,
}

/// A single turn in the conversation log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Time-ordered, unique per message
    pub id: Uuid,
    #[serde(rename = "type")]
    pub sender: Sender,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    fn new(sender: Sender, text: impl Into<String>, links: Vec<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender,
            text: text.into(),
            links,
            created_at: Utc::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text, Vec::new())
    }

    pub fn bot_with_links<I, S>(text: impl Into<String>, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Sender::Bot, text, links.into_iter().map(Into::into).collect())
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text, Vec::new())
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

/// What an outbound link points at, for rendering a button label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Video,
    #[serde(rename = "whatsapp")]
    WhatsApp,
    AppDownload,
    Website,
    Other,
}

impl LinkKind {
    /// Classify by host fragment. Checked in this order, first hit wins.
    pub fn classify(url: &str) -> Self {
        if url.contains("youtu.be") || url.contains("youtube.com") {
            Self::Video
        } else if url.contains("wa.me") {
            Self::WhatsApp
        } else if url.contains("ludotop1.fun") {
            Self::AppDownload
        } else if url.contains("ludotop1.github.io") {
            Self::Website
        } else {
            Self::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "🎬 ভিডিও টিউটোরিয়াল দেখুন",
            Self::WhatsApp => "💬 এডমিনের সাথে যোগাযোগ করুন",
            Self::AppDownload => "📱 অ্যাপ ডাউনলোড করুন",
            Self::Website => "🌐 ওয়েবসাইট দেখুন",
            Self::Other => "এখানে ক্লিক করুন",
        }
    }
}

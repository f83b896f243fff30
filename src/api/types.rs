//! API request and response types

use crate::chat::{LinkKind, Message, QuickOption, Sender};
use crate::scheduler::{Phase, SessionSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create or restart a session
#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub name: String,
}

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Response with a session id and its current view
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub session: SessionView,
}

/// Session as the chat window renders it
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub phase: Phase,
    pub user_name: Option<String>,
    pub typing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_topic: Option<String>,
    pub messages: Vec<MessageView>,
}

impl From<SessionSnapshot> for SessionView {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            phase: snapshot.phase,
            user_name: snapshot.user_name,
            typing: snapshot.typing,
            pending_topic: snapshot.pending_topic,
            messages: snapshot.messages.into_iter().map(MessageView::from).collect(),
        }
    }
}

/// A chat turn with its links classified and labelled
#[derive(Debug, Serialize)]
pub struct MessageView {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub sender: Sender,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkView>,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageView {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            sender: message.sender,
            text: message.text,
            links: message.links.into_iter().map(LinkView::from).collect(),
            created_at: message.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LinkView {
    pub url: String,
    pub kind: LinkKind,
    pub label: &'static str,
}

impl From<String> for LinkView {
    fn from(url: String) -> Self {
        let kind = LinkKind::classify(&url);
        Self {
            url,
            kind,
            label: kind.label(),
        }
    }
}

/// Response with the quick option catalog
#[derive(Debug, Serialize)]
pub struct QuickOptionsResponse {
    pub options: &'static [QuickOption],
}

/// Response for queued user input
#[derive(Debug, Serialize)]
pub struct QueuedResponse {
    pub queued: bool,
}

/// Response for lifecycle actions
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::catalog::{ADMIN_WHATSAPP_URL, VIDEO_TUTORIAL_URL};
    use serde_json::json;

    #[test]
    fn test_message_view_labels_links() {
        let message = Message::bot_with_links("hi", [VIDEO_TUTORIAL_URL, ADMIN_WHATSAPP_URL]);
        let value = serde_json::to_value(MessageView::from(message)).unwrap();

        assert_eq!(value["type"], "bot");
        assert_eq!(value["links"][0]["kind"], json!(LinkKind::Video));
        assert_eq!(value["links"][0]["label"], LinkKind::Video.label());
        assert_eq!(value["links"][1]["url"], ADMIN_WHATSAPP_URL);
        assert_eq!(value["links"][1]["label"], LinkKind::WhatsApp.label());
    }

    #[test]
    fn test_plain_message_omits_links() {
        let value = serde_json::to_value(MessageView::from(Message::user("hello"))).unwrap();
        assert_eq!(value["type"], "user");
        assert!(value.get("links").is_none());
    }
}

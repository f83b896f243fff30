//! Per-session state owned by the scheduler

use crate::chat::{ConversationContext, Message, PendingTopic};
use serde::Serialize;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the user to enter a name
    #[default]
    AwaitingName,
    /// Chatting
    Active,
}

/// Conversation log, context, typing counter and timer generation
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub(super) context: ConversationContext,
    pub(super) log: Vec<Message>,
    pub(super) phase: Phase,
    /// Typing cycles in flight; the indicator is on while this is non-zero
    pub(super) typing: u32,
    /// Bumped on reset so timers from the previous conversation are ignored
    pub(super) generation: u64,
}

/// Read-only view handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub user_name: Option<String>,
    pub typing: bool,
    pub pending_topic: Option<String>,
    pub messages: Vec<Message>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn log(&self) -> &[Message] {
        &self.log
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_typing(&self) -> bool {
        self.typing > 0
    }

    pub(super) fn append(&mut self, message: Message) -> Message {
        self.log.push(message.clone());
        message
    }

    /// Back to the name prompt with nothing carried over but the generation
    pub(super) fn clear(&mut self) {
        *self = Self {
            generation: self.generation.wrapping_add(1),
            ..Self::default()
        };
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            user_name: self.context.user_name().map(str::to_owned),
            typing: self.is_typing(),
            pending_topic: self.context.pending_topic().map(PendingTopic::tag).map(str::to_owned),
            messages: self.log.clone(),
        }
    }
}

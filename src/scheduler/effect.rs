//! Effects produced by scheduler transitions

use super::event::Step;
use crate::chat::Message;
use serde::Serialize;
use std::time::Duration;

/// Work for the runtime to carry out after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Broadcast to subscribers of the session
    Notify(SessionEvent),

    /// Fire `step` after `delay`, stamped with the session generation
    Schedule {
        delay: Duration,
        generation: u64,
        step: Step,
    },

    /// Drop every timer scheduled so far
    CancelPending,
}

/// Observable change to a session, streamed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    Message { message: Message },
    Typing { active: bool },
    Reset,
}

impl Effect {
    pub fn message(message: Message) -> Self {
        Effect::Notify(SessionEvent::Message { message })
    }

    pub fn typing(active: bool) -> Self {
        Effect::Notify(SessionEvent::Typing { active })
    }

    pub fn schedule(delay: Duration, generation: u64, step: Step) -> Self {
        Effect::Schedule {
            delay,
            generation,
            step,
        }
    }
}

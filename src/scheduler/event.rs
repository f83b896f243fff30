//! Events that drive a session's turn scheduler

/// Inputs to [`TurnScheduler::handle`](super::TurnScheduler::handle)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // User events
    Start { name: String },
    UserText { text: String },
    QuickOption { option_id: String },
    Reset,

    // Timer events
    StepDue { generation: u64, step: Step },
}

/// A delayed piece of a bot turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Show the typing indicator, then deliver after a random delay
    BeginTyping(BotTurn),
    /// Hide the indicator and append the bot message
    Deliver(BotTurn),
}

/// What the bot will say once typing finishes.
/// Replies are computed at delivery time, not when the turn is queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotTurn {
    Welcome,
    Reply { text: String },
    QuickReply { option_id: String },
    FollowUp,
}

impl BotTurn {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Reply { .. } => "reply",
            Self::QuickReply { .. } => "quick_reply",
            Self::FollowUp => "follow_up",
        }
    }
}

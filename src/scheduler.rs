//! Turn scheduling
//!
//! Sequences the greeting, welcome, replies and follow-ups of one session,
//! with simulated typing delays between them. Transitions are synchronous;
//! the runtime owns the timers and feeds due steps back in.

mod effect;
mod event;
mod pacing;
mod session;
mod transition;

#[cfg(test)]
mod proptests;

pub use effect::{Effect, SessionEvent};
pub use event::{BotTurn, Event, Step};
pub use pacing::{Pacing, PacingConfig};
pub use session::{Phase, Session, SessionSnapshot};
pub use transition::{SchedulerError, TransitionResult, TurnScheduler};

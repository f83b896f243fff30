//! Turn scheduler transitions
//!
//! Applies one [`Event`] to a [`Session`] and returns the effects the runtime
//! must carry out. Timers are never awaited here; they come back later as
//! [`Event::StepDue`] stamped with the generation they were scheduled under.

use super::effect::{Effect, SessionEvent};
use super::event::{BotTurn, Event, Step};
use super::pacing::Pacing;
use super::session::{Phase, Session};
use crate::chat::{quick_option, Message, ResponseDispatcher};
use thiserror::Error;

/// Effects emitted by one transition, in order
#[derive(Debug, Default)]
pub struct TransitionResult {
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Inputs the scheduler refuses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Session already started")]
    AlreadyStarted,
    #[error("Session has not started, enter a name first")]
    NotStarted,
    #[error("Message must not be empty")]
    EmptyMessage,
    #[error("Unknown quick option: {0}")]
    UnknownQuickOption(String),
}

/// Sequences bot turns for one session
#[derive(Debug)]
pub struct TurnScheduler {
    dispatcher: ResponseDispatcher,
    pacing: Pacing,
}

impl TurnScheduler {
    pub fn new(dispatcher: ResponseDispatcher, pacing: Pacing) -> Self {
        Self { dispatcher, pacing }
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    pub fn handle(&mut self, session: &mut Session, event: Event) -> Result<TransitionResult, SchedulerError> {
        match event {
            Event::Start { name } => self.start(session, &name),
            Event::UserText { text } => {
                ensure_active(session)?;
                if text.trim().is_empty() {
                    return Err(SchedulerError::EmptyMessage);
                }
                let echo = session.append(Message::user(text.clone()));
                Ok(TransitionResult::new()
                    .with_effect(Effect::message(echo))
                    .with_effects(self.begin_typing(session, BotTurn::Reply { text })))
            }
            Event::QuickOption { option_id } => {
                ensure_active(session)?;
                let option = quick_option(&option_id).ok_or_else(|| SchedulerError::UnknownQuickOption(option_id.clone()))?;
                let echo = session.append(Message::user(option.display_text));
                Ok(TransitionResult::new()
                    .with_effect(Effect::message(echo))
                    .with_effects(self.begin_typing(session, BotTurn::QuickReply { option_id })))
            }
            Event::StepDue { generation, step } => {
                if generation != session.generation {
                    tracing::debug!(generation, current = session.generation, "Dropping stale step");
                    return Ok(TransitionResult::new());
                }
                let effects = match step {
                    Step::BeginTyping(turn) => self.begin_typing(session, turn),
                    Step::Deliver(turn) => self.deliver(session, turn),
                };
                Ok(TransitionResult::new().with_effects(effects))
            }
            Event::Reset => {
                session.clear();
                tracing::info!(generation = session.generation, "Session reset");
                Ok(TransitionResult::new()
                    .with_effect(Effect::CancelPending)
                    .with_effect(Effect::Notify(SessionEvent::Reset)))
            }
        }
    }

    fn start(&mut self, session: &mut Session, name: &str) -> Result<TransitionResult, SchedulerError> {
        if session.phase == Phase::Active {
            return Err(SchedulerError::AlreadyStarted);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(SchedulerError::EmptyName);
        }

        session.phase = Phase::Active;
        session.context.set_name(name);
        tracing::info!(user = name, "Session started");

        let greeting = session.append(self.dispatcher.greeting());
        Ok(TransitionResult::new()
            .with_effect(Effect::message(greeting))
            .with_effect(Effect::schedule(
                self.pacing.greeting_delay(),
                session.generation,
                Step::BeginTyping(BotTurn::Welcome),
            )))
    }

    fn begin_typing(&mut self, session: &mut Session, turn: BotTurn) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(2);
        session.typing += 1;
        if session.typing == 1 {
            effects.push(Effect::typing(true));
        }
        let delay = self.pacing.typing_delay();
        tracing::debug!(turn = turn.kind(), ?delay, "Bot typing");
        effects.push(Effect::schedule(delay, session.generation, Step::Deliver(turn)));
        effects
    }

    fn deliver(&mut self, session: &mut Session, turn: BotTurn) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(3);
        session.typing = session.typing.saturating_sub(1);
        if session.typing == 0 {
            effects.push(Effect::typing(false));
        }

        let follow_up = match &turn {
            BotTurn::Welcome => true,
            BotTurn::Reply { .. } | BotTurn::QuickReply { .. } => self.pacing.roll_follow_up(),
            BotTurn::FollowUp => false,
        };

        let message = match turn {
            BotTurn::Welcome => {
                let name = session.context.user_name.clone();
                self.dispatcher.welcome(&mut session.context, &name)
            }
            BotTurn::Reply { text } => self.dispatcher.generate_response(&mut session.context, &text),
            BotTurn::QuickReply { option_id } => self.dispatcher.handle_quick_response(&session.context, &option_id),
            BotTurn::FollowUp => self.dispatcher.suggest_follow_up(&mut session.context, self.pacing.rng()),
        };
        effects.push(Effect::message(session.append(message)));

        if follow_up {
            effects.push(Effect::schedule(
                self.pacing.follow_up_delay(),
                session.generation,
                Step::BeginTyping(BotTurn::FollowUp),
            ));
        }
        effects
    }
}

fn ensure_active(session: &Session) -> Result<(), SchedulerError> {
    match session.phase {
        Phase::Active => Ok(()),
        Phase::AwaitingName => Err(SchedulerError::NotStarted),
    }
}

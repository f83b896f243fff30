//! Response dispatcher
//!
//! Turns user text or a quick option id into exactly one bot [`Message`],
//! reading and updating the session's [`ConversationContext`] on the way.

use super::catalog::{QuickOption, FOLLOW_UP_QUESTIONS, QUICK_OPTIONS};
use super::context::{ContextUpdate, ConversationContext};
use super::keywords::fold;
use super::message::Message;
use super::replies::{self, Salutation};
use super::rules::{classify, Decision, TopicRule, TOPIC_RULES};
use rand::seq::SliceRandom;
use rand::Rng;

/// Rule engine over static tables; all session state lives in the context
#[derive(Debug, Clone, Copy)]
pub struct ResponseDispatcher {
    rules: &'static [TopicRule],
    quick_options: &'static [QuickOption],
    follow_ups: &'static [&'static str],
}

impl Default for ResponseDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseDispatcher {
    pub fn new() -> Self {
        Self {
            rules: &TOPIC_RULES,
            quick_options: &QUICK_OPTIONS,
            follow_ups: &FOLLOW_UP_QUESTIONS,
        }
    }

    /// Reply to free text. Total over all inputs, including the empty string.
    pub fn generate_response(&self, context: &mut ConversationContext, user_text: &str) -> Message {
        let folded = fold(user_text);
        let decision = classify(self.rules, &folded, context.pending_topic());
        self.respond(context, &folded, decision)
    }

    fn respond(&self, context: &mut ConversationContext, folded: &str, decision: Decision) -> Message {
        match decision {
            Decision::ThankYou => replies::thank_you(&Salutation::of(context)),
            Decision::Confirm(topic) => {
                context.update(ContextUpdate::new().clear_pending_topic());
                if let Some(message) = replies::confirmed_detail(&topic, &Salutation::of(context)) {
                    tracing::debug!(topic = topic.tag(), "Pending topic confirmed");
                    return message;
                }
                tracing::debug!(topic = topic.tag(), "No detail for pending topic, matching again");
                let decision = classify(self.rules, folded, None);
                self.respond(context, folded, decision)
            }
            Decision::Topic(rule) => {
                tracing::debug!(rule = rule.keywords.name, "Topic rule matched");
                if let Some(pending) = &rule.arms {
                    context.update(ContextUpdate::new().pending_topic(pending.clone()));
                }
                replies::topic_reply(rule.topic, &Salutation::of(context))
            }
            Decision::OutOfScope => replies::scope_refusal(&Salutation::of(context)),
            Decision::Fallback => replies::fallback(&Salutation::of(context)),
        }
    }

    /// Detailed answer for a quick option, skipping the confirmation step.
    /// Ids outside the catalog get the "didn't understand" reply.
    pub fn handle_quick_response(&self, context: &ConversationContext, option_id: &str) -> Message {
        let known = self.quick_options.iter().any(|option| option.id == option_id);
        if !known {
            tracing::debug!(option_id, "Unknown quick option");
        }
        replies::quick_answer(option_id, &Salutation::of(context))
    }

    /// Pick a follow-up prompt, avoiding the one shown last.
    ///
    /// Prompts containing the previous question (case-insensitively) are
    /// skipped; if that leaves nothing, the whole pool is used.
    pub fn suggest_follow_up<R>(&self, context: &mut ConversationContext, rng: &mut R) -> Message
    where
        R: Rng + ?Sized,
    {
        let last = fold(&context.last_question);
        let filtered: Vec<&str> = self
            .follow_ups
            .iter()
            .copied()
            .filter(|question| last.is_empty() || !fold(question).contains(&last))
            .collect();

        let pool: &[&str] = if filtered.is_empty() {
            tracing::debug!("Follow-up filter excluded every prompt, using full pool");
            self.follow_ups
        } else {
            &filtered
        };

        let question = pool.choose(rng).copied().unwrap_or_default();
        context.update(ContextUpdate::new().last_question(question));
        Message::bot(question)
    }

    /// Opening line shown before the user has said anything
    #[allow(clippy::unused_self)]
    pub fn greeting(&self) -> Message {
        replies::greeting()
    }

    /// Personalized welcome; also records the name in the context
    #[allow(clippy::unused_self)]
    pub fn welcome(&self, context: &mut ConversationContext, name: &str) -> Message {
        context.set_name(name);
        replies::welcome(name)
    }
}

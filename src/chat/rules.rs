//! Ordered matching rules
//!
//! Classification is pure: it only looks at the folded input and the pending
//! topic. Rendering and context updates happen in the dispatcher.

use super::context::PendingTopic;
use super::keywords::{self, KeywordSet};
use serde::Serialize;

/// FAQ topics recognised from free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Greeting,
    HowToPlay,
    Deposit,
    Withdraw,
    Download,
    AdminContact,
    WebsiteInfo,
    Tournament,
    WhyBest,
}

/// One entry of the topic table
#[derive(Debug, Clone)]
pub struct TopicRule {
    pub topic: Topic,
    pub keywords: KeywordSet,
    /// Set when the rule asks a clarifying question instead of answering
    pub arms: Option<PendingTopic>,
}

impl TopicRule {
    const fn answers(topic: Topic, keywords: KeywordSet) -> Self {
        Self {
            topic,
            keywords,
            arms: None,
        }
    }

    const fn clarifies(topic: Topic, keywords: KeywordSet, pending: PendingTopic) -> Self {
        Self {
            topic,
            keywords,
            arms: Some(pending),
        }
    }
}

/// Topic rules in priority order; the first match wins
pub static TOPIC_RULES: [TopicRule; 9] = [
    TopicRule::answers(Topic::Greeting, keywords::GREETING),
    TopicRule::clarifies(Topic::HowToPlay, keywords::HOW_TO_PLAY, PendingTopic::HowToPlay),
    TopicRule::clarifies(Topic::Deposit, keywords::DEPOSIT, PendingTopic::Deposit),
    TopicRule::answers(Topic::Withdraw, keywords::WITHDRAW),
    TopicRule::answers(Topic::Download, keywords::DOWNLOAD),
    TopicRule::answers(Topic::AdminContact, keywords::ADMIN_CONTACT),
    TopicRule::answers(Topic::WebsiteInfo, keywords::WEBSITE_INFO),
    TopicRule::clarifies(Topic::Tournament, keywords::TOURNAMENT, PendingTopic::Tournament),
    TopicRule::answers(Topic::WhyBest, keywords::WHY_BEST),
];

/// Outcome of classifying one user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    ThankYou,
    /// Affirmative reply while a topic was pending
    Confirm(PendingTopic),
    Topic(&'static TopicRule),
    OutOfScope,
    Fallback,
}

impl PartialEq for TopicRule {
    fn eq(&self, other: &Self) -> bool {
        self.topic == other.topic
    }
}

impl Eq for TopicRule {}

/// Classify folded input against the rule chain
pub fn classify(
    rules: &'static [TopicRule],
    folded: &str,
    pending: Option<&PendingTopic>,
) -> Decision {
    if keywords::THANK_YOU.matches(folded) {
        return Decision::ThankYou;
    }

    if let Some(topic) = pending {
        if keywords::AFFIRMATIVE.matches(folded) {
            return Decision::Confirm(topic.clone());
        }
    }

    if let Some(rule) = rules.iter().find(|rule| rule.keywords.matches(folded)) {
        return Decision::Topic(rule);
    }

    if is_out_of_scope(folded) {
        Decision::OutOfScope
    } else {
        Decision::Fallback
    }
}

/// Off-topic brand mentioned, or nothing about ludo at all
pub fn is_out_of_scope(folded: &str) -> bool {
    keywords::OFF_TOPIC.matches(folded) || !keywords::ON_TOPIC.matches(folded)
}

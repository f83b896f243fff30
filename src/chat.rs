//! Response-generation core
//!
//! Keyword rules, canned replies and the per-session context they read.

pub mod catalog;
mod context;
mod dispatcher;
pub mod keywords;
mod message;
pub mod replies;
pub mod rules;

#[cfg(test)]
mod proptests;

pub use catalog::{quick_option, QuickOption, QUICK_OPTIONS};
pub use context::{ContextUpdate, ConversationContext, PendingTopic};
pub use dispatcher::ResponseDispatcher;
pub use message::{LinkKind, Message, Sender};

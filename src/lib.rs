//! Ludo Top 1 customer-support chat assistant
//!
//! A rule-based Bengali chatbot: keyword rules pick canned replies, a
//! per-session scheduler paces them with simulated typing, and an HTTP API
//! streams the conversation to a chat window.

pub mod api;
pub mod chat;
pub mod config;
pub mod runtime;
pub mod scheduler;

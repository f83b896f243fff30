//! HTTP API for the chat assistant

mod handlers;
mod sse;
mod types;

pub use handlers::{create_router, AppError};
pub use types::*;

use crate::runtime::SessionManager;
use crate::scheduler::PacingConfig;
use std::sync::Arc;
use std::time::Duration;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    pub fn new(pacing: PacingConfig, session_idle: Duration) -> Self {
        Self {
            sessions: Arc::new(SessionManager::new(pacing).with_idle_timeout(session_idle)),
        }
    }
}

//! Runtime for live chat sessions
//!
//! Each session runs on its own task. Callers talk to it through a
//! [`SessionHandle`]; observers get a snapshot plus a broadcast stream.

mod executor;

pub use executor::SessionRuntime;

use crate::chat::ResponseDispatcher;
use crate::scheduler::{Event, Pacing, PacingConfig, SchedulerError, SessionEvent, SessionSnapshot, TurnScheduler};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{broadcast, mpsc, oneshot, RwLock};
use uuid::Uuid;

/// Requests a [`SessionRuntime`] accepts
#[derive(Debug)]
pub enum Command {
    Apply {
        event: Event,
        reply: oneshot::Sender<Result<(), SchedulerError>>,
    },
    Snapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    /// Snapshot and receiver taken together so no event falls between them
    Subscribe {
        reply: oneshot::Sender<(SessionSnapshot, broadcast::Receiver<SessionEvent>)>,
    },
    Shutdown,
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),
    #[error("Session {0} is no longer running")]
    SessionClosed(Uuid),
    #[error(transparent)]
    Rejected(#[from] SchedulerError),
}

/// Handle to interact with a running session
#[derive(Debug, Clone)]
pub struct SessionHandle {
    id: Uuid,
    command_tx: mpsc::Sender<Command>,
}

impl SessionHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub async fn apply(&self, event: Event) -> Result<(), RuntimeError> {
        let outcome = self.request(|reply| Command::Apply { event, reply }).await?;
        Ok(outcome?)
    }

    pub async fn start(&self, name: impl Into<String>) -> Result<(), RuntimeError> {
        self.apply(Event::Start { name: name.into() }).await
    }

    pub async fn send_text(&self, text: impl Into<String>) -> Result<(), RuntimeError> {
        self.apply(Event::UserText { text: text.into() }).await
    }

    pub async fn choose_option(&self, option_id: impl Into<String>) -> Result<(), RuntimeError> {
        self.apply(Event::QuickOption {
            option_id: option_id.into(),
        })
        .await
    }

    pub async fn reset(&self) -> Result<(), RuntimeError> {
        self.apply(Event::Reset).await
    }

    pub async fn snapshot(&self) -> Result<SessionSnapshot, RuntimeError> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    pub async fn subscribe(&self) -> Result<(SessionSnapshot, broadcast::Receiver<SessionEvent>), RuntimeError> {
        self.request(|reply| Command::Subscribe { reply }).await
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T, RuntimeError> {
        let (reply, rx) = oneshot::channel();
        self.command_tx
            .send(command(reply))
            .await
            .map_err(|_| RuntimeError::SessionClosed(self.id))?;
        rx.await.map_err(|_| RuntimeError::SessionClosed(self.id))
    }
}

/// How long a session with no commands and no stream subscribers lives
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Manager for all session runtimes
#[derive(Debug)]
pub struct SessionManager {
    pacing: PacingConfig,
    idle_timeout: Duration,
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
}

impl SessionManager {
    pub fn new(pacing: PacingConfig) -> Self {
        Self {
            pacing,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    #[must_use]
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Spawn a fresh session in the awaiting-name phase
    pub async fn create(&self) -> SessionHandle {
        self.create_with(Pacing::new(self.pacing.clone())).await
    }

    pub async fn create_with(&self, pacing: Pacing) -> SessionHandle {
        let id = Uuid::new_v4();
        let (command_tx, command_rx) = mpsc::channel(32);
        let (broadcast_tx, _) = broadcast::channel(128);

        let scheduler = TurnScheduler::new(ResponseDispatcher::new(), pacing);
        let runtime = SessionRuntime::new(id, scheduler, command_rx, broadcast_tx, self.idle_timeout);
        let handle = SessionHandle { id, command_tx };

        self.sessions.write().await.insert(id, handle.clone());
        let sessions = Arc::clone(&self.sessions);
        tokio::spawn(async move {
            runtime.run().await;
            // Gone already if removed explicitly
            sessions.write().await.remove(&id);
        });

        tracing::info!(session_id = %id, "Created session");
        handle
    }

    pub async fn get(&self, id: Uuid) -> Result<SessionHandle, RuntimeError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RuntimeError::SessionNotFound(id))
    }

    /// Stop the session's task and forget it
    pub async fn remove(&self, id: Uuid) -> Result<(), RuntimeError> {
        let handle = self
            .sessions
            .write()
            .await
            .remove(&id)
            .ok_or(RuntimeError::SessionNotFound(id))?;
        let _ = handle.command_tx.send(Command::Shutdown).await;
        tracing::info!(session_id = %id, "Removed session");
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;
    use crate::scheduler::Phase;
    use std::time::Duration;

    fn manager() -> SessionManager {
        SessionManager::new(PacingConfig::deterministic(Duration::from_millis(1000), true))
    }

    fn idle_manager(idle: Duration) -> SessionManager {
        manager().with_idle_timeout(idle)
    }

    async fn seeded(manager: &SessionManager) -> SessionHandle {
        let config = manager.pacing.clone();
        manager.create_with(Pacing::seeded(config, 5)).await
    }

    fn drain(rx: &mut broadcast::Receiver<SessionEvent>) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_paces_greeting_welcome_and_follow_up() {
        let manager = manager();
        let handle = seeded(&manager).await;

        handle.start("Karim").await.unwrap();

        tokio::time::sleep(Duration::from_millis(400)).await;
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.messages.len(), 1);
        assert!(!snapshot.typing);
        assert_eq!(snapshot.phase, Phase::Active);

        // welcome typing runs 500ms..1500ms
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(handle.snapshot().await.unwrap().typing);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.messages.len(), 2);
        assert!(!snapshot.typing);

        // follow-up typing starts 2s after the welcome
        tokio::time::sleep(Duration::from_secs(5)).await;
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.messages.len(), 3);
        assert_eq!(snapshot.user_name.as_deref(), Some("Karim"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_every_step_in_order() {
        let manager = manager();
        let handle = seeded(&manager).await;
        let (initial, mut rx) = handle.subscribe().await.unwrap();
        assert!(initial.messages.is_empty());
        assert_eq!(initial.phase, Phase::AwaitingName);

        handle.start("Karim").await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;

        let events = drain(&mut rx);
        let shape: Vec<&str> = events
            .iter()
            .map(|e| match e {
                SessionEvent::Message { .. } => "message",
                SessionEvent::Typing { active: true } => "typing",
                SessionEvent::Typing { active: false } => "idle",
                SessionEvent::Reset => "reset",
            })
            .collect();
        assert_eq!(
            shape,
            vec!["message", "typing", "idle", "message", "typing", "idle", "message"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_text_reply_and_follow_up() {
        let manager = manager();
        let handle = seeded(&manager).await;
        handle.start("Karim").await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;

        handle.send_text("deposit").await.unwrap();
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.messages.len(), 4);
        assert_eq!(snapshot.messages[3].sender, Sender::User);
        assert!(snapshot.typing);

        tokio::time::sleep(Duration::from_secs(10)).await;
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.messages.len(), 6);
        assert_eq!(snapshot.pending_topic.as_deref(), Some("deposit"));
        assert!(!snapshot.typing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_mid_typing_discards_pending_turns() {
        let manager = manager();
        let handle = seeded(&manager).await;
        let (_, mut rx) = handle.subscribe().await.unwrap();
        handle.start("Karim").await.unwrap();

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(handle.snapshot().await.unwrap().typing);

        handle.reset().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;

        let snapshot = handle.snapshot().await.unwrap();
        assert!(snapshot.messages.is_empty());
        assert!(!snapshot.typing);
        assert_eq!(snapshot.phase, Phase::AwaitingName);
        assert_eq!(snapshot.user_name, None);
        assert_eq!(drain(&mut rx).last(), Some(&SessionEvent::Reset));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejections_surface_scheduler_errors() {
        let manager = manager();
        let handle = seeded(&manager).await;

        let err = handle.send_text("hello").await.unwrap_err();
        assert!(matches!(err, RuntimeError::Rejected(SchedulerError::NotStarted)));

        let err = handle.start("  ").await.unwrap_err();
        assert!(matches!(err, RuntimeError::Rejected(SchedulerError::EmptyName)));

        handle.start("Karim").await.unwrap();
        let err = handle.choose_option("jackpot").await.unwrap_err();
        assert!(matches!(err, RuntimeError::Rejected(SchedulerError::UnknownQuickOption(_))));
    }

    #[tokio::test]
    async fn test_get_and_remove() {
        let manager = manager();
        let handle = manager.create().await;
        assert_eq!(manager.get(handle.id()).await.unwrap().id(), handle.id());
        assert_eq!(manager.count().await, 1);

        manager.remove(handle.id()).await.unwrap();
        assert_eq!(manager.count().await, 0);
        assert!(matches!(
            manager.get(handle.id()).await,
            Err(RuntimeError::SessionNotFound(_))
        ));
        assert!(matches!(
            handle.snapshot().await,
            Err(RuntimeError::SessionClosed(_))
        ));
        assert!(matches!(
            manager.remove(handle.id()).await,
            Err(RuntimeError::SessionNotFound(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_sessions_are_evicted() {
        let manager = manager();
        for _ in 0..50 {
            let handle = manager.create().await;
            handle.start("Karim").await.unwrap();
        }
        assert_eq!(manager.count().await, 50);

        tokio::time::sleep(Duration::from_secs(24 * 60 * 60)).await;
        assert_eq!(manager.count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_commands_keep_a_session_alive() {
        let manager = idle_manager(Duration::from_secs(60));
        let handle = seeded(&manager).await;
        handle.start("Karim").await.unwrap();

        for _ in 0..5 {
            tokio::time::sleep(Duration::from_secs(45)).await;
            handle.snapshot().await.unwrap();
        }
        assert_eq!(manager.count().await, 1);

        tokio::time::sleep(Duration::from_secs(90)).await;
        assert_eq!(manager.count().await, 0);
        assert!(matches!(
            handle.snapshot().await,
            Err(RuntimeError::SessionClosed(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_stream_keeps_a_session_alive() {
        let manager = idle_manager(Duration::from_secs(60));
        let handle = seeded(&manager).await;
        let (_, rx) = handle.subscribe().await.unwrap();
        drop(handle);

        tokio::time::sleep(Duration::from_secs(600)).await;
        assert_eq!(manager.count().await, 1);

        drop(rx);
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(manager.count().await, 0);
    }
}

//! Session runtime executor

use super::Command;
use crate::scheduler::{Effect, Event, SchedulerError, Session, SessionEvent, TurnScheduler};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Owns one session and drives its scheduler from commands and timers
pub struct SessionRuntime {
    session_id: Uuid,
    session: Session,
    scheduler: TurnScheduler,
    command_rx: mpsc::Receiver<Command>,
    timer_tx: mpsc::UnboundedSender<Event>,
    timer_rx: mpsc::UnboundedReceiver<Event>,
    broadcast_tx: broadcast::Sender<SessionEvent>,
    /// Cancels every sleeping timer task; replaced on reset
    timers: CancellationToken,
    /// Exit once this long passes without commands and nobody is streaming
    idle_timeout: Duration,
    last_activity: Instant,
}

impl SessionRuntime {
    pub fn new(
        session_id: Uuid,
        scheduler: TurnScheduler,
        command_rx: mpsc::Receiver<Command>,
        broadcast_tx: broadcast::Sender<SessionEvent>,
        idle_timeout: Duration,
    ) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        Self {
            session_id,
            session: Session::new(),
            scheduler,
            command_rx,
            timer_tx,
            timer_rx,
            broadcast_tx,
            timers: CancellationToken::new(),
            idle_timeout,
            last_activity: Instant::now(),
        }
    }

    pub async fn run(mut self) {
        tracing::info!(session_id = %self.session_id, "Starting session runtime");

        loop {
            let idle_deadline = self.last_activity + self.idle_timeout;
            tokio::select! {
                command = self.command_rx.recv() => {
                    self.last_activity = Instant::now();
                    match command {
                        Some(Command::Apply { event, reply }) => {
                            let outcome = self.apply(event);
                            let _ = reply.send(outcome);
                        }
                        Some(Command::Snapshot { reply }) => {
                            let _ = reply.send(self.session.snapshot());
                        }
                        Some(Command::Subscribe { reply }) => {
                            let _ = reply.send((self.session.snapshot(), self.broadcast_tx.subscribe()));
                        }
                        Some(Command::Shutdown) | None => break,
                    }
                }
                Some(event) = self.timer_rx.recv() => {
                    if let Err(e) = self.apply(event) {
                        tracing::warn!(session_id = %self.session_id, error = %e, "Timer step rejected");
                    }
                }
                () = tokio::time::sleep_until(idle_deadline) => {
                    if self.broadcast_tx.receiver_count() == 0 {
                        tracing::info!(session_id = %self.session_id, idle = ?self.idle_timeout, "Evicting idle session");
                        break;
                    }
                    // Someone is still watching the stream
                    self.last_activity = Instant::now();
                }
            }
        }

        self.timers.cancel();
        tracing::info!(session_id = %self.session_id, "Session runtime stopped");
    }

    fn apply(&mut self, event: Event) -> Result<(), SchedulerError> {
        let result = self.scheduler.handle(&mut self.session, event)?;
        for effect in result.effects {
            self.execute_effect(effect);
        }
        Ok(())
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Notify(event) => {
                // No subscribers is fine; the log is the source of truth
                let _ = self.broadcast_tx.send(event);
            }
            Effect::Schedule {
                delay,
                generation,
                step,
            } => {
                let token = self.timers.clone();
                let timer_tx = self.timer_tx.clone();
                tokio::spawn(async move {
                    tokio::select! {
                        () = token.cancelled() => {}
                        () = tokio::time::sleep(delay) => {
                            let _ = timer_tx.send(Event::StepDue { generation, step });
                        }
                    }
                });
            }
            Effect::CancelPending => {
                self.timers.cancel();
                self.timers = CancellationToken::new();
            }
        }
    }
}

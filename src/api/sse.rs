//! Server-Sent Events support

use super::types::{MessageView, SessionView};
use crate::scheduler::{SessionEvent, SessionSnapshot};
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use serde_json::json;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Initial snapshot followed by live session events
pub fn sse_stream(
    init: SessionSnapshot,
    broadcast_rx: broadcast::Receiver<SessionEvent>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let init = futures::stream::once(async move { Ok(init_event(init)) });

    let broadcasts = BroadcastStream::new(broadcast_rx).filter_map(|result| match result {
        Ok(event) => Some(Ok(session_event_to_axum(event))),
        Err(e) => {
            tracing::warn!(error = %e, "SSE subscriber lagged");
            None
        }
    });

    Sse::new(init.chain(broadcasts)).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

fn init_event(snapshot: SessionSnapshot) -> Event {
    let data = json!({
        "type": "init",
        "session": SessionView::from(snapshot),
    });
    Event::default().event("init").data(data.to_string())
}

fn session_event_to_axum(event: SessionEvent) -> Event {
    let (event_type, data) = match event {
        SessionEvent::Message { message } => (
            "message",
            json!({
                "type": "message",
                "message": MessageView::from(message),
            }),
        ),
        SessionEvent::Typing { active } => (
            "typing",
            json!({
                "type": "typing",
                "active": active,
            }),
        ),
        SessionEvent::Reset => ("reset", json!({ "type": "reset" })),
    };

    Event::default().event(event_type).data(data.to_string())
}

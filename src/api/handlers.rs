//! HTTP request handlers

use super::sse::sse_stream;
use super::types::{
    ChatRequest, ErrorResponse, QueuedResponse, QuickOptionsResponse, SessionResponse, SessionView, StartRequest,
    SuccessResponse,
};
use super::AppState;
use crate::chat::QUICK_OPTIONS;
use crate::runtime::{RuntimeError, SessionHandle};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Catalog
        .route("/api/quick-options", get(list_quick_options))
        // Session lifecycle
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session).delete(delete_session))
        .route("/api/sessions/:id/start", post(start_session))
        .route("/api/sessions/:id/reset", post(reset_session))
        // User input
        .route("/api/sessions/:id/messages", post(send_message))
        .route("/api/sessions/:id/quick/:option_id", post(choose_quick_option))
        // Streaming
        .route("/api/sessions/:id/stream", get(stream_session))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Catalog
// ============================================================

async fn list_quick_options() -> Json<QuickOptionsResponse> {
    Json(QuickOptionsResponse {
        options: &QUICK_OPTIONS,
    })
}

// ============================================================
// Session Lifecycle
// ============================================================

async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<StartRequest>,
) -> Result<impl IntoResponse, AppError> {
    let handle = state.sessions.create().await;

    if let Err(e) = handle.start(req.name).await {
        // Nothing worth keeping if the name was refused
        let _ = state.sessions.remove(handle.id()).await;
        return Err(e.into());
    }

    let response = session_response(&handle).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let handle = state.sessions.get(id).await?;
    Ok(Json(session_response(&handle).await?))
}

async fn start_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StartRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let handle = state.sessions.get(id).await?;
    handle.start(req.name).await?;
    Ok(Json(session_response(&handle).await?))
}

async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.sessions.get(id).await?.reset().await?;
    Ok(Json(SuccessResponse { success: true }))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.sessions.remove(id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================
// User Input
// ============================================================

async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<QueuedResponse>, AppError> {
    state.sessions.get(id).await?.send_text(req.text).await?;
    Ok(Json(QueuedResponse { queued: true }))
}

async fn choose_quick_option(
    State(state): State<AppState>,
    Path((id, option_id)): Path<(Uuid, String)>,
) -> Result<Json<QueuedResponse>, AppError> {
    tracing::debug!(session_id = %id, option_id = %option_id, "Quick option chosen");
    state.sessions.get(id).await?.choose_option(option_id).await?;
    Ok(Json(QueuedResponse { queued: true }))
}

// ============================================================
// Streaming
// ============================================================

async fn stream_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (snapshot, broadcast_rx) = state.sessions.get(id).await?.subscribe().await?;
    Ok(sse_stream(snapshot, broadcast_rx))
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("ludo-assistant ", env!("CARGO_PKG_VERSION"))
}

async fn session_response(handle: &SessionHandle) -> Result<SessionResponse, AppError> {
    let snapshot = handle.snapshot().await?;
    Ok(SessionResponse {
        id: handle.id(),
        session: SessionView::from(snapshot),
    })
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<RuntimeError> for AppError {
    fn from(e: RuntimeError) -> Self {
        match e {
            RuntimeError::SessionNotFound(_) => AppError::NotFound(e.to_string()),
            RuntimeError::Rejected(_) => AppError::BadRequest(e.to_string()),
            RuntimeError::SessionClosed(id) => {
                tracing::error!(session_id = %id, "Session task is gone");
                AppError::Internal(e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}

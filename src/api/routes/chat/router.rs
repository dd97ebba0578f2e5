//! Router for the chat API

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::openai::Role;

type SharedState = Arc<AppState>;

/// Get a snapshot of the session transcript
async fn transcript(State(state): State<SharedState>) -> impl IntoResponse {
    let session = state.session.lock().await;
    axum::Json(public::TranscriptResponse {
        transcript: session.snapshot().to_vec(),
    })
}

/// Submit the next user message and return the assistant's reply
async fn message_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut session = state.session.lock().await;

    // Seed the configured system message on the first turn
    if session.snapshot().is_empty() {
        session.append_turn(Role::System, &state.config.system_message);
    }

    session.set_pending_input(&payload.message);
    let reply = state.dialogue.submit_pending_input(&mut session).await?;

    Ok(axum::Json(public::ChatResponse::new(&reply.content)))
}

/// Upload a document to ground subsequent queries in
async fn document_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let mut session = state.session.lock().await;
    state.dialogue.submit_document(&mut session, &body)?;

    Ok(axum::Json(public::DocumentResponse {
        characters: session.document_text().chars().count(),
    }))
}

/// Answer a query from the uploaded document, ignoring history
async fn grounded_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::GroundedRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut session = state.session.lock().await;
    let reply = state
        .dialogue
        .submit_grounded_query(&mut session, &payload.query)
        .await?;

    Ok(axum::Json(public::ChatResponse::new(&reply.content)))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(transcript))
        .route("/message", post(message_handler))
        .route("/document", post(document_handler))
        .route("/grounded", post(grounded_handler))
}

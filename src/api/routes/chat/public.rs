//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::openai::Message;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Deserialize)]
pub struct GroundedRequest {
    pub query: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    message: String,
}

impl ChatResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub transcript: Vec<Message>,
}

#[derive(Serialize)]
pub struct DocumentResponse {
    /// Number of characters extracted from the uploaded document
    pub characters: usize,
}

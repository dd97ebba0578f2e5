//! Test utilities for integration tests
use std::sync::Arc;

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use axum::{Router, body::Body};
use axum::body::to_bytes;

use colloquy::api::AppState;
use colloquy::api::app;
use colloquy::chat::Dialogue;
use colloquy::core::AppConfig;
use colloquy::openai::{CompletionModel, Message};
use colloquy::pdf::ExtractText;

/// Echoes the content of the last message in the prompt.
pub struct EchoModel;

#[async_trait]
impl CompletionModel for EchoModel {
    async fn complete(&self, messages: &[Message]) -> Result<String, Error> {
        let last = messages.last().ok_or(anyhow!("Empty prompt"))?;
        Ok(last.content.clone())
    }
}

/// Fails every call the way an unreachable provider would.
pub struct FailingModel;

#[async_trait]
impl CompletionModel for FailingModel {
    async fn complete(&self, _messages: &[Message]) -> Result<String, Error> {
        Err(anyhow!("connection refused"))
    }
}

/// Returns fixed page text regardless of the uploaded bytes.
pub struct StubExtractor(pub &'static str);

impl ExtractText for StubExtractor {
    fn extract_text(&self, _bytes: &[u8]) -> Result<String, Error> {
        Ok(self.0.to_string())
    }
}

/// Fails the way a corrupt document would.
pub struct FailingExtractor;

impl ExtractText for FailingExtractor {
    fn extract_text(&self, _bytes: &[u8]) -> Result<String, Error> {
        Err(anyhow!("corrupt xref table"))
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        api_hostname: String::from("https://api.example.com"),
        api_key: String::from("test-api-key"),
        model: String::from("test-model"),
        system_message: String::from("You are a helpful assistant."),
    }
}

/// Creates a test application router with stubbed collaborators.
pub fn test_app(
    model: Box<dyn CompletionModel>,
    extractor: Box<dyn ExtractText>,
) -> Router {
    let dialogue = Dialogue::new(model, extractor);
    let app_state = AppState::new(dialogue, test_config());
    app(Arc::new(app_state))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::core::AppConfig;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

/// One turn in a conversation using the OpenAI compatible chat
/// completion schema. Immutable once created; ordering within a
/// transcript is significant and never reordered.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// The model collaborator: an ordered list of messages in, a single
/// text reply out. One call per turn, no retries, no caller-imposed
/// timeout beyond the client's own request timeout.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, Error>;
}

pub async fn completion(
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<String, Error> {
    let payload = json!({
        "model": model,
        "messages": messages,
    });
    let url = format!("{}/chat/completions", api_hostname.trim_end_matches("/"));

    tracing::debug!("Requesting completion from {} with model {}", url, model);

    let response: Value = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 10))
        .json(&payload)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    response["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or(anyhow!("No message content in response: {}", response))
}

/// Client for an OpenAI compatible chat completion endpoint. The
/// hostname and model identifier are fixed configuration values, not
/// part of the dialogue contract.
pub struct OpenAiClient {
    api_hostname: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api_hostname, &config.api_key, &config.model)
    }
}

#[async_trait]
impl CompletionModel for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, Error> {
        completion(messages, &self.api_hostname, &self.api_key, &self.model).await
    }
}

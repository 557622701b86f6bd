//! Ollama chat client used as an [`Enhancer`].

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use yp_core::config::EnhancerConfig;
use yp_core::Mode;

use crate::Enhancer;

const HEALTH_TIMEOUT: Duration = Duration::from_secs(2);

pub const SYSTEM_PROMPT: &str = "You compress rambling, verbose descriptions into minimal, \
token-efficient prompts for an AI coding assistant.

Rules:
- Drop all filler (please, could you, I want, basically, actually)
- Use shorthand (3/10min, not \"3 per 10 minutes\")
- Leave out anything the assistant can infer from context
- One clear action per prompt
- Be direct and imperative

In-project tasks use the shape:
[action] [what] [where]. [constraint if critical]

Example input: \"Hey can you please add a feature where users can only request 3 songs every 10 minutes? I don't want people spamming the queue. Make sure it returns a proper error message.\"
Example output: \"Add rate limit: 3 songs/10min per user. Return 429 + retry-after.\"

New projects use the shape:
[Name]: [one-liner]. Tech: [stack]. Features: [bullets]. Data: [schema hints]. Order: [phases].

Reply with the compressed prompt only.";

#[derive(Debug, Error)]
pub enum OllamaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Ollama error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Ollama returned an empty reply")]
    EmptyReply,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub stream: bool,
    pub options: ChatOptions,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatOptions {
    pub temperature: f32,
    pub num_predict: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReplyMessage {
    #[serde(default)]
    pub content: String,
}

pub(crate) fn user_message(input: &str, mode: Mode) -> String {
    format!("Mode: {mode}\n\nCompress this:\n{input}")
}

/// Talks to an Ollama host's `/api/chat` and `/api/tags` endpoints.
#[derive(Debug, Clone)]
pub struct OllamaEnhancer {
    client: Client,
    host: String,
    model: String,
    temperature: f32,
    num_predict: u32,
}

impl OllamaEnhancer {
    pub fn new(config: &EnhancerConfig) -> Result<Self, OllamaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            host: config.host.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            num_predict: config.num_predict,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub(crate) fn request<'a>(&'a self, user: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: user },
            ],
            stream: false,
            options: ChatOptions {
                temperature: self.temperature,
                num_predict: self.num_predict,
            },
        }
    }

    /// One non-streaming chat round trip. Returns the trimmed reply.
    pub async fn chat(&self, input: &str, mode: Mode) -> Result<String, OllamaError> {
        let user = user_message(input, mode);
        let response = self
            .client
            .post(format!("{}/api/chat", self.host))
            .json(&self.request(&user))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(OllamaError::Api { status: status.as_u16(), message });
        }

        let body: ChatResponse = response.json().await?;
        let reply = body.message.content.trim().to_string();
        if reply.is_empty() {
            return Err(OllamaError::EmptyReply);
        }
        debug!(model = %self.model, reply_len = reply.len(), "ollama reply");
        Ok(reply)
    }
}

#[async_trait]
impl Enhancer for OllamaEnhancer {
    fn name(&self) -> &str {
        &self.model
    }

    async fn is_available(&self) -> bool {
        match self
            .client
            .get(format!("{}/api/tags", self.host))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!(host = %self.host, error = %e, "ollama health check failed");
                false
            }
        }
    }

    async fn try_enhance(&self, input: &str, mode: Mode) -> Option<String> {
        match self.chat(input, mode).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                warn!(error = %e, "ollama unavailable, using local compression");
                None
            }
        }
    }
}

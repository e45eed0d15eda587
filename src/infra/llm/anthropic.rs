use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{MERMAID_SYSTEM_PROMPT, TextGenerator, mermaid_user_prompt, strip_code_fence};
use crate::domain::{Result, WorkflowError};
use crate::infra::app_config::AppConfig;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub system: &'a str,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    kind: Option<String>,
    message: String,
}

/// Anthropic Messages API client. One request per generation, never retried.
pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|err| {
                log::warn!("falling back to default HTTP client: {err}");
                reqwest::Client::new()
            });
        Self {
            http,
            api_key,
            base_url: base_url.into(),
            model: model.into(),
            max_tokens,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.resolved_api_key(),
            config.api_base_url.clone(),
            config.resolved_model(),
            config.max_tokens,
        )
    }

    pub fn build_request_body(&self, description: &str) -> MessagesRequest<'_> {
        MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: MERMAID_SYSTEM_PROMPT,
            messages: vec![ChatMessage {
                role: "user",
                content: mermaid_user_prompt(description),
            }],
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

/// First text block of a successful response, with any code fence removed.
pub fn extract_markup(body: &str) -> Result<String> {
    let response: MessagesResponse = serde_json::from_str(body)
        .map_err(|err| WorkflowError::Generation(format!("malformed response: {err}")))?;

    let text = response
        .content
        .into_iter()
        .find_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
        .ok_or_else(|| WorkflowError::Generation("response contained no text".into()))?;

    let markup = strip_code_fence(&text);
    if markup.is_empty() {
        return Err(WorkflowError::Generation("response was empty".into()));
    }
    Ok(markup)
}

/// Human-readable message from an error response body.
pub fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.kind {
            Some(kind) => format!("{kind}: {}", envelope.error.message),
            None => envelope.error.message,
        },
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait]
impl TextGenerator for AnthropicClient {
    async fn generate(&self, description: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            WorkflowError::Generation(
                "no API key configured; set ANTHROPIC_API_KEY or api_key in the config file"
                    .into(),
            )
        })?;

        let body = self.build_request_body(description);
        log::info!("requesting diagram markup from {}", self.model);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|err| WorkflowError::Generation(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| WorkflowError::Generation(err.to_string()))?;

        if !status.is_success() {
            log::warn!("text generation returned HTTP {status}");
            return Err(WorkflowError::Generation(format!(
                "HTTP {status}: {}",
                api_error_message(&text)
            )));
        }

        extract_markup(&text)
    }
}

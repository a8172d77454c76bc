//! OpenAI-compatible chat completion adapter.
//!
//! Speaks the `/chat/completions` wire format, so it works against Groq,
//! OpenAI, or any self-hosted endpoint that implements the same API.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, error};

use lzdw_application::ports::inference::{InferenceError, InferenceGateway};

const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 4500;

/// Gateway adapter for OpenAI-compatible completion APIs.
pub struct OpenAiCompatGateway {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompatGateway {
    /// Create a gateway against `endpoint` (the API base, without the
    /// `/chat/completions` suffix).
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, InferenceError> {
        // No request timeout: a long completion is allowed to run until
        // the connection itself gives up.
        let client = reqwest::Client::builder()
            .user_agent("lzdw/0.3")
            .build()
            .map_err(|e| InferenceError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }

    /// Request payload. JSON-object response format is forced so the model
    /// cannot wrap its answer in prose.
    fn request_body(&self, system: &str, user: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
            "response_format": { "type": "json_object" },
        })
    }
}

#[async_trait]
impl InferenceGateway for OpenAiCompatGateway {
    async fn complete(&self, system: &str, user: &str) -> Result<String, InferenceError> {
        let url = self.completions_url();
        debug!(%url, model = %self.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(system, user))
            .send()
            .await
            .map_err(|e| InferenceError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Inference API error: {body}");
            return Err(InferenceError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::Connection(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();
        if content.trim().is_empty() {
            return Err(InferenceError::EmptyResponse);
        }
        Ok(content)
    }
}

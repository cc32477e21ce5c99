use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};

use business::domain::chat_model::errors::ChatModelError;
use business::domain::chat_model::model::ModelSettings;
use business::domain::chat_model::services::{ChatModel, ChatModelFactory};
use business::domain::credential::model::Credential;

use crate::client::{API_KEY_HEADER, DEFAULT_BASE_URL, GeminiClient};

/// Chat handle backed by the Gemini `generateContent` endpoint.
pub struct GeminiChatModel {
    client: GeminiClient,
    settings: ModelSettings,
}

impl GeminiChatModel {
    pub fn new(client: GeminiClient, settings: ModelSettings) -> Self {
        Self { client, settings }
    }

    fn build_body(prompt: &str, temperature: f32) -> Value {
        json!({
            "contents": [
                {"role": "user", "parts": [{"text": prompt}]},
            ],
            "generationConfig": {
                "temperature": temperature,
            },
        })
    }

    /// Concatenates the text parts of the first candidate.
    fn extract_text(data: &Value) -> Result<String, ChatModelError> {
        let text: String = data["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter(|part| !part["thought"].as_bool().unwrap_or(false))
                    .filter_map(|part| part["text"].as_str())
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ChatModelError::EmptyResponse);
        }

        Ok(text)
    }

    fn map_status(status: StatusCode) -> ChatModelError {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ChatModelError::Unauthorized
            }
            _ => ChatModelError::RequestFailed,
        }
    }
}

#[async_trait]
impl ChatModel for GeminiChatModel {
    fn model(&self) -> &str {
        &self.settings.model
    }

    fn temperature(&self) -> f32 {
        self.settings.temperature
    }

    async fn invoke(&self, prompt: &str) -> Result<String, ChatModelError> {
        let body = Self::build_body(prompt, self.settings.temperature);

        let response = self
            .client
            .client
            .post(self.client.generate_content_url(&self.settings.model))
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, self.client.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "generateContent request failed");
                ChatModelError::RequestFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "generateContent returned an error status");
            return Err(Self::map_status(status));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|_| ChatModelError::RequestFailed)?;

        Self::extract_text(&data)
    }
}

/// Builds [`GeminiChatModel`] handles. No request is sent until `invoke`.
pub struct GeminiChatModelFactory {
    base_url: String,
}

impl GeminiChatModelFactory {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for GeminiChatModelFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatModelFactory for GeminiChatModelFactory {
    fn build(&self, credential: Credential, settings: ModelSettings) -> Arc<dyn ChatModel> {
        let client = GeminiClient::new(credential, self.base_url.clone());
        Arc::new(GeminiChatModel::new(client, settings))
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::credential::model::Credential;

use super::errors::ChatModelError;
use super::model::ModelSettings;

/// A configured handle to a remote generative model.
///
/// Model and temperature are fixed at construction.
#[async_trait]
pub trait ChatModel: Send + Sync {
    fn model(&self) -> &str;
    fn temperature(&self) -> f32;

    /// Sends a single user turn and returns the generated text.
    ///
    /// The prompt is sent as given; blank prompts are rejected by the invoke use case.
    async fn invoke(&self, prompt: &str) -> Result<String, ChatModelError>;
}

/// Service port that assembles chat handles. Construction performs no I/O.
pub trait ChatModelFactory: Send + Sync {
    fn build(&self, credential: Credential, settings: ModelSettings) -> Arc<dyn ChatModel>;
}

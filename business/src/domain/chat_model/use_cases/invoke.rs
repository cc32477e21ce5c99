use async_trait::async_trait;

use crate::domain::chat_model::errors::ChatModelError;

pub struct InvokeChatModelParams {
    pub prompt: String,
}

#[async_trait]
pub trait InvokeChatModelUseCase: Send + Sync {
    async fn execute(&self, params: InvokeChatModelParams) -> Result<String, ChatModelError>;
}

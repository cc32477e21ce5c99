use std::sync::Arc;

use crate::domain::chat_model::model::ModelSettings;
use crate::domain::chat_model::services::ChatModel;
use crate::domain::credential::model::Credential;

pub struct BuildChatModelParams {
    pub credential: Credential,
    pub settings: ModelSettings,
}

pub trait BuildChatModelUseCase: Send + Sync {
    fn execute(&self, params: BuildChatModelParams) -> Arc<dyn ChatModel>;
}

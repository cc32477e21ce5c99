use std::sync::Arc;

use crate::domain::chat_model::services::{ChatModel, ChatModelFactory};
use crate::domain::chat_model::use_cases::build::{BuildChatModelParams, BuildChatModelUseCase};
use crate::domain::logger::Logger;

pub struct BuildChatModelUseCaseImpl {
    pub factory: Arc<dyn ChatModelFactory>,
    pub logger: Arc<dyn Logger>,
}

impl BuildChatModelUseCase for BuildChatModelUseCaseImpl {
    fn execute(&self, params: BuildChatModelParams) -> Arc<dyn ChatModel> {
        self.logger
            .info(&format!("Building chat model {}", params.settings));

        self.factory.build(params.credential, params.settings)
    }
}

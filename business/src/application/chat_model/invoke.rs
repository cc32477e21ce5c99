use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat_model::errors::ChatModelError;
use crate::domain::chat_model::services::ChatModel;
use crate::domain::chat_model::use_cases::invoke::{InvokeChatModelParams, InvokeChatModelUseCase};
use crate::domain::logger::Logger;

pub struct InvokeChatModelUseCaseImpl {
    pub model: Arc<dyn ChatModel>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl InvokeChatModelUseCase for InvokeChatModelUseCaseImpl {
    async fn execute(&self, params: InvokeChatModelParams) -> Result<String, ChatModelError> {
        if params.prompt.trim().is_empty() {
            return Err(ChatModelError::EmptyPrompt);
        }

        self.logger.info(&format!(
            "Invoking {} with a {} character prompt",
            self.model.model(),
            params.prompt.chars().count()
        ));

        let reply = self.model.invoke(&params.prompt).await.inspect_err(|e| {
            self.logger
                .error(&format!("Invocation of {} failed: {}", self.model.model(), e));
        })?;

        self.logger
            .debug(&format!("Received {} characters", reply.chars().count()));

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    struct StubModel {
        reply: Result<String, ChatModelError>,
        calls: AtomicUsize,
    }

    impl StubModel {
        fn replying(reply: Result<String, ChatModelError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ChatModel for StubModel {
        fn model(&self) -> &str {
            "gemini-2.5-flash"
        }

        fn temperature(&self) -> f32 {
            0.0
        }

        async fn invoke(&self, _prompt: &str) -> Result<String, ChatModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_reply_from_model() {
        let model = StubModel::replying(Ok("Hi there".to_string()));
        let use_case = InvokeChatModelUseCaseImpl {
            model: model.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(InvokeChatModelParams {
                prompt: "Hello".to_string(),
            })
            .await;

        assert_eq!(result.unwrap(), "Hi there");
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_reject_blank_prompt_without_calling_model() {
        let model = StubModel::replying(Ok("unused".to_string()));
        let use_case = InvokeChatModelUseCaseImpl {
            model: model.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(InvokeChatModelParams {
                prompt: "   ".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), ChatModelError::EmptyPrompt);
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_log_and_propagate_model_error() {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_error()
            .withf(|message| message.contains("chat_model.unauthorized"))
            .times(1)
            .returning(|_| ());
        let use_case = InvokeChatModelUseCaseImpl {
            model: StubModel::replying(Err(ChatModelError::Unauthorized)),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(InvokeChatModelParams {
                prompt: "Hello".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ChatModelError::Unauthorized)));
    }
}

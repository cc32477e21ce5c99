use std::sync::Arc;

use logger::TracingLogger;

use gemini::chat_model::GeminiChatModelFactory;

use business::application::chat_model::build::BuildChatModelUseCaseImpl;
use business::application::chat_model::invoke::InvokeChatModelUseCaseImpl;
use business::application::credential::load::LoadCredentialUseCaseImpl;
use business::domain::chat_model::services::{ChatModel, ChatModelFactory};
use business::domain::chat_model::use_cases::build::{BuildChatModelParams, BuildChatModelUseCase};
use business::domain::chat_model::use_cases::invoke::InvokeChatModelUseCase;
use business::domain::credential::errors::ConfigError;
use business::domain::credential::source::EnvironmentSource;
use business::domain::logger::Logger;

use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub chat_model: Arc<dyn ChatModel>,
    pub invoke_use_case: Arc<dyn InvokeChatModelUseCase>,
}

impl DependencyContainer {
    /// Loads the credential from `source` and builds the Gemini chat handle.
    ///
    /// # Errors
    /// Returns `ConfigError::Missing` before any handle is built if the key is absent
    pub fn new(source: Arc<dyn EnvironmentSource>) -> Result<Self, ConfigError> {
        Self::with_factory(source, Arc::new(GeminiChatModelFactory::new()))
    }

    pub fn with_factory(
        source: Arc<dyn EnvironmentSource>,
        factory: Arc<dyn ChatModelFactory>,
    ) -> Result<Self, ConfigError> {
        // Configuration
        let load_credential = LoadCredentialUseCaseImpl {
            source,
            logger: Arc::new(TracingLogger::new("credential")),
        };
        let config = GeminiConfig::load(&load_credential)?;

        // Chat model
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("chat_model"));
        let build_chat_model = BuildChatModelUseCaseImpl {
            factory,
            logger: logger.clone(),
        };
        let chat_model = build_chat_model.execute(BuildChatModelParams {
            credential: config.api_key,
            settings: config.settings,
        });

        let invoke_use_case = Arc::new(InvokeChatModelUseCaseImpl {
            model: chat_model.clone(),
            logger,
        });

        Ok(Self {
            chat_model,
            invoke_use_case,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::chat_model::model::ModelSettings;
    use business::domain::credential::model::Credential;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MapEnvironment(HashMap<String, String>);

    impl MapEnvironment {
        fn with(pairs: &[(&str, &str)]) -> Arc<Self> {
            Arc::new(Self(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ))
        }
    }

    impl EnvironmentSource for MapEnvironment {
        fn get(&self, name: &str) -> Option<String> {
            self.0.get(name).cloned()
        }
    }

    /// Delegates to the real factory while counting calls.
    #[derive(Default)]
    struct CountingFactory {
        calls: AtomicUsize,
        inner: GeminiChatModelFactory,
    }

    impl ChatModelFactory for CountingFactory {
        fn build(&self, credential: Credential, settings: ModelSettings) -> Arc<dyn ChatModel> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.build(credential, settings)
        }
    }

    #[test]
    fn should_build_gemini_handle_when_key_is_set() {
        // Arrange
        let factory = Arc::new(CountingFactory::default());

        // Act
        let container = DependencyContainer::with_factory(
            MapEnvironment::with(&[("GOOGLE_API_KEY", "abc123")]),
            factory.clone(),
        )
        .unwrap();

        // Assert
        assert_eq!(container.chat_model.model(), "gemini-2.5-flash");
        assert_eq!(container.chat_model.temperature(), 0.0);
        assert_eq!(factory.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn should_fail_without_building_when_key_is_missing() {
        let factory = Arc::new(CountingFactory::default());

        let result = DependencyContainer::with_factory(MapEnvironment::with(&[]), factory.clone());

        let error = result.err().unwrap();
        assert!(
            error
                .to_string()
                .starts_with("GOOGLE_API_KEY environment variable not set")
        );
        assert_eq!(factory.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn should_fail_without_building_when_key_is_empty() {
        let factory = Arc::new(CountingFactory::default());

        let result = DependencyContainer::with_factory(
            MapEnvironment::with(&[("GOOGLE_API_KEY", "")]),
            factory.clone(),
        );

        assert!(matches!(result, Err(ConfigError::Missing(_))));
        assert_eq!(factory.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn should_build_with_default_factory() {
        let container =
            DependencyContainer::new(MapEnvironment::with(&[("GOOGLE_API_KEY", "xyz")])).unwrap();

        assert_eq!(container.chat_model.model(), "gemini-2.5-flash");
    }
}

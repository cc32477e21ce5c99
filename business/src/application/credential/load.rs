use std::sync::Arc;

use crate::domain::credential::errors::ConfigError;
use crate::domain::credential::model::Credential;
use crate::domain::credential::source::EnvironmentSource;
use crate::domain::credential::use_cases::load::{LoadCredentialParams, LoadCredentialUseCase};
use crate::domain::logger::Logger;

pub struct LoadCredentialUseCaseImpl {
    pub source: Arc<dyn EnvironmentSource>,
    pub logger: Arc<dyn Logger>,
}

impl LoadCredentialUseCase for LoadCredentialUseCaseImpl {
    fn execute(&self, params: LoadCredentialParams) -> Result<Credential, ConfigError> {
        self.logger
            .debug(&format!("Loading credential from {}", params.name));

        let credential = self
            .source
            .get(&params.name)
            .and_then(|value| Credential::new(value).ok())
            .ok_or_else(|| ConfigError::missing(&params.name))?;

        self.logger.info(&format!("Credential {} loaded", params.name));

        Ok(credential)
    }
}

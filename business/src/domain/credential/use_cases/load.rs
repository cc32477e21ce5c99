use crate::domain::credential::errors::ConfigError;
use crate::domain::credential::model::{Credential, GOOGLE_API_KEY};

pub struct LoadCredentialParams {
    pub name: String,
}

impl Default for LoadCredentialParams {
    fn default() -> Self {
        Self {
            name: GOOGLE_API_KEY.to_string(),
        }
    }
}

pub trait LoadCredentialUseCase: Send + Sync {
    fn execute(&self, params: LoadCredentialParams) -> Result<Credential, ConfigError>;
}

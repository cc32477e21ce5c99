use business::domain::chat_model::model::ModelSettings;
use business::domain::credential::errors::ConfigError;
use business::domain::credential::model::Credential;
use business::domain::credential::use_cases::load::{LoadCredentialParams, LoadCredentialUseCase};

/// Configuration for Gemini API access.
///
/// Environment variables:
/// - GOOGLE_API_KEY: API key from Google AI Studio (required)
///
/// Model and temperature are fixed to `gemini-2.5-flash` and `0`.
pub struct GeminiConfig {
    pub api_key: Credential,
    pub settings: ModelSettings,
}

impl GeminiConfig {
    /// # Errors
    /// Returns `ConfigError::Missing` if GOOGLE_API_KEY is unset or empty
    pub fn load(loader: &dyn LoadCredentialUseCase) -> Result<Self, ConfigError> {
        let api_key = loader.execute(LoadCredentialParams::default())?;
        Ok(Self {
            api_key,
            settings: ModelSettings::default(),
        })
    }
}

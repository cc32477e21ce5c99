/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set. Please get your key from Google AI Studio.")]
    Missing(String),
}

impl ConfigError {
    pub fn missing(name: impl Into<String>) -> Self {
        ConfigError::Missing(name.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("credential.empty")]
    Empty,
}

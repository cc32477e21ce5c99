use super::errors::CredentialError;

/// Environment variable holding the Gemini API key.
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";

/// A non-empty secret used to authenticate against the model service.
///
/// `Debug` and `Display` are redacted so the value never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a secret, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, CredentialError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CredentialError::Empty);
        }
        Ok(Self(value))
    }

    /// Returns the raw secret. Only adapters talking to the service should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}

use std::time::Duration;

use business::domain::credential::model::Credential;
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const API_KEY_HEADER: &str = "x-goog-api-key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared Gemini HTTP client configuration.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: Credential,
    pub base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: Credential, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the generateContent endpoint URL for `model`.
    pub fn generate_content_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> Credential {
        Credential::new("abc123").unwrap()
    }

    #[test]
    fn should_point_at_public_endpoint() {
        let client = GeminiClient::new(credential(), DEFAULT_BASE_URL);

        assert_eq!(
            client.generate_content_url("gemini-2.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        let client = GeminiClient::new(credential(), "http://localhost:8080/v1beta/");

        assert_eq!(
            client.generate_content_url("m"),
            "http://localhost:8080/v1beta/models/m:generateContent"
        );
    }

    #[test]
    fn should_keep_api_key_unchanged() {
        let client = GeminiClient::new(credential(), DEFAULT_BASE_URL);
        assert_eq!(client.api_key.expose(), "abc123");
    }
}

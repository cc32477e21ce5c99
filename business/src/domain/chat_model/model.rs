/// Gemini model used for every chat handle.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Greedy sampling: the service returns its most likely output.
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Fixed parameters a chat handle is created with.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub model: String,
    pub temperature: f32,
}

impl ModelSettings {
    pub fn new(model: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            temperature,
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL, DEFAULT_TEMPERATURE)
    }
}

impl std::fmt::Display for ModelSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (temperature {})", self.model, self.temperature)
    }
}

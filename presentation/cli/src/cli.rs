use clap::Parser;

/// Build the Gemini chat model from GOOGLE_API_KEY and optionally send one prompt.
#[derive(Debug, Parser)]
#[command(name = "base-llm", version)]
pub struct Cli {
    /// Words sent as a single prompt. Without them only the configuration is checked.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub prompt: Vec<String>,
}

impl Cli {
    /// The prompt words joined by spaces, or `None` when none were given.
    pub fn prompt(&self) -> Option<String> {
        (!self.prompt.is_empty()).then(|| self.prompt.join(" "))
    }
}

use std::sync::Arc;

use clap::Parser;

mod cli;
mod config;
mod setup;

use business::domain::chat_model::use_cases::invoke::InvokeChatModelParams;
use cli::Cli;
use environment::dotenv::load_dotenv;
use environment::process::ProcessEnvironment;
use setup::dependency_injection::DependencyContainer;

/// base-llm entry point
///
/// Loads GOOGLE_API_KEY (optionally from `.env`), builds the Gemini chat
/// handle and, when words are passed on the command line, sends them as a
/// single prompt and prints the reply.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Parse arguments before touching configuration
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    // 2. Load environment variables so RUST_LOG from `.env` applies too
    let env_file = load_dotenv(&std::env::current_dir()?);

    // 3. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "environment file applied");
    }

    // 4. Load configuration and wire dependencies
    let container = DependencyContainer::new(Arc::new(ProcessEnvironment))?;
    tracing::info!(
        model = container.chat_model.model(),
        temperature = container.chat_model.temperature(),
        "chat model ready"
    );

    // 5. Optional single prompt
    let Some(prompt) = cli.prompt() else {
        return Ok(());
    };

    let reply = container
        .invoke_use_case
        .execute(InvokeChatModelParams { prompt })
        .await?;
    println!("{}", reply);

    Ok(())
}

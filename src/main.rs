//! Ask OpenAI one example question and print the answer.
//!
//! Reads `OPENAI_API_KEY` from the environment or a `.env` file:
//!
//! ```bash
//! echo 'OPENAI_API_KEY=sk-...' > .env
//! cargo run
//! ```

use chat_completion::{CompletionClient, Config, Error};
use tracing_subscriber::EnvFilter;

const EXAMPLE_PROMPT: &str = "What is artificial intelligence?";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    // Logs go to stderr so stdout only carries the prompt and response.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let client = CompletionClient::new(&config)?;

    let response = client.get_completion(EXAMPLE_PROMPT).await?;
    println!("Prompt: {EXAMPLE_PROMPT}");
    println!("Response: {response}");

    Ok(())
}

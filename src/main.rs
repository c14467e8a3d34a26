use std::sync::Arc;

use gemini_joker::{
    config::Config, llm_providers::gemini::GeminiProvider, prompts::joke_requester::JokeRequester,
};
use tracing::info;

const JOKE_TOPIC: &str = "computers";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Logging is not up yet; a config error surfaces through main's Err.
    let config = Config::from_env()?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(model = %config.model, temperature = config.temperature, "using Gemini");

    let provider = GeminiProvider::new(config.api_key, config.model)
        .with_temperature(config.temperature);
    let requester = JokeRequester::new(Arc::new(provider));

    let joke = requester.generate_joke(JOKE_TOPIC).await?;

    println!("\n--- Gemini's Joke ---");
    println!("{}", joke);

    Ok(())
}

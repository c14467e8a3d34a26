pub mod config;
pub mod llm_providers;
pub mod prompts;

use std::env;

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-04-17";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub log_level: String,
}

impl Config {
    /// Reads configuration from the process environment. `GOOGLE_API_KEY`
    /// is required; everything else falls back to the defaults above.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("GOOGLE_API_KEY").ok_or(ConfigError::MissingVar("GOOGLE_API_KEY"))?;

        let model = lookup("JOKER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = match lookup("JOKER_TEMPERATURE") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidVar {
                var: "JOKER_TEMPERATURE",
                reason: format!("{}", e),
            })?,
            None => DEFAULT_TEMPERATURE,
        };

        let log_level = lookup("JOKER_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            api_key,
            model,
            temperature,
            log_level,
        })
    }
}

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiProvider {
    api_key: String,
    model: String,
    temperature: f32,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            temperature: crate::config::DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Points the provider at a different host. Used to run the wire
    /// format against a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// === Request Structs ===
#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

// === Response Structs ===
#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<TextPartOwned>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct TextPartOwned {
    text: String,
}

// === LLMProvider Implementation ===
impl super::traits::LLMProvider for GeminiProvider {
    #[instrument(skip(self))]
    fn query<'a>(
        &'a self,
        input: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, super::traits::LLMError>> + Send + 'a>> {
        Box::pin(async move {
            debug!("Querying Gemini with input: {}", input);

            let url = format!(
                "{}/v1beta/models/{}:generateContent?key={}",
                self.base_url, self.model, self.api_key
            );

            let request_body = GeminiRequest {
                contents: vec![Content {
                    parts: vec![TextPart { text: input }],
                }],
                generation_config: GenerationConfig {
                    temperature: self.temperature,
                },
            };

            let response = self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .json(&request_body)
                .send()
                .await
                .map_err(|e| {
                    error!("Error sending request to Gemini: {:?}", e);
                    super::traits::LLMError::Other(format!("{:?}", e))
                })?;

            if !response.status().is_success() {
                error!("HTTP error from Gemini: {}", response.status());
                return Err(super::traits::LLMError::Network(format!(
                    "HTTP error: {}",
                    response.status()
                )));
            }

            let parsed: GeminiResponse = response.json().await.map_err(|e| {
                error!("Error parsing response from Gemini: {:?}", e);
                super::traits::LLMError::InvalidResponse(format!("{:?}", e))
            })?;

            let result = parsed
                .candidates
                .first()
                .and_then(|c| c.content.parts.first())
                .map(|p| p.text.clone())
                .ok_or_else(|| {
                    error!("No response from Gemini");
                    super::traits::LLMError::InvalidResponse("No response from Gemini".to_string())
                })?;

            debug!("Received response from Gemini: {}", result);
            Ok(result)
        })
    }
}

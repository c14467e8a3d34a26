use std::sync::Arc;

use crate::{
    llm_providers::{LLMProvider, traits::LLMError},
    prompts::{JOKE_TEMPLATE, PromptTemplate},
};

/// Renders the joke prompt for a topic and forwards it to the model.
/// Holds no mutable state; concurrent calls are independent.
pub struct JokeRequester {
    llm_provider: Arc<dyn LLMProvider + Send + Sync>,
    template: PromptTemplate,
}

impl JokeRequester {
    pub fn new(llm_provider: Arc<dyn LLMProvider + Send + Sync>) -> Self {
        Self {
            llm_provider,
            template: PromptTemplate::from_template(JOKE_TEMPLATE),
        }
    }

    /// Asks the model for a joke about `topic`. The topic is not
    /// validated and the reply is returned unmodified; any provider
    /// error propagates to the caller as-is.
    pub async fn generate_joke(&self, topic: &str) -> Result<String, LLMError> {
        let prompt = self.template.render("topic", topic);

        println!("Asking Gemini for a joke about: {}...", topic);

        self.llm_provider.query(&prompt).await
    }
}

pub mod joke_requester;

/// The fixed joke prompt. The "one or two sentences" instruction is
/// advisory to the model; nothing enforces it on the reply.
pub const JOKE_TEMPLATE: &str =
    "Tell me a short, funny joke about {topic}. Keep it to one or two sentences.";

/// A template string with one named placeholder, e.g. `{topic}`.
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn from_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Substitutes `value` for the `{name}` placeholder exactly once.
    /// The value is not validated or escaped; it passes through verbatim.
    pub fn render(&self, name: &str, value: &str) -> String {
        self.template.replacen(&format!("{{{}}}", name), value, 1)
    }
}

pub mod traits;
pub mod gemini;
pub mod mock;

pub use traits::LLMProvider;

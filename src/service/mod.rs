pub mod catalog;
pub mod generator;
pub mod llm;
pub mod prompts;
pub mod scoring;
pub mod speech;

pub use catalog::ExcuseCatalog;
pub use generator::ExcuseGenerator;
pub use llm::LlmClient;
pub use speech::SpeechClient;

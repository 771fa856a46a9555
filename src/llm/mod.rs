pub mod interface;
pub mod openai_llm;
pub mod factory;

pub use interface::SqlGenerator;
pub use openai_llm::OpenAiLlm;
pub use factory::LlmFactory;

//! Chat model adapters

mod openai;

pub use openai::OpenAiChatModel;

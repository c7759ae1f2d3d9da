pub mod examples;
pub mod llm;
pub mod prompts;
pub mod server_url;

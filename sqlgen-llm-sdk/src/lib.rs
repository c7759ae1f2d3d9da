//! # sqlgen LLM SDK
//!
//! Client and wire types for an Ollama-compatible inference server, scoped
//! to what the SQL playground needs: listing installed models and running
//! schema-constrained, non-streaming completions.
//!
//! ## Example
//!
//! ```rust,no_run
//! use serde_json::json;
//! use sqlgen_llm_sdk::ollama::{unwrap_field, OllamaClient, OllamaGenerateRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OllamaClient::new()?.with_base_url("http://localhost:11434");
//!
//!     let request = OllamaGenerateRequest::with_schema(
//!         "phi4:14b",
//!         "Return {\"gen_sql\": \"SELECT 1\"}",
//!         json!({
//!             "type": "object",
//!             "properties": { "gen_sql": { "type": "string" } },
//!             "required": ["gen_sql"]
//!         }),
//!     );
//!
//!     let raw = client.generate(&request).await?;
//!     let sql = unwrap_field(&raw, "gen_sql")?.into_value();
//!     println!("SQL: {}", sql);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod ollama;

pub use reqwest::Url;

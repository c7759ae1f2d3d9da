use crate::config::ApiConfig;
use crate::helpers::{examples::load_examples, llm::create_ollama_client, server_url};
use crate::models::Example;
use sqlgen_llm_sdk::ollama::OllamaClient;

/// Read-only state shared by every handler
///
/// Built once at startup; nothing in it is mutated afterwards.
pub struct AppState {
    pub config: ApiConfig,
    pub ollama: OllamaClient,
    pub examples: Vec<Example>,
}

impl AppState {
    pub fn new(config: ApiConfig, ollama: OllamaClient, examples: Vec<Example>) -> Self {
        Self {
            config,
            ollama,
            examples,
        }
    }

    /// Create the upstream client and load the examples file named in `config`
    pub fn from_config(config: ApiConfig) -> anyhow::Result<Self> {
        let ollama = create_ollama_client(&config.ollama)?;
        let examples = load_examples(&config.data.examples_path)?;
        Ok(Self::new(config, ollama, examples))
    }

    /// Client aimed at the caller's server, or the configured default
    pub fn client_for(&self, requested_url: &str) -> OllamaClient {
        let base_url =
            server_url::normalize_server_url(requested_url, &self.config.ollama.default_url);
        self.ollama.clone().with_base_url(base_url)
    }

    pub fn model_or_default<'a>(&'a self, requested: &'a str) -> &'a str {
        let requested = requested.trim();
        if requested.is_empty() {
            &self.config.ollama.default_model
        } else {
            requested
        }
    }
}

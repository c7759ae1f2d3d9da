use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub db_schema: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub model_name: String,
    #[serde(default, alias = "serverUrl")]
    pub server_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub sql: String,
    pub debug_response: String,
}

/// The bundled frontend posts `gtSql` / `genSql`; both spellings are accepted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComparisonRequest {
    #[serde(default)]
    pub db_schema: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub model_name: String,
    #[serde(default, alias = "serverUrl")]
    pub server_url: String,
    #[serde(default, alias = "gtSql")]
    pub gt_sql: String,
    #[serde(default, alias = "genSql")]
    pub gen_sql: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub resolve_yn: String,
    pub debug_response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub db_schema: String,
    pub question: String,
    pub sql: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ModelsQuery {
    #[serde(default, rename = "serverUrl", alias = "server_url")]
    pub server_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_response: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

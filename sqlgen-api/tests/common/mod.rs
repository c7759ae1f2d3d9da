#![allow(dead_code)]

use actix_web::{test, web, App};
use serde_json::json;
use sqlgen_api::config::ApiConfig;
use sqlgen_api::handlers::configure_routes;
use sqlgen_api::helpers::llm::create_ollama_client;
use sqlgen_api::models::Example;
use sqlgen_api::state::AppState;

/// Nothing listens here, so every call fails at connect time
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

pub fn test_state(default_url: &str, examples: Vec<Example>) -> web::Data<AppState> {
    test_state_with_timeout(default_url, examples, 5)
}

pub fn test_state_with_timeout(
    default_url: &str,
    examples: Vec<Example>,
    timeout_secs: u64,
) -> web::Data<AppState> {
    let mut config = ApiConfig::default();
    config.ollama.default_url = default_url.to_string();
    config.ollama.timeout_secs = timeout_secs;

    let ollama = create_ollama_client(&config.ollama).expect("client should build");
    web::Data::new(AppState::new(config, ollama, examples))
}

pub async fn setup_test_app(
    state: web::Data<AppState>,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(App::new().app_data(state).configure(configure_routes)).await
}

/// `/api/generate` body wrapping `inner` the way Ollama does
pub fn ollama_envelope(inner: &str) -> String {
    json!({
        "model": "phi4:14b",
        "created_at": "2025-01-20T07:31:12.000Z",
        "response": inner,
        "done": true,
        "done_reason": "stop"
    })
    .to_string()
}

pub fn sample_examples() -> Vec<Example> {
    vec![
        Example {
            db_schema: "CREATE TABLE employees (id INTEGER PRIMARY KEY, name TEXT, salary INTEGER);"
                .to_string(),
            question: "Who earns more than 5000?".to_string(),
            sql: "SELECT name FROM employees WHERE salary > 5000".to_string(),
        },
        Example {
            db_schema: "CREATE TABLE orders (id INTEGER PRIMARY KEY, total REAL);".to_string(),
            question: "How many orders are there?".to_string(),
            sql: "SELECT COUNT(*) FROM orders".to_string(),
        },
    ]
}

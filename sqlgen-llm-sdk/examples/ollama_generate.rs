use serde_json::json;
use sqlgen_llm_sdk::ollama::{unwrap_field, ModelList, OllamaClient, OllamaGenerateRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::var("OLLAMA_BASE_URL")
        .unwrap_or_else(|_| sqlgen_llm_sdk::ollama::DEFAULT_BASE_URL.to_string());

    let client = OllamaClient::new()?.with_base_url(base_url);

    let model = match client.list_models().await? {
        ModelList::Tags(tags) if !tags.is_empty() => tags[0].name.clone(),
        _ => return Err("no models installed".into()),
    };
    println!("Using model: {}", model);

    let request = OllamaGenerateRequest::with_schema(
        model,
        "Write a SQL query counting the rows of table `users`. \
         Respond as JSON: {\"gen_sql\": \"<SQL query>\"}",
        json!({
            "type": "object",
            "properties": { "gen_sql": { "type": "string" } },
            "required": ["gen_sql"]
        }),
    );

    let raw = client.generate(&request).await?;
    println!("Raw: {}", raw);
    println!("SQL: {}", unwrap_field(&raw, "gen_sql")?.into_value());

    Ok(())
}

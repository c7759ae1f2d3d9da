use crate::error::ApiResult;
use crate::helpers::llm::complete_single_field;
use crate::helpers::prompts::{generation_prompt, GEN_SQL_FIELD};
use crate::models::{GenerationRequest, GenerationResult};
use crate::state::AppState;
use actix_web::{post, web, HttpResponse};
use tracing::info;

#[post("/generate")]
pub async fn generate_sql(
    req: web::Json<GenerationRequest>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let req = req.into_inner();
    let client = state.client_for(&req.server_url);
    let model = state.model_or_default(&req.model_name);

    info!(model, server_url = %client.base_url(), "Generating SQL");

    let prompt = generation_prompt(&req.question, &req.db_schema);
    let completion = complete_single_field(&client, model, prompt, GEN_SQL_FIELD).await?;

    Ok(HttpResponse::Ok().json(GenerationResult {
        sql: completion.value,
        debug_response: completion.raw,
    }))
}

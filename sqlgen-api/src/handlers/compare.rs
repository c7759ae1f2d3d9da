use crate::error::ApiResult;
use crate::helpers::llm::complete_single_field;
use crate::helpers::prompts::{comparison_prompt, RESOLVE_YN_FIELD};
use crate::models::{ComparisonRequest, ComparisonResult};
use crate::state::AppState;
use actix_web::{post, web, HttpResponse};
use tracing::info;

#[post("/compare")]
pub async fn compare_sql(
    req: web::Json<ComparisonRequest>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let req = req.into_inner();
    let client = state.client_for(&req.server_url);
    let model = state.model_or_default(&req.model_name);

    info!(model, server_url = %client.base_url(), "Comparing generated SQL with ground truth");

    let prompt = comparison_prompt(&req.question, &req.db_schema, &req.gt_sql, &req.gen_sql);
    let completion = complete_single_field(&client, model, prompt, RESOLVE_YN_FIELD).await?;

    info!(resolve_yn = %completion.value, "Comparison finished");

    Ok(HttpResponse::Ok().json(ComparisonResult {
        resolve_yn: completion.value,
        debug_response: completion.raw,
    }))
}

use crate::error::{ApiError, ApiResult};
use crate::models::ModelsQuery;
use crate::state::AppState;
use actix_web::{get, web, HttpResponse};
use tracing::{error, info};

#[get("/models")]
pub async fn list_models(
    query: web::Query<ModelsQuery>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let requested = query.server_url.as_deref().unwrap_or_default();
    let client = state.client_for(requested);

    let models = client.list_models().await.map_err(|e| {
        error!(
            error = %e,
            timed_out = e.is_timeout(),
            server_url = %client.base_url(),
            "Failed to fetch model tags"
        );
        ApiError::Upstream(e)
    })?;

    info!(server_url = %client.base_url(), passthrough = models.is_raw(), "Listed models");
    Ok(HttpResponse::Ok().json(models))
}

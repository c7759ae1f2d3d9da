//! HTTP handlers and route table.

pub mod compare;
pub mod examples;
pub mod generate;
pub mod health;
pub mod models;
pub mod web_assets;

use crate::error::ApiError;
use actix_web::web;
use tracing::warn;

/// Register every route; shared by the server binary and the tests
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web_assets::index)
        .service(web_assets::static_asset)
        .service(health::health_check)
        .service(models::list_models)
        .service(examples::list_examples)
        .service(generate::generate_sql)
        .service(compare::compare_sql);
}

/// Reject unreadable JSON bodies with a 400 in the usual error shape
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "Rejected request body");
        ApiError::InvalidRequest(err.to_string()).into()
    })
}

use crate::models::ErrorResponse;
use actix_web::{get, web, HttpResponse, Responder};
use mime_guess::from_path;
use rust_embed::RustEmbed;

/// Frontend shell and its assets, compiled into the binary
#[derive(RustEmbed)]
#[folder = "static/"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.css"]
#[include = "*.ico"]
pub struct WebAssets;

fn serve_embedded(file_path: &str) -> HttpResponse {
    match WebAssets::get(file_path) {
        Some(content) => {
            let mime = from_path(file_path).first_or_octet_stream();
            let cache_control = if file_path.ends_with(".html") {
                "no-cache, no-store, must-revalidate"
            } else {
                "public, max-age=86400"
            };

            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .insert_header(("Cache-Control", cache_control))
                .body(content.data.into_owned())
        }
        None => {
            tracing::debug!("Embedded file not found: {}", file_path);
            HttpResponse::NotFound().json(ErrorResponse {
                error: format!("Asset {} not found", file_path),
                debug_response: None,
            })
        }
    }
}

#[get("/")]
pub async fn index() -> impl Responder {
    serve_embedded("index.html")
}

#[get("/static/{filename:.*}")]
pub async fn static_asset(filename: web::Path<String>) -> impl Responder {
    serve_embedded(&filename.into_inner())
}

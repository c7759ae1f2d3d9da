use crate::state::AppState;
use actix_web::{get, web, HttpResponse, Responder};

#[get("/examples")]
pub async fn list_examples(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.examples)
}

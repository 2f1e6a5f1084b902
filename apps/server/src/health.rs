use actix_web::{web, HttpResponse};

use crate::error::AppError;

/// Fixed text served by the description resource.
pub const API_DESCRIPTION: &str = "The Egon Framework status API. \
See https://egon-framework.github.io/status-api/ for more details.";

async fn health() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().finish())
}

async fn description() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body(API_DESCRIPTION))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/description", web::get().to(description));
}

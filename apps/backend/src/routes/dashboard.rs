//! Dashboard landing-page endpoint.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// GET /api/dashboard/stats
async fn stats(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = app_state.storage().dashboard_stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/dashboard/stats").route(web::get().to(stats)));
}

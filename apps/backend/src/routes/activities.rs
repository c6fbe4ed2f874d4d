//! Activity feed endpoint.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// GET /api/activities/recent — newest four, for the dashboard feed.
async fn recent_activities(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let activities = app_state.storage().recent_activities().await?;
    Ok(HttpResponse::Ok().json(activities))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/activities/recent").route(web::get().to(recent_activities)));
}

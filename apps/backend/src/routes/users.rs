//! User listing endpoint.
//!
//! `User` skips its password field on serialization, so this listing never
//! exposes credentials.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// GET /api/users
async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = app_state.storage().users().await?;
    Ok(HttpResponse::Ok().json(users))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/users").route(web::get().to(list_users)));
}

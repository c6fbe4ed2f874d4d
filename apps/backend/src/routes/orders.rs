//! Order listing endpoints.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// GET /api/orders
async fn list_orders(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let orders = app_state.storage().orders().await?;
    Ok(HttpResponse::Ok().json(orders))
}

/// GET /api/orders/recent — newest four, for the dashboard widget.
async fn recent_orders(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let orders = app_state.storage().recent_orders().await?;
    Ok(HttpResponse::Ok().json(orders))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/orders/recent").route(web::get().to(recent_orders)));
    cfg.service(web::resource("/api/orders").route(web::get().to(list_orders)));
}

//! Product listing endpoints.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// GET /api/products
async fn list_products(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let products = app_state.storage().products().await?;
    Ok(HttpResponse::Ok().json(products))
}

/// GET /api/products/top-selling — top three by sales, for the dashboard widget.
async fn top_selling(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let products = app_state.storage().top_selling_products().await?;
    Ok(HttpResponse::Ok().json(products))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/products/top-selling").route(web::get().to(top_selling)));
    cfg.service(web::resource("/api/products").route(web::get().to(list_products)));
}

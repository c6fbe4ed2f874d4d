//! Professional area endpoints.

use actix_web::{web, HttpResponse};

use crate::domain::NewProfessionalArea;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services;
use crate::state::app_state::AppState;

/// GET /api/professional-areas
async fn list_areas(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let areas = app_state.storage().professional_areas().await?;
    Ok(HttpResponse::Ok().json(areas))
}

/// POST /api/professional-areas
async fn create_area(
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewProfessionalArea>,
) -> Result<HttpResponse, AppError> {
    let area = services::areas::create_area(app_state.storage(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(area))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/professional-areas")
            .route(web::get().to(list_areas))
            .route(web::post().to(create_area)),
    );
}

//! Public job application endpoints.

use actix_web::{web, HttpResponse};

use crate::domain::NewJobApplication;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services;
use crate::state::app_state::AppState;

/// GET /api/job-applications
async fn list_applications(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let applications = app_state.storage().job_applications().await?;
    Ok(HttpResponse::Ok().json(applications))
}

/// POST /api/job-applications
async fn create_application(
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewJobApplication>,
) -> Result<HttpResponse, AppError> {
    let application =
        services::applications::submit_application(app_state.storage(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(application))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/job-applications")
            .route(web::get().to(list_applications))
            .route(web::post().to(create_application)),
    );
}

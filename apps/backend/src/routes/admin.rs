//! Admin endpoints for the jobs board, registered under `/api/admin`.

use actix_web::http::header::{ETAG, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::ApplicationStatus;
use crate::error::AppError;
use crate::extractors::{RecordId, ValidatedJson};
use crate::http::etag::{if_none_match_matches, listing_etag};
use crate::services;
use crate::state::app_state::AppState;

/// GET /api/admin/job-applications
///
/// Applications joined with their posting and candidate profile for the
/// review screen.
async fn list_applications_with_details(
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let applications = app_state.storage().job_applications_with_details().await?;
    Ok(HttpResponse::Ok().json(applications))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewApplicationRequest {
    status: ApplicationStatus,
    #[serde(default)]
    notes: Option<String>,
}

/// POST /api/admin/job-applications/{id}/review
async fn review_application(
    id: RecordId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ReviewApplicationRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let application = services::applications::review_application(
        app_state.storage(),
        id.0,
        payload.status,
        payload.notes,
    )
    .await?;
    Ok(HttpResponse::Ok().json(application))
}

/// GET /api/admin/jobs
///
/// Returns every posting (active or not) with its application count, plus an
/// ETag derived from the store revision. Supports `If-None-Match`: when the
/// client's ETag still matches, returns `304 Not Modified` with no body.
async fn list_jobs_with_stats(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let revision = app_state.storage().revision().await;
    let etag_value = listing_etag("jobs", revision);

    if let Some(if_none_match) = http_req.headers().get(IF_NONE_MATCH) {
        if let Ok(client_etag) = if_none_match.to_str() {
            if if_none_match_matches(client_etag, &etag_value) {
                // Listing hasn't changed, return 304 Not Modified
                return Ok(HttpResponse::build(StatusCode::NOT_MODIFIED)
                    .insert_header((ETAG, etag_value))
                    .finish());
            }
        }
    }

    let jobs = app_state.storage().jobs_with_stats().await?;
    Ok(HttpResponse::Ok()
        .insert_header((ETAG, etag_value))
        .json(jobs))
}

/// POST /api/admin/jobs/{id}/toggle-status
async fn toggle_job_status(
    id: RecordId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let job = services::jobs::toggle_job(app_state.storage(), id.0).await?;
    Ok(HttpResponse::Ok().json(job))
}

#[derive(Debug, Serialize)]
struct DeleteJobResponse {
    success: bool,
}

/// DELETE /api/admin/jobs/{id}
async fn delete_job(
    id: RecordId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    services::jobs::remove_job(app_state.storage(), id.0).await?;
    Ok(HttpResponse::Ok().json(DeleteJobResponse { success: true }))
}

/// GET /api/admin/user-profiles
async fn list_profiles_with_stats(
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let profiles = app_state.storage().user_profiles_with_stats().await?;
    Ok(HttpResponse::Ok().json(profiles))
}

/// GET /api/admin/job-stats
async fn job_stats(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = app_state.storage().job_system_stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/job-applications").route(web::get().to(list_applications_with_details)),
    );
    cfg.service(
        web::resource("/job-applications/{id}/review").route(web::post().to(review_application)),
    );
    cfg.service(web::resource("/jobs").route(web::get().to(list_jobs_with_stats)));
    cfg.service(web::resource("/jobs/{id}/toggle-status").route(web::post().to(toggle_job_status)));
    cfg.service(web::resource("/jobs/{id}").route(web::delete().to(delete_job)));
    cfg.service(web::resource("/user-profiles").route(web::get().to(list_profiles_with_stats)));
    cfg.service(web::resource("/job-stats").route(web::get().to(job_stats)));
}

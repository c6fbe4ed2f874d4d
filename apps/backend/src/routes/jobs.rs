//! Public jobs-board endpoints.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::{JobFilter, NewJob};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::services;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AreaQuery {
    #[serde(default)]
    area_id: Option<String>,
}

/// Parse the optional `areaId` query parameter the way the path extractors
/// do: shape errors are 400s with our problem contract, not actix defaults.
pub(crate) fn parse_area_id(query: &AreaQuery) -> Result<Option<i64>, AppError> {
    query
        .area_id
        .as_deref()
        .map(|raw| {
            raw.parse::<i64>().map_err(|_| {
                AppError::bad_request(ErrorCode::InvalidId, format!("Invalid areaId: {raw}"))
            })
        })
        .transpose()
}

/// GET /api/jobs — active postings, optionally filtered by professional area.
async fn list_jobs(
    query: web::Query<AreaQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let filter = JobFilter {
        professional_area_id: parse_area_id(&query)?,
        is_active: Some(true),
    };
    let jobs = app_state.storage().jobs(filter).await?;
    Ok(HttpResponse::Ok().json(jobs))
}

/// POST /api/jobs
async fn create_job(
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewJob>,
) -> Result<HttpResponse, AppError> {
    let job = services::jobs::publish_job(app_state.storage(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(job))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/jobs")
            .route(web::get().to(list_jobs))
            .route(web::post().to(create_job)),
    );
}

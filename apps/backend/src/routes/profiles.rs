//! Candidate profile endpoints.

use actix_web::{web, HttpResponse};

use crate::domain::{NewUserProfile, ProfileFilter};
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services;
use crate::state::app_state::AppState;

use super::jobs::{parse_area_id, AreaQuery};

/// GET /api/user-profiles — optionally filtered by professional area.
async fn list_profiles(
    query: web::Query<AreaQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let filter = ProfileFilter {
        professional_area_id: parse_area_id(&query)?,
    };
    let profiles = app_state.storage().user_profiles(filter).await?;
    Ok(HttpResponse::Ok().json(profiles))
}

/// POST /api/user-profiles
async fn create_profile(
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewUserProfile>,
) -> Result<HttpResponse, AppError> {
    let profile = services::profiles::publish_profile(app_state.storage(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(profile))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/user-profiles")
            .route(web::get().to(list_profiles))
            .route(web::post().to(create_profile)),
    );
}

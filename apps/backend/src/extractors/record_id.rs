use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::Serialize;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Record id extracted from the `{id}` route path parameter.
///
/// Parses and validates the shape only (positive integer); whether the
/// record exists is decided by the storage operation, which returns the
/// entity-specific not-found error.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct RecordId(pub i64);

impl FromRequest for RecordId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<RecordId, AppError> {
    let raw = req
        .match_info()
        .get("id")
        .ok_or_else(|| AppError::bad_request(ErrorCode::InvalidId, "Missing id parameter"))?;

    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(ErrorCode::InvalidId, format!("Invalid id: {raw}")))?;

    if id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidId,
            format!("Id must be positive, got: {id}"),
        ));
    }

    Ok(RecordId(id))
}

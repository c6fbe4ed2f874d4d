//! Job posting flows: publish, toggle, delete.

use tracing::info;

use crate::domain::validate::{is_valid_email, require_non_empty};
use crate::domain::{Job, NewJob};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::storage::Storage;

/// Validate and publish a new job posting.
pub async fn publish_job(storage: &dyn Storage, new: NewJob) -> Result<Job, AppError> {
    require_non_empty("title", &new.title)?;
    require_non_empty("company", &new.company)?;
    require_non_empty("description", &new.description)?;
    if !is_valid_email(&new.contact_email) {
        return Err(AppError::invalid(
            ErrorCode::InvalidEmail,
            format!("invalid contact email: {}", Redacted(&new.contact_email)),
        ));
    }

    let job = storage.create_job(new).await?;
    info!(
        job_id = job.id,
        company = %job.company,
        area_id = ?job.professional_area_id,
        "job.published"
    );
    Ok(job)
}

/// Flip a posting between active and inactive.
pub async fn toggle_job(storage: &dyn Storage, id: i64) -> Result<Job, AppError> {
    let job = storage.toggle_job_status(id).await?;
    info!(job_id = job.id, is_active = job.is_active, "job.status_toggled");
    Ok(job)
}

/// Delete a posting and cascade over its applications.
pub async fn remove_job(storage: &dyn Storage, id: i64) -> Result<(), AppError> {
    storage.delete_job(id).await?;
    info!(job_id = id, "job.deleted");
    Ok(())
}

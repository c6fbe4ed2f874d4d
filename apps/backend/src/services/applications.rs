//! Job application flows: submission and admin review.

use tracing::info;

use crate::domain::validate::require_non_empty;
use crate::domain::{ApplicationReview, ApplicationStatus, JobApplication, NewJobApplication};
use crate::error::AppError;
use crate::storage::Storage;

/// Reviewer recorded on admin reviews. The backend has no authentication
/// (the original attributed every review to the primary admin account).
const ADMIN_REVIEWER_ID: i64 = 1;

/// Validate and store a submitted application.
pub async fn submit_application(
    storage: &dyn Storage,
    new: NewJobApplication,
) -> Result<JobApplication, AppError> {
    require_non_empty("coverLetter", &new.cover_letter)?;

    let application = storage.create_job_application(new).await?;
    info!(
        application_id = application.id,
        job_id = ?application.job_id,
        profile_id = application.user_profile_id,
        "job_application.submitted"
    );
    Ok(application)
}

/// Apply an admin review to an application.
pub async fn review_application(
    storage: &dyn Storage,
    id: i64,
    status: ApplicationStatus,
    notes: Option<String>,
) -> Result<JobApplication, AppError> {
    let application = storage
        .review_job_application(
            id,
            ApplicationReview {
                status,
                notes,
                reviewed_by: ADMIN_REVIEWER_ID,
            },
        )
        .await?;
    info!(
        application_id = application.id,
        status = ?application.status,
        "job_application.reviewed"
    );
    Ok(application)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::storage::MemStorage;

    #[tokio::test]
    async fn submission_requires_a_cover_letter() {
        let store = MemStorage::new();
        let err = submit_application(
            &store,
            NewJobApplication {
                job_id: None,
                user_profile_id: 1,
                cover_letter: "".to_string(),
                status: ApplicationStatus::Pending,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn review_attributes_the_admin_reviewer() {
        let store = MemStorage::new();
        let application = submit_application(
            &store,
            NewJobApplication {
                job_id: None,
                user_profile_id: 1,
                cover_letter: "Estimado equipo".to_string(),
                status: ApplicationStatus::Pending,
            },
        )
        .await
        .unwrap();

        let reviewed = review_application(
            &store,
            application.id,
            ApplicationStatus::Accepted,
            Some("Programar entrevista.".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(reviewed.reviewed_by, Some(ADMIN_REVIEWER_ID));
        assert_eq!(reviewed.status, ApplicationStatus::Accepted);
    }

    #[tokio::test]
    async fn review_of_unknown_application_is_404() {
        let store = MemStorage::new();
        let err = review_application(&store, 42, ApplicationStatus::Rejected, None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ApplicationNotFound);
    }
}

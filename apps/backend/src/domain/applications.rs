use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::jobs::Job;
use super::profiles::UserProfile;

/// Review state of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

/// Application submitted for a job posting.
///
/// `job_id` is `None` for spontaneous applications: open applications not
/// tied to any posting. Those survive the posting's deletion cascade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: i64,
    pub job_id: Option<i64>,
    pub user_profile_id: i64,
    pub cover_letter: String,
    pub status: ApplicationStatus,
    pub reviewed_by: Option<i64>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub reviewed_at: Option<OffsetDateTime>,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub applied_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobApplication {
    #[serde(default)]
    pub job_id: Option<i64>,
    pub user_profile_id: i64,
    pub cover_letter: String,
    #[serde(default)]
    pub status: ApplicationStatus,
}

/// Admin review outcome applied to an application.
#[derive(Debug, Clone)]
pub struct ApplicationReview {
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub reviewed_by: i64,
}

/// Application joined with its posting and candidate profile for the admin
/// review screen. `job` is `None` for spontaneous applications.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationWithDetails {
    #[serde(flatten)]
    pub application: JobApplication,
    pub job: Option<Job>,
    pub profile: Option<UserProfile>,
}

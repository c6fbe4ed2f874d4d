use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Candidate profile published on the jobs board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub professional_area_id: Option<i64>,
    pub experience: Option<String>,
    pub skills: Vec<String>,
    pub education: Option<String>,
    pub summary: Option<String>,
    pub expected_salary: Option<String>,
    pub available_for_work: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserProfile {
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub professional_area_id: Option<i64>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub expected_salary: Option<String>,
    #[serde(default = "default_available")]
    pub available_for_work: bool,
}

fn default_available() -> bool {
    true
}

/// Listing filter for candidate profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileFilter {
    pub professional_area_id: Option<i64>,
}

/// Profile plus its application count, for the admin listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileWithStats {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub applications_count: usize,
}

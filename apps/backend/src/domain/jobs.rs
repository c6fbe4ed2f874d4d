use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Contract type of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

/// Seniority asked for by a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

/// Job posting on the jobs board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub professional_area_id: Option<i64>,
    pub location: Option<String>,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    pub salary_range: Option<String>,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub application_deadline: Option<OffsetDateTime>,
    pub is_active: bool,
    pub published_by: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub professional_area_id: Option<i64>,
    #[serde(default)]
    pub location: Option<String>,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub salary_range: Option<String>,
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub application_deadline: Option<OffsetDateTime>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub published_by: i64,
}

fn default_active() -> bool {
    true
}

/// Listing filter for job postings. `None` fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub professional_area_id: Option<i64>,
    pub is_active: Option<bool>,
}

/// Job plus its application count, for the admin listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobWithStats {
    #[serde(flatten)]
    pub job: Job,
    pub applications_count: usize,
}

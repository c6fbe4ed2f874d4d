use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Professional area used to categorize jobs and candidate profiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalArea {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfessionalArea {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

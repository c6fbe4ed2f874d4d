use serde::Serialize;
use time::OffsetDateTime;

/// Kind of activity surfaced in the dashboard feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    User,
    Order,
    Refund,
    Message,
}

/// Recent-activity feed entry. The message may carry inline HTML markup
/// (the original dashboard renders it as-is) and timeAgo is a display string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    pub time_ago: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

use serde::Serialize;
use time::OffsetDateTime;

/// Catalog product. Price is a pre-formatted display string (e.g. "$159.99"),
/// as the dashboard renders it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub product_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub category: String,
    pub image_url: Option<String>,
    pub sales: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

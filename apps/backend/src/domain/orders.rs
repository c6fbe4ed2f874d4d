use serde::Serialize;
use time::OffsetDateTime;

/// Customer summary embedded in an order for dashboard display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub avatar_url: String,
}

/// Store order. Status, total and date are display strings
/// (e.g. "Entregado", "$124.00", "24 May, 2023").
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub user_id: i64,
    pub status: String,
    pub total: String,
    pub date: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub customer: Customer,
}

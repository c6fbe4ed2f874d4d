use serde::Serialize;

/// Headline figures for the dashboard landing page.
///
/// Totals and revenue are pre-formatted display strings; the change fields
/// are percentage deltas against the previous period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub users_total: String,
    pub users_change: f64,
    pub orders_total: String,
    pub orders_change: f64,
    pub revenue: String,
    pub revenue_change: f64,
    pub products_total: String,
    pub products_change: f64,
}

/// Aggregates for the jobs-board admin screen, computed from live data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSystemStats {
    pub total_jobs: usize,
    pub jobs_this_month: usize,
    pub total_applications: usize,
    pub applications_this_week: usize,
    pub active_profiles: usize,
    pub profiles_available: usize,
    /// Accepted applications over total, one decimal, e.g. "35.7".
    pub success_rate: String,
}

/// Per-entity record counts, reported by the health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCounts {
    pub users: usize,
    pub products: usize,
    pub orders: usize,
    pub activities: usize,
    pub professional_areas: usize,
    pub user_profiles: usize,
    pub jobs: usize,
    pub job_applications: usize,
}

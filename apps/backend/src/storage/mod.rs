//! Storage layer: the repository interface and its in-memory implementation.
//!
//! There is no database behind this API. `MemStorage` simulates one with
//! per-entity maps; everything is lost on process exit. Handlers depend on
//! the `Storage` trait so tests can start from an empty or seeded store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    Activity, ApplicationReview, DashboardStats, Job, JobApplication, JobApplicationWithDetails,
    JobFilter, JobSystemStats, JobWithStats, NewJob, NewJobApplication, NewProfessionalArea,
    NewUser, NewUserProfile, Order, Product, ProfessionalArea, ProfileFilter, RecordCounts, User,
    UserProfile, UserProfileWithStats,
};
use crate::errors::DomainError;

pub mod mem;
mod seed;

pub use mem::MemStorage;

/// Shared handle to the process-wide storage.
pub type SharedStorage = Arc<dyn Storage>;

/// Repository interface for everything the admin API serves.
///
/// Read operations never fail on an empty store; mutations return domain
/// errors for missing records and semantic conflicts.
#[async_trait]
pub trait Storage: Send + Sync {
    // User operations
    async fn user(&self, id: i64) -> Result<Option<User>, DomainError>;
    async fn user_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn create_user(&self, new: NewUser) -> Result<User, DomainError>;
    async fn users(&self) -> Result<Vec<User>, DomainError>;

    // Product operations
    async fn products(&self) -> Result<Vec<Product>, DomainError>;
    async fn top_selling_products(&self) -> Result<Vec<Product>, DomainError>;

    // Order operations
    async fn orders(&self) -> Result<Vec<Order>, DomainError>;
    async fn recent_orders(&self) -> Result<Vec<Order>, DomainError>;

    // Activity operations
    async fn recent_activities(&self) -> Result<Vec<Activity>, DomainError>;

    // Dashboard stats
    async fn dashboard_stats(&self) -> Result<DashboardStats, DomainError>;

    // Professional areas
    async fn professional_areas(&self) -> Result<Vec<ProfessionalArea>, DomainError>;
    async fn create_professional_area(
        &self,
        new: NewProfessionalArea,
    ) -> Result<ProfessionalArea, DomainError>;

    // Jobs
    async fn jobs(&self, filter: JobFilter) -> Result<Vec<Job>, DomainError>;
    async fn create_job(&self, new: NewJob) -> Result<Job, DomainError>;
    async fn jobs_with_stats(&self) -> Result<Vec<JobWithStats>, DomainError>;
    async fn toggle_job_status(&self, id: i64) -> Result<Job, DomainError>;
    async fn delete_job(&self, id: i64) -> Result<(), DomainError>;

    // User profiles
    async fn user_profiles(&self, filter: ProfileFilter) -> Result<Vec<UserProfile>, DomainError>;
    async fn create_user_profile(&self, new: NewUserProfile) -> Result<UserProfile, DomainError>;
    async fn user_profiles_with_stats(&self) -> Result<Vec<UserProfileWithStats>, DomainError>;

    // Job applications
    async fn job_applications(&self) -> Result<Vec<JobApplication>, DomainError>;
    async fn create_job_application(
        &self,
        new: NewJobApplication,
    ) -> Result<JobApplication, DomainError>;
    async fn job_applications_with_details(
        &self,
    ) -> Result<Vec<JobApplicationWithDetails>, DomainError>;
    async fn review_job_application(
        &self,
        id: i64,
        review: ApplicationReview,
    ) -> Result<JobApplication, DomainError>;

    // Aggregates
    async fn job_system_stats(&self) -> Result<JobSystemStats, DomainError>;
    async fn record_counts(&self) -> Result<RecordCounts, DomainError>;

    /// Monotone counter bumped on every mutation; feeds ETag revalidation
    /// on admin listings.
    async fn revision(&self) -> u64;
}

//! Domain records served by the admin API.
//!
//! These are plain data records; the storage layer owns id assignment and
//! timestamps. Wire format is camelCase JSON with RFC 3339 timestamps.

pub mod activities;
pub mod applications;
pub mod areas;
pub mod jobs;
pub mod orders;
pub mod products;
pub mod profiles;
pub mod stats;
pub mod users;
pub mod validate;

pub use activities::{Activity, ActivityKind};
pub use applications::{
    ApplicationReview, ApplicationStatus, JobApplication, JobApplicationWithDetails,
    NewJobApplication,
};
pub use areas::{NewProfessionalArea, ProfessionalArea};
pub use jobs::{ExperienceLevel, Job, JobFilter, JobType, JobWithStats, NewJob};
pub use orders::{Customer, Order};
pub use products::Product;
pub use profiles::{NewUserProfile, ProfileFilter, UserProfile, UserProfileWithStats};
pub use stats::{DashboardStats, JobSystemStats, RecordCounts};
pub use users::{NewUser, Role, User};

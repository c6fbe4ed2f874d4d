//! In-memory storage implementation.
//!
//! Per-entity `BTreeMap`s behind a single process-wide `RwLock`, with
//! per-entity auto-increment counters. This is a mock database: no
//! transactions, no persistence, no referential integrity beyond the one
//! manual cascade in `delete_job`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use time::{Duration, OffsetDateTime};

use crate::domain::{
    Activity, ApplicationReview, DashboardStats, Job, JobApplication, JobApplicationWithDetails,
    JobFilter, JobSystemStats, JobWithStats, NewJob, NewJobApplication, NewProfessionalArea,
    NewUser, NewUserProfile, Order, Product, ProfessionalArea, ProfileFilter, RecordCounts, User,
    UserProfile, UserProfileWithStats,
};
use crate::errors::domain::{ConflictKind, NotFoundKind};
use crate::errors::DomainError;

use super::{seed, Storage};

/// Dashboard landing page shows the newest four orders/activities.
const RECENT_LIMIT: usize = 4;
/// And the three best-selling products.
const TOP_SELLING_LIMIT: usize = 3;

/// Next-id counters, one per entity map.
///
/// Counters are seeded past the demo data so created records never collide
/// with seeded ids, and ids are never reused after a delete.
#[derive(Debug, Clone)]
pub(super) struct Counters {
    pub(super) users: i64,
    pub(super) products: i64,
    pub(super) orders: i64,
    pub(super) activities: i64,
    pub(super) areas: i64,
    pub(super) profiles: i64,
    pub(super) jobs: i64,
    pub(super) applications: i64,
}

impl Default for Counters {
    fn default() -> Self {
        Self {
            users: 1,
            products: 1,
            orders: 1,
            activities: 1,
            areas: 1,
            profiles: 1,
            jobs: 1,
            applications: 1,
        }
    }
}

fn next_id(slot: &mut i64) -> i64 {
    let id = *slot;
    *slot += 1;
    id
}

#[derive(Default)]
pub(super) struct Tables {
    pub(super) users: BTreeMap<i64, User>,
    pub(super) products: BTreeMap<i64, Product>,
    pub(super) orders: BTreeMap<i64, Order>,
    pub(super) activities: BTreeMap<i64, Activity>,
    pub(super) areas: BTreeMap<i64, ProfessionalArea>,
    pub(super) profiles: BTreeMap<i64, UserProfile>,
    pub(super) jobs: BTreeMap<i64, Job>,
    pub(super) applications: BTreeMap<i64, JobApplication>,
    pub(super) counters: Counters,
    pub(super) revision: u64,
}

impl Tables {
    fn bump(&mut self) {
        self.revision += 1;
    }

    fn applications_for_job(&self, job_id: i64) -> usize {
        self.applications
            .values()
            .filter(|a| a.job_id == Some(job_id))
            .count()
    }

    fn applications_for_profile(&self, profile_id: i64) -> usize {
        self.applications
            .values()
            .filter(|a| a.user_profile_id == profile_id)
            .count()
    }
}

/// Map-backed storage standing in for a database.
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    /// Empty store; used by most tests.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Store pre-populated with the demo dataset; used by `main` and the
    /// dashboard tests.
    pub fn with_demo_data() -> Self {
        let mut tables = Tables::default();
        seed::populate(&mut tables);
        Self {
            tables: RwLock::new(tables),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn sort_desc_by<T, K: Ord>(items: &mut [T], key: impl Fn(&T) -> K) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

#[async_trait]
impl Storage for MemStorage {
    async fn user(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.tables.read().users.get(&id).cloned())
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .tables
            .read()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, new: NewUser) -> Result<User, DomainError> {
        let mut tables = self.tables.write();
        if tables.users.values().any(|u| u.username == new.username) {
            return Err(DomainError::conflict(
                ConflictKind::UniqueUsername,
                format!("username '{}' is already taken", new.username),
            ));
        }

        let id = next_id(&mut tables.counters.users);
        let user = User {
            id,
            username: new.username,
            password: new.password,
            email: new.email,
            role: new.role,
            created_at: OffsetDateTime::now_utc(),
        };
        tables.users.insert(id, user.clone());
        tables.bump();
        Ok(user)
    }

    async fn users(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.tables.read().users.values().cloned().collect())
    }

    async fn products(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.tables.read().products.values().cloned().collect())
    }

    async fn top_selling_products(&self) -> Result<Vec<Product>, DomainError> {
        let mut products: Vec<Product> = self.tables.read().products.values().cloned().collect();
        sort_desc_by(&mut products, |p| (p.sales, -p.id));
        products.truncate(TOP_SELLING_LIMIT);
        Ok(products)
    }

    async fn orders(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.tables.read().orders.values().cloned().collect())
    }

    async fn recent_orders(&self) -> Result<Vec<Order>, DomainError> {
        let mut orders: Vec<Order> = self.tables.read().orders.values().cloned().collect();
        sort_desc_by(&mut orders, |o| (o.created_at, o.id));
        orders.truncate(RECENT_LIMIT);
        Ok(orders)
    }

    async fn recent_activities(&self) -> Result<Vec<Activity>, DomainError> {
        let mut activities: Vec<Activity> =
            self.tables.read().activities.values().cloned().collect();
        sort_desc_by(&mut activities, |a| (a.created_at, a.id));
        activities.truncate(RECENT_LIMIT);
        Ok(activities)
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, DomainError> {
        // Fixed demo figures, matching the original dashboard.
        Ok(DashboardStats {
            users_total: "5,248".to_string(),
            users_change: 12.3,
            orders_total: "1,473".to_string(),
            orders_change: 8.2,
            revenue: "$48,592".to_string(),
            revenue_change: -3.1,
            products_total: "892".to_string(),
            products_change: 4.7,
        })
    }

    async fn professional_areas(&self) -> Result<Vec<ProfessionalArea>, DomainError> {
        Ok(self.tables.read().areas.values().cloned().collect())
    }

    async fn create_professional_area(
        &self,
        new: NewProfessionalArea,
    ) -> Result<ProfessionalArea, DomainError> {
        let mut tables = self.tables.write();
        let id = next_id(&mut tables.counters.areas);
        let area = ProfessionalArea {
            id,
            name: new.name,
            description: new.description,
            created_at: OffsetDateTime::now_utc(),
        };
        tables.areas.insert(id, area.clone());
        tables.bump();
        Ok(area)
    }

    async fn jobs(&self, filter: JobFilter) -> Result<Vec<Job>, DomainError> {
        let mut jobs: Vec<Job> = self
            .tables
            .read()
            .jobs
            .values()
            .filter(|j| {
                filter
                    .professional_area_id
                    .is_none_or(|area| j.professional_area_id == Some(area))
                    && filter.is_active.is_none_or(|active| j.is_active == active)
            })
            .cloned()
            .collect();
        sort_desc_by(&mut jobs, |j| (j.created_at, j.id));
        Ok(jobs)
    }

    async fn create_job(&self, new: NewJob) -> Result<Job, DomainError> {
        let mut tables = self.tables.write();
        let now = OffsetDateTime::now_utc();
        let id = next_id(&mut tables.counters.jobs);
        let job = Job {
            id,
            title: new.title,
            company: new.company,
            description: new.description,
            requirements: new.requirements,
            benefits: new.benefits,
            professional_area_id: new.professional_area_id,
            location: new.location,
            job_type: new.job_type,
            experience_level: new.experience_level,
            salary_range: new.salary_range,
            contact_email: new.contact_email,
            contact_phone: new.contact_phone,
            application_deadline: new.application_deadline,
            is_active: new.is_active,
            published_by: new.published_by,
            created_at: now,
            updated_at: now,
        };
        tables.jobs.insert(id, job.clone());
        tables.bump();
        Ok(job)
    }

    async fn jobs_with_stats(&self) -> Result<Vec<JobWithStats>, DomainError> {
        let tables = self.tables.read();
        let mut jobs: Vec<JobWithStats> = tables
            .jobs
            .values()
            .map(|job| JobWithStats {
                applications_count: tables.applications_for_job(job.id),
                job: job.clone(),
            })
            .collect();
        sort_desc_by(&mut jobs, |j| (j.job.created_at, j.job.id));
        Ok(jobs)
    }

    async fn toggle_job_status(&self, id: i64) -> Result<Job, DomainError> {
        let mut tables = self.tables.write();
        let job = tables
            .jobs
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Job, format!("Job {id} not found")))?;
        job.is_active = !job.is_active;
        job.updated_at = OffsetDateTime::now_utc();
        let job = job.clone();
        tables.bump();
        Ok(job)
    }

    async fn delete_job(&self, id: i64) -> Result<(), DomainError> {
        let mut tables = self.tables.write();
        if tables.jobs.remove(&id).is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Job,
                format!("Job {id} not found"),
            ));
        }
        // Manual cascade: drop the posting's applications. Spontaneous
        // applications (job_id = None) are untouched.
        tables.applications.retain(|_, a| a.job_id != Some(id));
        tables.bump();
        Ok(())
    }

    async fn user_profiles(&self, filter: ProfileFilter) -> Result<Vec<UserProfile>, DomainError> {
        let mut profiles: Vec<UserProfile> = self
            .tables
            .read()
            .profiles
            .values()
            .filter(|p| {
                filter
                    .professional_area_id
                    .is_none_or(|area| p.professional_area_id == Some(area))
            })
            .cloned()
            .collect();
        sort_desc_by(&mut profiles, |p| (p.created_at, p.id));
        Ok(profiles)
    }

    async fn create_user_profile(&self, new: NewUserProfile) -> Result<UserProfile, DomainError> {
        let mut tables = self.tables.write();
        let now = OffsetDateTime::now_utc();
        let id = next_id(&mut tables.counters.profiles);
        let profile = UserProfile {
            id,
            user_id: new.user_id,
            full_name: new.full_name,
            email: new.email,
            phone: new.phone,
            professional_area_id: new.professional_area_id,
            experience: new.experience,
            skills: new.skills,
            education: new.education,
            summary: new.summary,
            expected_salary: new.expected_salary,
            available_for_work: new.available_for_work,
            created_at: now,
            updated_at: now,
        };
        tables.profiles.insert(id, profile.clone());
        tables.bump();
        Ok(profile)
    }

    async fn user_profiles_with_stats(&self) -> Result<Vec<UserProfileWithStats>, DomainError> {
        let tables = self.tables.read();
        let mut profiles: Vec<UserProfileWithStats> = tables
            .profiles
            .values()
            .map(|profile| UserProfileWithStats {
                applications_count: tables.applications_for_profile(profile.id),
                profile: profile.clone(),
            })
            .collect();
        sort_desc_by(&mut profiles, |p| (p.profile.created_at, p.profile.id));
        Ok(profiles)
    }

    async fn job_applications(&self) -> Result<Vec<JobApplication>, DomainError> {
        Ok(self.tables.read().applications.values().cloned().collect())
    }

    async fn create_job_application(
        &self,
        new: NewJobApplication,
    ) -> Result<JobApplication, DomainError> {
        let mut tables = self.tables.write();
        let now = OffsetDateTime::now_utc();
        let id = next_id(&mut tables.counters.applications);
        let application = JobApplication {
            id,
            job_id: new.job_id,
            user_profile_id: new.user_profile_id,
            cover_letter: new.cover_letter,
            status: new.status,
            reviewed_by: None,
            reviewed_at: None,
            notes: None,
            applied_at: now,
            created_at: now,
            updated_at: now,
        };
        tables.applications.insert(id, application.clone());
        tables.bump();
        Ok(application)
    }

    async fn job_applications_with_details(
        &self,
    ) -> Result<Vec<JobApplicationWithDetails>, DomainError> {
        let tables = self.tables.read();
        let mut applications: Vec<JobApplicationWithDetails> = tables
            .applications
            .values()
            .map(|application| JobApplicationWithDetails {
                job: application.job_id.and_then(|id| tables.jobs.get(&id)).cloned(),
                profile: tables.profiles.get(&application.user_profile_id).cloned(),
                application: application.clone(),
            })
            .collect();
        sort_desc_by(&mut applications, |a| {
            (a.application.applied_at, a.application.id)
        });
        Ok(applications)
    }

    async fn review_job_application(
        &self,
        id: i64,
        review: ApplicationReview,
    ) -> Result<JobApplication, DomainError> {
        let mut tables = self.tables.write();
        let application = tables.applications.get_mut(&id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Application,
                format!("Job application {id} not found"),
            )
        })?;

        let now = OffsetDateTime::now_utc();
        application.status = review.status;
        application.notes = review.notes;
        application.reviewed_by = Some(review.reviewed_by);
        application.reviewed_at = Some(now);
        application.updated_at = now;

        let application = application.clone();
        tables.bump();
        Ok(application)
    }

    async fn job_system_stats(&self) -> Result<JobSystemStats, DomainError> {
        let tables = self.tables.read();
        let now = OffsetDateTime::now_utc();
        let month_ago = now - Duration::days(30);
        let week_ago = now - Duration::days(7);

        let total_jobs = tables.jobs.len();
        let jobs_this_month = tables
            .jobs
            .values()
            .filter(|j| j.created_at >= month_ago)
            .count();
        let total_applications = tables.applications.len();
        let applications_this_week = tables
            .applications
            .values()
            .filter(|a| a.applied_at >= week_ago)
            .count();
        let accepted = tables
            .applications
            .values()
            .filter(|a| a.status == crate::domain::ApplicationStatus::Accepted)
            .count();

        let success_rate = if total_applications == 0 {
            "0.0".to_string()
        } else {
            format!("{:.1}", accepted as f64 * 100.0 / total_applications as f64)
        };

        Ok(JobSystemStats {
            total_jobs,
            jobs_this_month,
            total_applications,
            applications_this_week,
            active_profiles: tables.profiles.len(),
            profiles_available: tables
                .profiles
                .values()
                .filter(|p| p.available_for_work)
                .count(),
            success_rate,
        })
    }

    async fn record_counts(&self) -> Result<RecordCounts, DomainError> {
        let tables = self.tables.read();
        Ok(RecordCounts {
            users: tables.users.len(),
            products: tables.products.len(),
            orders: tables.orders.len(),
            activities: tables.activities.len(),
            professional_areas: tables.areas.len(),
            user_profiles: tables.profiles.len(),
            jobs: tables.jobs.len(),
            job_applications: tables.applications.len(),
        })
    }

    async fn revision(&self) -> u64 {
        self.tables.read().revision
    }
}

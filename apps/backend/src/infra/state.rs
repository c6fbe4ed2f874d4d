use std::sync::Arc;

use crate::config::http::SeedProfile;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::storage::MemStorage;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    seed: SeedProfile,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            seed: SeedProfile::Empty,
        }
    }

    pub fn with_seed(mut self, seed: SeedProfile) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let storage = match self.seed {
            SeedProfile::Demo => MemStorage::with_demo_data(),
            SeedProfile::Empty => MemStorage::new(),
        };
        Ok(AppState::new(Arc::new(storage)))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobFilter;

    #[tokio::test]
    async fn default_build_is_an_empty_store() {
        let state = build_state().build().unwrap();
        let jobs = state.storage().jobs(JobFilter::default()).await.unwrap();
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn demo_build_is_seeded() {
        let state = build_state().with_seed(SeedProfile::Demo).build().unwrap();
        let jobs = state.storage().jobs(JobFilter::default()).await.unwrap();
        assert_eq!(jobs.len(), 3);
    }
}

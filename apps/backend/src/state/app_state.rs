use crate::storage::{SharedStorage, Storage};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    storage: SharedStorage,
}

impl AppState {
    /// Create a new AppState over the given storage
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Create a test AppState over an empty in-memory store
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(std::sync::Arc::new(crate::storage::MemStorage::new()))
    }

    /// Create a test AppState over the seeded demo store
    #[cfg(test)]
    pub fn for_tests_with_demo_data() -> Self {
        Self::new(std::sync::Arc::new(
            crate::storage::MemStorage::with_demo_data(),
        ))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

//! Infrastructure concerns: storage backend, repositories, seeding.

pub mod repositories;
mod store;

pub use repositories::{ProjectRepository, ProjectStore, SeededDirectory, UserDirectory};
pub use store::{read_json, write_json, JsonFileStore, MemoryStore, StorageBackend};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockProjectRepository, MockUserDirectory};
#[cfg(any(test, feature = "test-utils"))]
pub use store::MockStorageBackend;

use crate::config::{STORAGE_KEY_PROJECTS, STORAGE_KEY_USERS};
use crate::domain::{seed_users, Project};
use crate::errors::AppResult;

/// Seed the store on first use, mirroring the original bootstrap: the user
/// directory and an empty project collection are written only when their
/// keys are absent.
pub fn initialize(store: &dyn StorageBackend) -> AppResult<()> {
    if store.read(STORAGE_KEY_USERS)?.is_none() {
        write_json(store, STORAGE_KEY_USERS, &seed_users())?;
        tracing::info!("seeded user directory");
    }
    if store.read(STORAGE_KEY_PROJECTS)?.is_none() {
        write_json(store, STORAGE_KEY_PROJECTS, &Vec::<Project>::new())?;
    }
    Ok(())
}

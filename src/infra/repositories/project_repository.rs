//! Project repository: the system's only persistence layer for projects.

use std::sync::Arc;

use async_trait::async_trait;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::config::STORAGE_KEY_PROJECTS;
use crate::domain::Project;
use crate::errors::{AppError, AppResult};
use crate::infra::store::{read_json, write_json, StorageBackend};

/// Project repository trait for dependency injection.
///
/// No transactional guarantees: single-user, single-process assumption.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects; callers filter by role-specific predicates
    async fn list(&self) -> AppResult<Vec<Project>>;

    /// Find a project by id
    async fn get(&self, id: &str) -> AppResult<Option<Project>>;

    /// Insert if the id is unknown, else replace in place. `updated_at` is
    /// the caller's responsibility, never refreshed here.
    async fn upsert(&self, project: &Project) -> AppResult<()>;
}

/// Concrete repository over the JSON key-value store.
pub struct ProjectStore {
    store: Arc<dyn StorageBackend>,
}

impl ProjectStore {
    pub fn new(store: Arc<dyn StorageBackend>) -> Self {
        Self { store }
    }

    fn load(&self) -> AppResult<Vec<Project>> {
        Ok(read_json(self.store.as_ref(), STORAGE_KEY_PROJECTS)?.unwrap_or_default())
    }

    /// Structural validation at the repository boundary. Payload semantics
    /// (e.g. grand-total balance) are the producing stage's contract and are
    /// not re-validated here.
    fn validate(project: &Project) -> AppResult<()> {
        if project.id.trim().is_empty() {
            return Err(AppError::validation("Project id must not be empty"));
        }
        if project.name.trim().is_empty() {
            return Err(AppError::validation("Project name must not be empty"));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for ProjectStore {
    async fn list(&self) -> AppResult<Vec<Project>> {
        self.load()
    }

    async fn get(&self, id: &str) -> AppResult<Option<Project>> {
        Ok(self.load()?.into_iter().find(|p| p.id == id))
    }

    async fn upsert(&self, project: &Project) -> AppResult<()> {
        Self::validate(project)?;

        let mut projects = self.load()?;
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project.clone(),
            None => projects.push(project.clone()),
        }
        write_json(self.store.as_ref(), STORAGE_KEY_PROJECTS, &projects)
    }
}

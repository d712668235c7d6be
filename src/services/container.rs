//! Service container, centralized service access for dependency injection.
//!
//! Consumers depend on the `ServiceContainer` trait instead of concrete
//! services, so a dashboard or a CLI front end can be wired against mocks
//! in tests and against the file-backed stack in production.

use std::sync::Arc;

use super::{DashboardService, SessionService, WorkflowService};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{
    initialize, JsonFileStore, MemoryStore, ProjectStore, SeededDirectory, StorageBackend,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get the session service
    fn session(&self) -> Arc<dyn SessionService>;

    /// Get the project workflow service
    fn workflow(&self) -> Arc<dyn WorkflowService>;

    /// Get the dashboard service
    fn dashboards(&self) -> Arc<dyn DashboardService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    session_service: Arc<dyn SessionService>,
    workflow_service: Arc<dyn WorkflowService>,
    dashboard_service: Arc<dyn DashboardService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        session_service: Arc<dyn SessionService>,
        workflow_service: Arc<dyn WorkflowService>,
        dashboard_service: Arc<dyn DashboardService>,
    ) -> Self {
        Self {
            session_service,
            workflow_service,
            dashboard_service,
        }
    }

    /// Build the full stack on top of the file-backed store named by `config`,
    /// seeding demo users and the empty project list on first run.
    pub fn from_config(config: Config) -> AppResult<Self> {
        let store: Arc<dyn StorageBackend> = Arc::new(JsonFileStore::open(&config.data_dir)?);
        initialize(store.as_ref())?;
        Ok(Self::over_store(store, config))
    }

    /// Build the full stack over a throwaway in-memory store.
    pub fn in_memory(config: Config) -> AppResult<Self> {
        let store: Arc<dyn StorageBackend> = Arc::new(MemoryStore::new());
        initialize(store.as_ref())?;
        Ok(Self::over_store(store, config))
    }

    fn over_store(store: Arc<dyn StorageBackend>, config: Config) -> Self {
        use super::{Dashboards, Engine, Session};

        let directory = Arc::new(SeededDirectory::new(store.clone()));
        let repo = Arc::new(ProjectStore::new(store.clone()));

        let session_service = Arc::new(Session::new(directory, store));
        let workflow_service = Arc::new(Engine::with_canned_stages(repo.clone(), config));
        let dashboard_service = Arc::new(Dashboards::new(repo));

        Self {
            session_service,
            workflow_service,
            dashboard_service,
        }
    }
}

impl ServiceContainer for Services {
    fn session(&self) -> Arc<dyn SessionService> {
        self.session_service.clone()
    }

    fn workflow(&self) -> Arc<dyn WorkflowService> {
        self.workflow_service.clone()
    }

    fn dashboards(&self) -> Arc<dyn DashboardService> {
        self.dashboard_service.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[tokio::test]
    async fn in_memory_container_serves_seeded_session() {
        let services = Services::in_memory(Config::default()).unwrap();

        let user = services
            .session()
            .login("admin@constructpro.com", "admin123")
            .await
            .unwrap();
        assert_eq!(user.id, "erp-1");

        let projects = services.dashboards().projects_linked_to(&user).await.unwrap();
        assert!(projects.is_empty());
    }
}

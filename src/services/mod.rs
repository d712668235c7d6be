//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod container;
mod dashboard_service;
mod session_service;
mod workflow_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use dashboard_service::{
    ArchitectStats, ClientStats, ContractorStats, DashboardService, Dashboards, PortfolioStats,
    SalesStats,
};
pub use session_service::{Session, SessionService};
pub use workflow_service::{Engine, WorkflowService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use dashboard_service::MockDashboardService;
#[cfg(any(test, feature = "test-utils"))]
pub use session_service::MockSessionService;
#[cfg(any(test, feature = "test-utils"))]
pub use workflow_service::MockWorkflowService;

//! ConstructPro - a role-based construction project workflow engine
//!
//! This crate models the handoff pipeline of a residential construction
//! portal: an architect submits plans, an automated takeoff analysis runs,
//! a contractor prices the work, and a client approval triggers the ERP
//! export that sales and project-management dashboards read from.
//!
//! # Architecture Layers
//!
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities (users, projects, stage payloads)
//! - **generators**: Pluggable pipeline stages producing stage payloads
//! - **services**: Application use cases (session, workflow, dashboards)
//! - **infra**: Infrastructure concerns (key-value storage, repositories)
//! - **export**: Printable documents derived from project payloads
//! - **errors**: Centralized error handling

pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod generators;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Project, ProjectStatus, Role, User};
pub use errors::{AppError, AppResult};
pub use services::{ServiceContainer, Services};

/// Install the tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

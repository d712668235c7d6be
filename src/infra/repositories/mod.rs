//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over the key-value store, following
//! the Repository pattern for clean separation of concerns.

mod project_repository;
mod user_directory;

pub use project_repository::{ProjectRepository, ProjectStore};
pub use user_directory::{SeededDirectory, UserDirectory};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use project_repository::MockProjectRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_directory::MockUserDirectory;

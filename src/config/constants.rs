//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Storage layout
// =============================================================================

/// Storage key holding the seeded user directory
pub const STORAGE_KEY_USERS: &str = "users";

/// Storage key holding the project collection
pub const STORAGE_KEY_PROJECTS: &str = "projects";

/// Storage key holding the logged-in user, absent when logged out
pub const STORAGE_KEY_CURRENT_USER: &str = "current_user";

// =============================================================================
// Roles
// =============================================================================

/// Architect role: creates projects and owns the analysis stage
pub const ROLE_ARCHITECT: &str = "architect";

/// Contractor role: annotates costs and logistics
pub const ROLE_CONTRACTOR: &str = "contractor";

/// ERP admin role: views aggregated sales data
pub const ROLE_ERP_ADMIN: &str = "erp-admin";

/// Project manager role: monitors all projects
pub const ROLE_PROJECT_MANAGER: &str = "project-manager";

/// Client role: approves quotes
pub const ROLE_CLIENT: &str = "client";

// =============================================================================
// Workflow defaults
// =============================================================================

/// Demo client every new project is linked to
pub const DEFAULT_CLIENT_ID: &str = "client-1";

/// Currency attached to contractor estimates
pub const DEFAULT_CURRENCY: &str = "USD";

// =============================================================================
// Analysis simulation
// =============================================================================

/// Fractional progress checkpoints reported by the scripted analysis task
pub const ANALYSIS_PROGRESS_CHECKPOINTS: &[u8] = &[20, 40, 60, 80, 100];

/// Default delay between analysis progress checkpoints, in milliseconds
pub const DEFAULT_ANALYSIS_STEP_DELAY_MS: u64 = 500;

// =============================================================================
// Storage configuration
// =============================================================================

/// Default directory for the JSON key-value store
pub const DEFAULT_DATA_DIR: &str = "./data";

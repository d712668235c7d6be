//! User domain entity and the seeded demo directory.

use serde::{Deserialize, Serialize};

use crate::config::{
    ROLE_ARCHITECT, ROLE_CLIENT, ROLE_CONTRACTOR, ROLE_ERP_ADMIN, ROLE_PROJECT_MANAGER,
};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Architect,
    Contractor,
    ErpAdmin,
    ProjectManager,
    Client,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Architect => ROLE_ARCHITECT,
            Role::Contractor => ROLE_CONTRACTOR,
            Role::ErpAdmin => ROLE_ERP_ADMIN,
            Role::ProjectManager => ROLE_PROJECT_MANAGER,
            Role::Client => ROLE_CLIENT,
        }
    }

    /// Whether dashboards for this role list every project rather than a
    /// role-filtered subset. Clients are the ultimate stakeholders; admins
    /// and project managers monitor the whole portfolio.
    pub fn sees_all_projects(&self) -> bool {
        matches!(self, Role::Client | Role::ErpAdmin | Role::ProjectManager)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User identity record.
///
/// The directory is seeded once and immutable afterwards. Passwords are
/// plaintext demo credentials by design; this is a demo convenience, not a
/// security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    fn seed(
        id: &str,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
        company: &str,
        phone: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            role,
            company: Some(company.to_string()),
            phone: Some(phone.to_string()),
            avatar: Some("/placeholder.svg?height=40&width=40".to_string()),
        }
    }
}

/// The fixed demo account set the directory is seeded with.
pub fn seed_users() -> Vec<User> {
    vec![
        // Architects
        User::seed(
            "arch-1",
            "sarah.architect@designstudio.com",
            "architect123",
            "Sarah Chen",
            Role::Architect,
            "Design Studio Pro",
            "+1 (555) 123-4567",
        ),
        User::seed(
            "arch-2",
            "mike.urban@urbanarch.com",
            "architect123",
            "Mike Rodriguez",
            Role::Architect,
            "Urban Architects",
            "+1 (555) 234-5678",
        ),
        // Contractors
        User::seed(
            "cont-1",
            "john.builder@buildright.com",
            "contractor123",
            "John Builder",
            Role::Contractor,
            "BuildRight Construction",
            "+1 (555) 345-6789",
        ),
        User::seed(
            "cont-2",
            "lisa.construction@skyhigh.com",
            "contractor123",
            "Lisa Park",
            Role::Contractor,
            "SkyHigh Builders",
            "+1 (555) 456-7890",
        ),
        // Clients
        User::seed(
            "client-1",
            "david.developer@greenfield.com",
            "client123",
            "David Kim",
            Role::Client,
            "Greenfield Developers",
            "+1 (555) 567-8901",
        ),
        User::seed(
            "client-2",
            "maria.properties@metro.com",
            "client123",
            "Maria Garcia",
            Role::Client,
            "Metro Properties",
            "+1 (555) 678-9012",
        ),
        // ERP admin
        User::seed(
            "erp-1",
            "admin@constructpro.com",
            "admin123",
            "Robert Johnson",
            Role::ErpAdmin,
            "ConstructPro Systems",
            "+1 (555) 789-0123",
        ),
        // Project manager
        User::seed(
            "pm-1",
            "jennifer.pm@constructpro.com",
            "manager123",
            "Jennifer Wilson",
            Role::ProjectManager,
            "ConstructPro Systems",
            "+1 (555) 890-1234",
        ),
    ]
}

//! Dashboard service: per-role project queries and aggregate stats.
//!
//! Dashboards read through here, filter by role-relevant predicates and
//! render; every aggregate read tolerates absent payloads by defaulting
//! to zero.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::{Project, ProjectStatus, Role, User};
use crate::errors::AppResult;
use crate::infra::ProjectRepository;

/// Architect view: own projects only
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArchitectStats {
    pub total_projects: usize,
    pub in_review: usize,
    pub approved: usize,
    pub total_budget: f64,
}

/// Contractor view: review pipeline and quoted value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContractorStats {
    pub open_reviews: usize,
    pub quoted: usize,
    pub total_quoted_value: f64,
}

/// Client view: approvals awaiting action and committed value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClientStats {
    pub total_projects: usize,
    pub awaiting_approval: usize,
    pub approved_value: f64,
}

/// ERP admin view: aggregated sales data
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalesStats {
    pub total_sales: f64,
    pub approved_orders: usize,
    pub avg_order_value: f64,
    pub active_pos: usize,
}

/// Project-manager view: the whole portfolio
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortfolioStats {
    pub total_projects: usize,
    pub active_projects: usize,
    pub total_budget: f64,
    pub avg_progress: f64,
}

/// Dashboard service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Projects visible on this user's dashboard: architects see what they
    /// created, contractors see the review pipeline plus anything they
    /// already quoted, everyone else sees all projects.
    async fn projects_for_role(&self, user: &User) -> AppResult<Vec<Project>>;

    /// Projects linked to this user through its role's id field
    async fn projects_linked_to(&self, user: &User) -> AppResult<Vec<Project>>;

    async fn architect_stats(&self, architect_id: &str) -> AppResult<ArchitectStats>;

    async fn contractor_stats(&self) -> AppResult<ContractorStats>;

    async fn client_stats(&self) -> AppResult<ClientStats>;

    async fn sales_stats(&self) -> AppResult<SalesStats>;

    async fn portfolio_stats(&self) -> AppResult<PortfolioStats>;
}

/// Concrete dashboard service over the project repository.
pub struct Dashboards {
    repo: Arc<dyn ProjectRepository>,
}

impl Dashboards {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl DashboardService for Dashboards {
    async fn projects_for_role(&self, user: &User) -> AppResult<Vec<Project>> {
        let projects = self.repo.list().await?;
        let filtered = match user.role {
            Role::Architect => projects
                .into_iter()
                .filter(|p| p.created_by == user.id)
                .collect(),
            Role::Contractor => projects
                .into_iter()
                .filter(|p| {
                    p.status == ProjectStatus::ContractorReview || p.contractor_response.is_some()
                })
                .collect(),
            _ => projects,
        };
        Ok(filtered)
    }

    async fn projects_linked_to(&self, user: &User) -> AppResult<Vec<Project>> {
        let projects = self.repo.list().await?;
        let id = user.id.as_str();
        let filtered = match user.role {
            Role::Architect => projects
                .into_iter()
                .filter(|p| p.architect_id == id)
                .collect(),
            Role::Contractor => projects
                .into_iter()
                .filter(|p| p.contractor_id.as_deref() == Some(id))
                .collect(),
            Role::Client => projects.into_iter().filter(|p| p.client_id == id).collect(),
            Role::ProjectManager => projects
                .into_iter()
                .filter(|p| p.project_manager_id.as_deref() == Some(id))
                .collect(),
            Role::ErpAdmin => projects,
        };
        Ok(filtered)
    }

    async fn architect_stats(&self, architect_id: &str) -> AppResult<ArchitectStats> {
        let projects: Vec<Project> = self
            .repo
            .list()
            .await?
            .into_iter()
            .filter(|p| p.created_by == architect_id)
            .collect();

        Ok(ArchitectStats {
            total_projects: projects.len(),
            in_review: projects.iter().filter(|p| p.status.in_review()).count(),
            approved: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Approved)
                .count(),
            total_budget: projects.iter().filter_map(|p| p.budget).sum(),
        })
    }

    async fn contractor_stats(&self) -> AppResult<ContractorStats> {
        let projects = self.repo.list().await?;
        Ok(ContractorStats {
            open_reviews: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::ContractorReview)
                .count(),
            quoted: projects
                .iter()
                .filter(|p| p.contractor_response.is_some())
                .count(),
            total_quoted_value: projects.iter().map(|p| p.quoted_value()).sum(),
        })
    }

    async fn client_stats(&self) -> AppResult<ClientStats> {
        let projects = self.repo.list().await?;
        Ok(ClientStats {
            total_projects: projects.len(),
            awaiting_approval: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::ClientReview)
                .count(),
            approved_value: projects.iter().map(|p| p.approved_value()).sum(),
        })
    }

    async fn sales_stats(&self) -> AppResult<SalesStats> {
        let projects = self.repo.list().await?;
        let approved_orders = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Approved)
            .count();
        let total_sales: f64 = projects.iter().map(|p| p.approved_value()).sum();
        let avg_order_value = if approved_orders > 0 {
            total_sales / approved_orders as f64
        } else {
            0.0
        };

        Ok(SalesStats {
            total_sales,
            approved_orders,
            avg_order_value,
            active_pos: approved_orders,
        })
    }

    async fn portfolio_stats(&self) -> AppResult<PortfolioStats> {
        let projects = self.repo.list().await?;
        let avg_progress = if projects.is_empty() {
            0.0
        } else {
            projects
                .iter()
                .map(|p| p.progress.unwrap_or(0.0))
                .sum::<f64>()
                / projects.len() as f64
        };

        Ok(PortfolioStats {
            total_projects: projects.len(),
            active_projects: projects.iter().filter(|p| p.status.is_active()).count(),
            total_budget: projects.iter().filter_map(|p| p.budget).sum(),
            avg_progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{seed_users, AiAnalysis, FileRef, NewProject};
    use crate::generators::default_quote;
    use crate::infra::MockProjectRepository;

    fn user(id: &str) -> User {
        seed_users().into_iter().find(|u| u.id == id).unwrap()
    }

    fn analysis_stub() -> AiAnalysis {
        AiAnalysis {
            phase: String::new(),
            summary: String::new(),
            overall_confidence: 0.88,
            project: String::new(),
            rooms: Vec::new(),
            total_items: 0,
            message: String::new(),
        }
    }

    fn project_by(architect_id: &str, name: &str) -> Project {
        let input = NewProject {
            name: name.to_string(),
            description: "d".to_string(),
            location: "l".to_string(),
            budget: Some(100_000.0),
            files: vec![FileRef {
                name: "a.pdf".to_string(),
                size: 1,
                kind: "application/pdf".to_string(),
            }],
        };
        Project::create(input, analysis_stub(), &user(architect_id))
    }

    fn repo_with(projects: Vec<Project>) -> MockProjectRepository {
        let mut repo = MockProjectRepository::new();
        repo.expect_list().returning(move || Ok(projects.clone()));
        repo
    }

    #[tokio::test]
    async fn architect_list_contains_only_own_projects() {
        let projects = vec![
            project_by("arch-1", "Mine"),
            project_by("arch-2", "Someone else's"),
        ];
        let dashboards = Dashboards::new(Arc::new(repo_with(projects)));

        let mine = dashboards.projects_for_role(&user("arch-1")).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert!(mine.iter().all(|p| p.created_by == "arch-1"));
    }

    #[tokio::test]
    async fn contractor_list_keeps_quoted_projects_after_handoff() {
        let pending = project_by("arch-1", "Pending");
        let mut quoted = project_by("arch-1", "Quoted");
        quoted.attach_quote(default_quote());
        let mut done = project_by("arch-1", "Done");
        done.status = ProjectStatus::Approved; // never quoted, not visible

        let dashboards = Dashboards::new(Arc::new(repo_with(vec![pending, quoted, done])));
        let visible = dashboards
            .projects_for_role(&user("cont-1"))
            .await
            .unwrap();
        assert_eq!(visible.len(), 2);
    }

    #[tokio::test]
    async fn client_sees_everything() {
        let projects = vec![project_by("arch-1", "A"), project_by("arch-2", "B")];
        let dashboards = Dashboards::new(Arc::new(repo_with(projects)));
        let visible = dashboards
            .projects_for_role(&user("client-1"))
            .await
            .unwrap();
        assert_eq!(visible.len(), 2);
    }

    #[tokio::test]
    async fn aggregates_tolerate_missing_payloads() {
        // Fresh projects carry no quote and no ERP export
        let projects = vec![project_by("arch-1", "A"), project_by("arch-1", "B")];
        let dashboards = Dashboards::new(Arc::new(repo_with(projects)));

        let sales = dashboards.sales_stats().await.unwrap();
        assert_eq!(sales.total_sales, 0.0);
        assert_eq!(sales.avg_order_value, 0.0);

        let contractor = dashboards.contractor_stats().await.unwrap();
        assert_eq!(contractor.total_quoted_value, 0.0);
        assert_eq!(contractor.open_reviews, 2);

        let portfolio = dashboards.portfolio_stats().await.unwrap();
        assert_eq!(portfolio.avg_progress, 0.0);
        assert_eq!(portfolio.total_budget, 200_000.0);
    }

    #[tokio::test]
    async fn architect_stats_count_review_and_budget() {
        let a = project_by("arch-1", "A");
        let mut b = project_by("arch-1", "B");
        b.status = ProjectStatus::Approved;
        let other = project_by("arch-2", "C");

        let dashboards = Dashboards::new(Arc::new(repo_with(vec![a, b, other])));
        let stats = dashboards.architect_stats("arch-1").await.unwrap();
        assert_eq!(stats.total_projects, 2);
        assert_eq!(stats.in_review, 1);
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.total_budget, 200_000.0);
    }
}

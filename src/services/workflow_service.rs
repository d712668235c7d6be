//! Workflow service: the project status state machine.
//!
//! Implements the three pipeline transitions: create (architect), quote
//! submission (contractor), approval (client). Transitions are idempotent
//! writes keyed by project id: re-invoking one overwrites the same fields,
//! so replays are safe, and there is no history of prior payload versions.

use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::config::Config;
use crate::domain::{
    AiAnalysis, ContractorResponse, ErpResponse, NewProject, Project, ProjectStatus, User,
};
use crate::errors::{format_validation_errors, AppError, AppResult, OptionExt};
use crate::generators::{AnalysisTask, CannedErp, Generator, GeneratorContext};
use crate::infra::ProjectRepository;

/// Workflow service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait WorkflowService: Send + Sync {
    /// Start the scripted analysis stage for a project being created.
    /// The task reports fractional progress and resolves to the payload the
    /// architect reviews and edits before confirming creation.
    fn analyze(&self, input: &NewProject) -> AnalysisTask;

    /// Create a project from validated input plus the reviewed analysis
    /// payload. Fails with a validation error, writing nothing, when no
    /// file reference is supplied.
    async fn create_project(
        &self,
        architect: &User,
        input: NewProject,
        analysis: AiAnalysis,
    ) -> AppResult<Project>;

    /// Attach a contractor's edited quote and advance to client review.
    /// Edited values are trusted as entered; nothing is recomputed.
    async fn submit_quote(
        &self,
        project_id: &str,
        quote: ContractorResponse,
    ) -> AppResult<Project>;

    /// Approve a project as the client: generates the ERP export, attaches
    /// it and advances to approved.
    async fn approve(&self, project_id: &str) -> AppResult<Project>;
}

/// Concrete workflow engine over the project repository and the pluggable
/// generator stages.
pub struct Engine {
    repo: Arc<dyn ProjectRepository>,
    analysis: Arc<dyn Generator<AiAnalysis>>,
    erp: Arc<dyn Generator<ErpResponse>>,
    config: Config,
}

impl Engine {
    pub fn new(
        repo: Arc<dyn ProjectRepository>,
        analysis: Arc<dyn Generator<AiAnalysis>>,
        erp: Arc<dyn Generator<ErpResponse>>,
        config: Config,
    ) -> Self {
        Self {
            repo,
            analysis,
            erp,
            config,
        }
    }

    /// Engine with the canned demo generators
    pub fn with_canned_stages(repo: Arc<dyn ProjectRepository>, config: Config) -> Self {
        Self::new(
            repo,
            Arc::new(crate::generators::CannedAnalysis),
            Arc::new(CannedErp),
            config,
        )
    }
}

#[async_trait]
impl WorkflowService for Engine {
    fn analyze(&self, input: &NewProject) -> AnalysisTask {
        AnalysisTask::spawn(
            self.analysis.clone(),
            GeneratorContext::for_project(input.name.clone()),
            self.config.analysis_step_delay,
        )
    }

    async fn create_project(
        &self,
        architect: &User,
        input: NewProject,
        analysis: AiAnalysis,
    ) -> AppResult<Project> {
        input
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        let project = Project::create(input, analysis, architect);
        self.repo.upsert(&project).await?;
        tracing::info!(project = %project.id, "project created, awaiting contractor review");
        Ok(project)
    }

    async fn submit_quote(
        &self,
        project_id: &str,
        quote: ContractorResponse,
    ) -> AppResult<Project> {
        let mut project = self.repo.get(project_id).await?.ok_or_not_found()?;

        // Initial quotes require the contractor-review stage; once a quote
        // exists, re-submitting overwrites it from any later stage.
        let quotable = project.status == ProjectStatus::ContractorReview
            || project.contractor_response.is_some();
        if !quotable {
            return Err(AppError::validation(format!(
                "Project is not awaiting contractor review (status: {})",
                project.status
            )));
        }

        project.attach_quote(quote);
        self.repo.upsert(&project).await?;
        tracing::info!(project = %project.id, "quote attached, sent to client for approval");
        Ok(project)
    }

    async fn approve(&self, project_id: &str) -> AppResult<Project> {
        let mut project = self.repo.get(project_id).await?.ok_or_not_found()?;

        // Approval from outside client-review is tolerated (original
        // behavior), but worth noticing.
        if project.status != ProjectStatus::ClientReview {
            tracing::warn!(
                project = %project.id,
                status = %project.status,
                "approving a project that is not in client review"
            );
        }

        let erp = self
            .erp
            .produce(GeneratorContext::for_project(project.name.clone()))
            .await?;
        project.attach_erp(erp);
        self.repo.upsert(&project).await?;
        tracing::info!(project = %project.id, "approved, ERP export attached");
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{seed_users, FileRef};
    use crate::infra::MockProjectRepository;

    fn architect() -> User {
        seed_users().into_iter().find(|u| u.id == "arch-1").unwrap()
    }

    fn input_with_files(count: usize) -> NewProject {
        NewProject {
            name: "Westside Reno".to_string(),
            description: "Full renovation".to_string(),
            location: "Seattle, WA".to_string(),
            budget: Some(300_000.0),
            files: (0..count)
                .map(|i| FileRef {
                    name: format!("plan-{i}.pdf"),
                    size: 2048,
                    kind: "application/pdf".to_string(),
                })
                .collect(),
        }
    }

    fn analysis_stub() -> AiAnalysis {
        AiAnalysis {
            phase: "AI Processing Complete".to_string(),
            summary: String::new(),
            overall_confidence: 0.88,
            project: "Westside Reno - Main Renovation".to_string(),
            rooms: Vec::new(),
            total_items: 0,
            message: String::new(),
        }
    }

    fn engine_with(repo: MockProjectRepository) -> Engine {
        Engine::with_canned_stages(Arc::new(repo), Config::default())
    }

    #[tokio::test]
    async fn create_with_zero_files_writes_nothing() {
        let mut repo = MockProjectRepository::new();
        repo.expect_upsert().never();

        let engine = engine_with(repo);
        let result = engine
            .create_project(&architect(), input_with_files(0), analysis_stub())
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn create_persists_project_in_contractor_review() {
        let mut repo = MockProjectRepository::new();
        repo.expect_upsert()
            .withf(|p| p.status == ProjectStatus::ContractorReview)
            .times(1)
            .returning(|_| Ok(()));

        let engine = engine_with(repo);
        let project = engine
            .create_project(&architect(), input_with_files(2), analysis_stub())
            .await
            .unwrap();
        assert_eq!(project.created_by, "arch-1");
        assert_eq!(project.files.len(), 2);
    }

    #[tokio::test]
    async fn quote_requires_contractor_review_for_first_submission() {
        let mut project = Project::create(input_with_files(1), analysis_stub(), &architect());
        project.status = ProjectStatus::Approved;
        let id = project.id.clone();

        let mut repo = MockProjectRepository::new();
        repo.expect_get().returning(move |_| Ok(Some(project.clone())));
        repo.expect_upsert().never();

        let engine = engine_with(repo);
        let result = engine
            .submit_quote(&id, crate::generators::default_quote())
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn quote_replay_overwrites_previous_quote() {
        let mut project = Project::create(input_with_files(1), analysis_stub(), &architect());
        project.attach_quote(crate::generators::default_quote());
        assert_eq!(project.status, ProjectStatus::ClientReview);
        let id = project.id.clone();

        let mut repo = MockProjectRepository::new();
        repo.expect_get().returning(move |_| Ok(Some(project.clone())));
        repo.expect_upsert()
            .withf(|p| {
                p.status == ProjectStatus::ClientReview
                    && p.contractor_response
                        .as_ref()
                        .map(|q| q.project_total_estimated == 999.0)
                        .unwrap_or(false)
            })
            .times(1)
            .returning(|_| Ok(()));

        let engine = engine_with(repo);
        let mut edited = crate::generators::default_quote();
        edited.project_total_estimated = 999.0;
        engine.submit_quote(&id, edited).await.unwrap();
    }

    #[tokio::test]
    async fn approval_attaches_balanced_erp_export() {
        let mut project = Project::create(input_with_files(1), analysis_stub(), &architect());
        project.attach_quote(crate::generators::default_quote());
        let id = project.id.clone();

        let mut repo = MockProjectRepository::new();
        repo.expect_get().returning(move |_| Ok(Some(project.clone())));
        repo.expect_upsert().times(1).returning(|_| Ok(()));

        let engine = engine_with(repo);
        let approved = engine.approve(&id).await.unwrap();
        assert_eq!(approved.status, ProjectStatus::Approved);
        let erp = approved.erp_response.unwrap();
        assert_eq!(erp.totals.grand_total, erp.totals.component_sum());
    }

    #[tokio::test]
    async fn approving_unknown_project_is_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get().returning(|_| Ok(None));

        let engine = engine_with(repo);
        assert!(matches!(
            engine.approve("proj-missing").await,
            Err(AppError::NotFound)
        ));
    }
}

//! Project aggregate: the unit of work flowing through the four-role pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::config::DEFAULT_CLIENT_ID;
use crate::domain::payload::{AiAnalysis, ContractorResponse, ErpResponse};
use crate::domain::user::User;

/// Project workflow status; the single source of truth for the stage a
/// project is in.
///
/// `Draft` is a reachable value but the creation path skips it: new projects
/// land directly in `ContractorReview`. `InProgress` and `Completed` have no
/// automated transition in the modeled pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Draft,
    ContractorReview,
    ClientReview,
    Approved,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::ContractorReview => "contractor-review",
            ProjectStatus::ClientReview => "client-review",
            ProjectStatus::Approved => "approved",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Statuses counted as active work by the project-manager view
    pub fn is_active(&self) -> bool {
        matches!(self, ProjectStatus::Approved | ProjectStatus::InProgress)
    }

    /// Statuses counted as "in review" by the architect view
    pub fn in_review(&self) -> bool {
        matches!(
            self,
            ProjectStatus::ContractorReview | ProjectStatus::ClientReview
        )
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Uploaded-file descriptor. Metadata only; no byte storage exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Stored document reference (forward extension, not populated by the pipeline)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    pub url: String,
}

/// Verified material line (forward extension, not populated by the pipeline)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub category: String,
    pub item: String,
    pub ai_quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_quantity: Option<f64>,
    pub unit: String,
    pub unit_price: f64,
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineEventKind {
    Milestone,
    Update,
    Approval,
    Issue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineEventStatus {
    Completed,
    InProgress,
    Pending,
}

/// Timeline entry (forward extension, not populated by the pipeline)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TimelineEventKind,
    pub status: TimelineEventStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApprovalKind {
    Quote,
    MaterialSelection,
    ChangeOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// Approval request (forward extension, not populated by the pipeline)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub id: String,
    pub project_id: String,
    #[serde(rename = "type")]
    pub kind: ApprovalKind,
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub status: ApprovalStatus,
    pub requested_by: String,
    pub requested_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<DateTime<Utc>>,
}

/// Architect input to project creation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, message = "Project name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    pub budget: Option<f64>,
    #[validate(length(min = 1, message = "Please select at least one file to upload"))]
    pub files: Vec<FileRef>,
}

/// The central aggregate.
///
/// Payload fields are monotonically added as the status advances and never
/// cleared; transitions are idempotent writes keyed by id, so replays
/// overwrite the same fields with no history of prior versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    pub status: ProjectStatus,
    pub client_id: String,
    pub architect_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_manager_id: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent: Option<f64>,
    #[serde(default)]
    pub files: Vec<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_response: Option<ContractorResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erp_response: Option<ErpResponse>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub approvals: Vec<Approval>,
}

impl Project {
    /// Create a project from an architect's input and the reviewed analysis
    /// payload. The creation path skips `Draft`: the project is immediately
    /// awaiting contractor review.
    pub fn create(input: NewProject, analysis: AiAnalysis, architect: &User) -> Self {
        let now = Utc::now();
        Self {
            id: format!("proj-{}", Uuid::new_v4()),
            name: input.name,
            description: input.description,
            location: input.location,
            budget: input.budget,
            status: ProjectStatus::ContractorReview,
            client_id: DEFAULT_CLIENT_ID.to_string(),
            architect_id: architect.id.clone(),
            contractor_id: None,
            project_manager_id: None,
            created_by: architect.id.clone(),
            created_at: now,
            updated_at: now,
            progress: None,
            spent: None,
            files: input.files,
            ai_analysis: Some(analysis),
            contractor_response: None,
            erp_response: None,
            documents: Vec::new(),
            materials: Vec::new(),
            timeline: Vec::new(),
            approvals: Vec::new(),
        }
    }

    /// Refresh the mutation timestamp. Called by transition code, never by
    /// the repository.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Attach a contractor quote and advance to client review.
    pub fn attach_quote(&mut self, quote: ContractorResponse) {
        self.contractor_response = Some(quote);
        self.status = ProjectStatus::ClientReview;
        self.touch();
    }

    /// Attach the generated ERP export and mark the project approved.
    pub fn attach_erp(&mut self, erp: ErpResponse) {
        self.erp_response = Some(erp);
        self.status = ProjectStatus::Approved;
        self.touch();
    }

    /// Grand total of the ERP export, 0 when the stage has not run.
    /// All payload reads must tolerate absence.
    pub fn approved_value(&self) -> f64 {
        self.erp_response
            .as_ref()
            .map(|erp| erp.totals.grand_total)
            .unwrap_or(0.0)
    }

    /// Contractor's estimated total, 0 when no quote is attached
    pub fn quoted_value(&self) -> f64 {
        self.contractor_response
            .as_ref()
            .map(|quote| quote.project_total_estimated)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::seed_users;

    fn analysis_stub() -> AiAnalysis {
        AiAnalysis {
            phase: "AI Processing Complete".to_string(),
            summary: String::new(),
            overall_confidence: 0.88,
            project: "Stub".to_string(),
            rooms: Vec::new(),
            total_items: 0,
            message: String::new(),
        }
    }

    fn architect() -> User {
        seed_users()
            .into_iter()
            .find(|u| u.id == "arch-1")
            .unwrap()
    }

    #[test]
    fn status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::ContractorReview).unwrap(),
            "\"contractor-review\""
        );
        let status: ProjectStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
    }

    #[test]
    fn creation_skips_draft() {
        let input = NewProject {
            name: "Westside Reno".to_string(),
            description: "Full renovation".to_string(),
            location: "Seattle, WA".to_string(),
            budget: Some(300_000.0),
            files: vec![FileRef {
                name: "floorplan.pdf".to_string(),
                size: 1024,
                kind: "application/pdf".to_string(),
            }],
        };
        let project = Project::create(input, analysis_stub(), &architect());
        assert_eq!(project.status, ProjectStatus::ContractorReview);
        assert_eq!(project.created_by, "arch-1");
        assert_eq!(project.client_id, DEFAULT_CLIENT_ID);
        assert!(project.ai_analysis.is_some());
        assert!(project.contractor_response.is_none());
    }

    #[test]
    fn payload_reads_tolerate_absence() {
        let input = NewProject {
            name: "Empty".to_string(),
            description: "d".to_string(),
            location: "l".to_string(),
            budget: None,
            files: vec![FileRef {
                name: "a.pdf".to_string(),
                size: 1,
                kind: "application/pdf".to_string(),
            }],
        };
        let project = Project::create(input, analysis_stub(), &architect());
        assert_eq!(project.approved_value(), 0.0);
        assert_eq!(project.quoted_value(), 0.0);
    }

    #[test]
    fn persisted_layout_uses_camel_case_keys() {
        let input = NewProject {
            name: "Layout".to_string(),
            description: "d".to_string(),
            location: "l".to_string(),
            budget: None,
            files: Vec::new(),
        };
        let project = Project::create(input, analysis_stub(), &architect());
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"createdBy\""));
        assert!(json.contains("\"aiAnalysis\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(!json.contains("\"contractorResponse\""));
    }
}

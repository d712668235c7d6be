//! Core business entities and logic.

mod payload;
mod project;
mod user;

pub use payload::{
    AiAnalysis, AnalysisRoom, ApprovedItem, Attachment, ContractorResponse, ErpResponse, Invoice,
    MaterialItem, Milestone, QuoteRoom, Shipment, Totals,
};
pub use project::{
    Approval, ApprovalKind, ApprovalStatus, Document, FileRef, Material, NewProject, Project,
    ProjectStatus, TimelineEvent, TimelineEventKind, TimelineEventStatus,
};
pub use user::{seed_users, Role, User};

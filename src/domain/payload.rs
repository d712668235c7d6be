//! Pipeline payload schemas.
//!
//! Each payload is produced by exactly one pipeline stage and attached to a
//! project as it advances: analysis (architect-facing extraction schema),
//! contractor response (cost/logistics schema), ERP response (client-facing
//! commercial schema). Field names follow the persisted JSON layout.

use serde::{Deserialize, Serialize};

/// A single material line item, as extracted by analysis or annotated by
/// the contractor. SKUs are not required to be unique across rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialItem {
    pub sku: String,
    pub desc: String,
    pub qty: f64,
    pub uom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MaterialItem {
    pub fn new(sku: &str, desc: &str, qty: f64, uom: &str) -> Self {
        Self {
            sku: sku.to_string(),
            desc: desc.to_string(),
            qty,
            uom: uom.to_string(),
            location: None,
            notes: None,
        }
    }

    pub fn at(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn noting(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

/// Room grouping in the analysis payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRoom {
    pub area: String,
    pub items: Vec<MaterialItem>,
}

/// Architect-facing extraction payload attached at project creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub phase: String,
    pub summary: String,
    /// Confidence in [0, 1]
    pub overall_confidence: f64,
    pub project: String,
    pub rooms: Vec<AnalysisRoom>,
    pub total_items: u32,
    pub message: String,
}

/// Room grouping in the contractor quote, with per-room cost estimates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRoom {
    pub area: String,
    pub items: Vec<MaterialItem>,
    pub install_estimate: f64,
    pub material_estimate: f64,
    pub currency: String,
}

/// Supporting document reference attached to a quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub url: String,
}

/// Contractor-facing cost and logistics payload.
///
/// Edited values are trusted as entered: no numeric re-derivation of
/// `project_total_estimated` from line items happens anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractorResponse {
    pub phase: String,
    pub summary: String,
    pub vendor_notes: String,
    pub rooms: Vec<QuoteRoom>,
    pub project_total_estimated: f64,
    pub site_logistics: Vec<String>,
    pub attachments: Vec<Attachment>,
    pub message: String,
}

/// Approved line item in the ERP export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovedItem {
    pub sku: String,
    pub desc: String,
    pub qty: f64,
    pub uom: String,
    pub area: String,
    pub unit_price: f64,
    pub amount: f64,
}

/// Commercial totals block. Discounts are stored as a negative number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    pub materials: f64,
    pub labor: f64,
    pub install: f64,
    pub shipping: f64,
    pub tax: f64,
    pub discounts: f64,
    pub grand_total: f64,
}

impl Totals {
    /// Build a totals block with `grand_total` derived from the components.
    /// The ERP stage must uphold grand_total == sum of components; deriving
    /// it here makes the invariant hold by construction.
    pub fn from_components(
        materials: f64,
        labor: f64,
        install: f64,
        shipping: f64,
        tax: f64,
        discounts: f64,
    ) -> Self {
        Self {
            materials,
            labor,
            install,
            shipping,
            tax,
            discounts,
            grand_total: materials + labor + install + shipping + tax + discounts,
        }
    }

    /// Sum of the components making up the grand total
    pub fn component_sum(&self) -> f64 {
        self.materials + self.labor + self.install + self.shipping + self.tax + self.discounts
    }

    /// Pre-tax, pre-discount subtotal shown on the sales order
    pub fn subtotal(&self) -> f64 {
        self.materials + self.labor + self.install
    }
}

/// Staged invoice in the ERP export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: String,
    pub stage: String,
    pub amount: f64,
    pub due: String,
}

/// Timeline milestone in the ERP export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub milestone: String,
    pub date: String,
}

/// Shipment tracking line in the ERP export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub item: String,
    pub carrier: String,
    pub status: String,
    pub est_delivery: String,
}

/// Client-facing commercial payload attached on approval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErpResponse {
    pub phase: String,
    pub summary: String,
    pub project: String,
    pub approved_items: Vec<ApprovedItem>,
    pub totals: Totals,
    pub po_number: String,
    pub invoices: Vec<Invoice>,
    pub project_timeline: Vec<Milestone>,
    pub shipment_tracking: Vec<Shipment>,
    pub client_actions: Vec<String>,
    pub message: String,
}

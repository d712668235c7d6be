//! Canned ERP stage: the client-facing commercial export.

use async_trait::async_trait;

use crate::domain::{ApprovedItem, ErpResponse, Invoice, Milestone, Shipment, Totals};
use crate::errors::AppResult;

use super::{Generator, GeneratorContext};

/// Mock ERP import stage. Canned commercial data; the grand total is derived
/// from the component totals so the totals block always balances.
pub struct CannedErp;

#[async_trait]
impl Generator<ErpResponse> for CannedErp {
    async fn produce(&self, ctx: GeneratorContext) -> AppResult<ErpResponse> {
        Ok(ErpResponse {
            phase: "ERP Processing & Final Sale Listing".to_string(),
            summary: "Client-approved materials list and quote auto-imported into ERP. PO and \
                      project schedule generated; invoices and shipment tracking included."
                .to_string(),
            project: format!("{} - Complete Reno", ctx.project_name),
            approved_items: approved_items(),
            totals: Totals::from_components(
                164_000.0, 66_500.0, 40_500.0, 8_500.0, 18_500.0, -10_500.0,
            ),
            po_number: "WSR-2025-PO-3371".to_string(),
            invoices: vec![
                Invoice {
                    invoice_id: "INV-1001".to_string(),
                    stage: "Deposit".to_string(),
                    amount: 71_000.0,
                    due: "2025-08-20".to_string(),
                },
                Invoice {
                    invoice_id: "INV-1002".to_string(),
                    stage: "Fabrication".to_string(),
                    amount: 85_200.0,
                    due: "2025-09-20".to_string(),
                },
                Invoice {
                    invoice_id: "INV-1003".to_string(),
                    stage: "Delivery & Install".to_string(),
                    amount: 127_800.0,
                    due: "2025-10-05".to_string(),
                },
            ],
            project_timeline: vec![
                milestone("PO Approval", "2025-08-01"),
                milestone("Shop Drawings Approved", "2025-08-15"),
                milestone("Fabrication Start", "2025-08-28"),
                milestone("Delivery and Install", "2025-10-15"),
                milestone("Project Walkthrough", "2025-11-15"),
            ],
            shipment_tracking: vec![
                Shipment {
                    item: "Travertine Slab".to_string(),
                    carrier: "XYZ Trucking".to_string(),
                    status: "Scheduled".to_string(),
                    est_delivery: "2025-10-13".to_string(),
                },
                Shipment {
                    item: "Quartzite Slab".to_string(),
                    carrier: "ABC Freight".to_string(),
                    status: "In Transit".to_string(),
                    est_delivery: "2025-10-14".to_string(),
                },
                Shipment {
                    item: "Cabinet Hardware".to_string(),
                    carrier: "Local Delivery".to_string(),
                    status: "Pending".to_string(),
                    est_delivery: "2025-10-16".to_string(),
                },
            ],
            client_actions: vec![
                "Download Final Quote (PDF)".to_string(),
                "E-sign Contract".to_string(),
                "Access Payment Portal".to_string(),
                "Track Shipments".to_string(),
                "View Project Schedule".to_string(),
            ],
            message: "For demonstration: This is a massive client-ready ERP export for a full \
                      residential project, including everything required for purchase, workflow \
                      and ongoing tracking."
                .to_string(),
        })
    }
}

fn milestone(name: &str, date: &str) -> Milestone {
    Milestone {
        milestone: name.to_string(),
        date: date.to_string(),
    }
}

fn item(
    sku: &str,
    desc: &str,
    qty: f64,
    uom: &str,
    area: &str,
    unit_price: f64,
    amount: f64,
) -> ApprovedItem {
    ApprovedItem {
        sku: sku.to_string(),
        desc: desc.to_string(),
        qty,
        uom: uom.to_string(),
        area: area.to_string(),
        unit_price,
        amount,
    }
}

fn approved_items() -> Vec<ApprovedItem> {
    vec![
        item(
            "STONE_TRAV_2CM",
            "White Wood Travertine 2cm slab",
            1.5,
            "slab",
            "Master Suite",
            3_600.0,
            5_400.0,
        ),
        item(
            "QZ_EMERALD_3CM",
            "Emerald Green Quartzite 3cm slab",
            2.25,
            "slab",
            "Kitchen",
            4_800.0,
            10_800.0,
        ),
        item(
            "CABINET_BOX_42",
            "Rehau Windswept Pine Cabinet Box",
            2.0,
            "unit",
            "Master Suite",
            2_200.0,
            4_400.0,
        ),
        item(
            "STONE_SINK_CUSTOM",
            "Integral Stone Sink, Custom",
            3.0,
            "each",
            "Multiple",
            1_800.0,
            5_400.0,
        ),
        item(
            "QUARTZ_WHITE_2CM",
            "Caesarstone White Quartz 2cm slab",
            1.0,
            "slab",
            "Guest Bath",
            2_800.0,
            2_800.0,
        ),
        item(
            "CABINET_SUNLIT_36",
            "Rehau Sunlit Pine Cabinet Box 36in",
            1.0,
            "unit",
            "Guest Bath",
            1_900.0,
            1_900.0,
        ),
        item(
            "LIMESTONE_TILE_24X24",
            "Reclaimed Limestone Tile 24x24in",
            850.0,
            "sqft",
            "Living Room",
            12.0,
            10_200.0,
        ),
        item(
            "BRASS_STAIR_RAIL",
            "Custom Brass Stair Railing",
            64.0,
            "lf",
            "Living Room",
            85.0,
            5_440.0,
        ),
    ]
}

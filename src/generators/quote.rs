//! Canned contractor stage: the default quote a contractor starts editing from.

use async_trait::async_trait;

use crate::config::DEFAULT_CURRENCY;
use crate::domain::{Attachment, ContractorResponse, MaterialItem, QuoteRoom};
use crate::errors::AppResult;

use super::{Generator, GeneratorContext};

/// Mock contractor review stage. The payload is the starting point for a
/// contractor's edits; edited values are attached verbatim by the workflow.
pub struct CannedQuote;

#[async_trait]
impl Generator<ContractorResponse> for CannedQuote {
    async fn produce(&self, _ctx: GeneratorContext) -> AppResult<ContractorResponse> {
        Ok(default_quote())
    }
}

/// The default contractor response structure.
pub fn default_quote() -> ContractorResponse {
    ContractorResponse {
        phase: "Contractor Review and Edit".to_string(),
        summary: "Contractor reviewed AI materials, adjusted quantities for waste, added \
                  alternate products and detailed specifications. Labor, install, and \
                  logistics costs attached."
            .to_string(),
        vendor_notes: "Stone slabs rounded up for possible breakage; switched faucets to local \
                       spec."
            .to_string(),
        rooms: vec![
            QuoteRoom {
                area: "Master Suite".to_string(),
                items: vec![
                    MaterialItem::new(
                        "STONE_TRAV_2CM",
                        "White Wood Travertine 2cm slab",
                        1.5,
                        "slab",
                    )
                    .at("Countertops")
                    .noting("Includes 20% waste, confirm batch color"),
                    MaterialItem::new(
                        "CABINET_BOX_42",
                        "Rehau Windswept Pine Cabinet Box 42in",
                        2.0,
                        "unit",
                    ),
                    MaterialItem::new("SINK_INTEGRAL_20x14", "Integral stone sink", 2.0, "each"),
                    MaterialItem::new("BATH_LIGHT_2X", "Wall Sconce, Brushed Brass", 2.0, "each")
                        .noting("Match powder room style"),
                ],
                install_estimate: 8_400.0,
                material_estimate: 24_250.0,
                currency: DEFAULT_CURRENCY.to_string(),
            },
            QuoteRoom {
                area: "Kitchen".to_string(),
                items: vec![
                    MaterialItem::new(
                        "QZ_EMERALD_3CM",
                        "Emerald Green Quartzite 3cm slab",
                        2.25,
                        "slab",
                    )
                    .noting("One extra for island overhang"),
                    MaterialItem::new("CAB_CLAD_QZ", "Stone clad cabinet doors/panels", 10.0, "unit"),
                    MaterialItem::new("INTEGRAL_QZ_SINK", "Integral Stone Sink, Custom", 1.0, "each"),
                    MaterialItem::new(
                        "FAUCET_LOCAL_SUS",
                        "Locally Sourced Pull-down Faucet, Stainless",
                        1.0,
                        "each",
                    )
                    .noting("Alternate to Grohe"),
                ],
                install_estimate: 21_000.0,
                material_estimate: 52_000.0,
                currency: DEFAULT_CURRENCY.to_string(),
            },
            QuoteRoom {
                area: "Guest Bath".to_string(),
                items: vec![
                    MaterialItem::new(
                        "QUARTZ_WHITE_2CM",
                        "Caesarstone White Quartz 2cm slab",
                        1.0,
                        "slab",
                    )
                    .noting("Rounded up from 0.9"),
                    MaterialItem::new(
                        "CABINET_SUNLIT_36",
                        "Rehau Sunlit Pine Cabinet Box 36in",
                        1.0,
                        "unit",
                    ),
                    MaterialItem::new(
                        "SINK_UNDERMOUNT_18x14",
                        "Undermount Ceramic Sink 18x14in",
                        1.0,
                        "each",
                    ),
                ],
                install_estimate: 4_200.0,
                material_estimate: 8_500.0,
                currency: DEFAULT_CURRENCY.to_string(),
            },
        ],
        project_total_estimated: 346_500.0,
        site_logistics: vec![
            "Night delivery required for city restrictions".to_string(),
            "Rigging and elevator access to be coordinated".to_string(),
        ],
        attachments: vec![
            Attachment {
                kind: "PDF".to_string(),
                label: "Installation Scope".to_string(),
                url: "dummy-link.com/pdf1".to_string(),
            },
            Attachment {
                kind: "PNG".to_string(),
                label: "Annotated Plan".to_string(),
                url: "dummy-link.com/img1".to_string(),
            },
        ],
        message: "This is a detailed dummy contractor review with accurate schedule of \
                  materials and full labor/cost breakdowns for a large project stage. For demo \
                  only."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn quote_carries_room_estimates_and_logistics() {
        let quote = CannedQuote
            .produce(GeneratorContext::for_project("any"))
            .await
            .unwrap();
        assert_eq!(quote.rooms.len(), 3);
        assert_eq!(quote.project_total_estimated, 346_500.0);
        assert_eq!(quote.site_logistics.len(), 2);
        assert!(quote.rooms.iter().all(|r| r.currency == DEFAULT_CURRENCY));
    }
}

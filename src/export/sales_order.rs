//! Printable sales-order document built from an approved project's ERP
//! payload. The output is a self-contained HTML page with inline styles
//! so it renders the same whether opened in a browser tab or saved to
//! disk for signing.

use std::fmt::Write as _;

use crate::domain::Project;
use crate::errors::{AppResult, OptionExt};

const STYLE: &str = r#"    body { font-family: Arial, sans-serif; margin: 0; padding: 20px; font-size: 12px; }
    .header-section { display: flex; justify-content: space-between; margin-bottom: 20px; }
    .bill-to, .install-at { width: 48%; }
    .job-info { margin: 20px 0; padding: 10px; background: #f9f9f9; }
    .sales-info { display: flex; justify-content: space-between; margin: 20px 0; }
    .items-section { margin: 20px 0; }
    .item-group { margin: 15px 0; border: 1px solid #ddd; padding: 10px; }
    .item-header { font-weight: bold; background: #f5f5f5; padding: 5px; margin: -10px -10px 10px -10px; }
    .item-details { margin: 5px 0; }
    .item-line { display: flex; justify-content: space-between; margin: 2px 0; }
    .subtotal { text-align: right; font-weight: bold; margin: 10px 0; }
    .totals-section { margin: 30px 0; border-top: 2px solid #000; padding-top: 10px; }
    .total-line { display: flex; justify-content: space-between; margin: 3px 0; }
    .grand-total { font-weight: bold; font-size: 14px; border-top: 1px solid #000; padding-top: 5px; }
    .signature-section { margin-top: 40px; }
    .signature-line { border-bottom: 1px solid #000; width: 300px; margin: 20px 0 5px 0; }
    .terms { margin: 20px 0; font-size: 10px; }
    @media print { body { margin: 0; } }"#;

/// A sales order snapshot taken from a project that carries ERP data.
///
/// Construction fails with `AbsentData` when the project has not reached
/// the approval stage yet, so callers do not have to pre-check status.
#[derive(Debug)]
pub struct SalesOrder {
    project_name: String,
    location: String,
    job_name: String,
    po_number: String,
    items: Vec<crate::domain::ApprovedItem>,
    totals: crate::domain::Totals,
}

impl SalesOrder {
    pub fn new(project: &Project) -> AppResult<Self> {
        let erp = project
            .erp_response
            .as_ref()
            .ok_or_absent("erpResponse")?;

        Ok(Self {
            project_name: project.name.clone(),
            location: project.location.clone(),
            job_name: erp.project.clone(),
            po_number: erp.po_number.clone(),
            items: erp.approved_items.clone(),
            totals: erp.totals.clone(),
        })
    }

    pub fn po_number(&self) -> &str {
        &self.po_number
    }

    /// Download file name: project name with whitespace collapsed to dashes,
    /// suffixed with the purchase-order number.
    pub fn file_name(&self) -> String {
        let dashed: String = self
            .project_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("Sales-Order-{}-{}.html", dashed, self.po_number)
    }

    /// Render the complete printable document.
    pub fn to_html(&self) -> String {
        let mut items = String::new();
        for item in &self.items {
            // write! into a String cannot fail
            let _ = write!(
                items,
                r#"
      <div class="item-group">
        <div class="item-header">{area} - {desc}</div>
        <div class="item-details">
          <div class="item-line">
            <span>SKU: {sku}</span>
            <span>Quantity: {qty} {uom}</span>
          </div>
          <div class="item-line">
            <span>Unit Price: ${unit_price}</span>
            <span><strong>Extended: ${amount}</strong></span>
          </div>
        </div>
        <div class="subtotal">Subtotal: ${amount}</div>
      </div>"#,
                area = escape(&item.area),
                desc = escape(&item.desc),
                sku = escape(&item.sku),
                qty = fmt_number(item.qty),
                uom = escape(&item.uom),
                unit_price = fmt_number(item.unit_price),
                amount = fmt_number(item.amount),
            );
        }

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <title>Sales Order - {name}</title>
  <style>
{style}
  </style>
</head>
<body>
  <div class="header-section">
    <div class="bill-to">
      <strong>Bill To:</strong><br>
      Construction Portal Client<br>
      {location}<br>
      E: client@constructionportal.com
    </div>
    <div class="install-at">
      <strong>Install At:</strong><br>
      {name}<br>
      {location}<br>
      P: (555) 123-4567<br>
      E: client@constructionportal.com
    </div>
  </div>

  <div class="job-info">
    <strong>Job Name:</strong> {job_name}<br>
    <strong>PO Number:</strong> {po_number}
  </div>

  <div class="sales-info">
    <div><strong>Sales Rep:</strong> Construction Portal</div>
    <div><strong>Terms:</strong> Standard Payment Terms</div>
    <div><strong>Prepared By:</strong> System</div>
  </div>

  <div class="items-section">{items}
  </div>

  <div class="totals-section">
    <div class="total-line">Subtotal: <span>${subtotal}</span></div>
    <div class="total-line">Discount: <span>${discount}</span></div>
    <div class="total-line">Tax: <span>${tax}</span></div>
    <div class="total-line grand-total">Total: <span>${grand}</span></div>
    <div class="total-line grand-total">Balance Due: <span>${grand}</span></div>
  </div>

  <div class="terms">
    <strong>Terms and Conditions:</strong><br>
    By signing this agreement you are agreeing to Construction Portal's terms of sale. All sales are final.
    Payment terms as specified in payment schedule. Materials and installation as described above.
  </div>

  <div class="signature-section">
    <div>Name: <div class="signature-line"></div></div>
    <div>Signature: <div class="signature-line"></div></div>
    <div>Date: <div class="signature-line"></div></div>
  </div>
</body>
</html>
"#,
            name = escape(&self.project_name),
            style = STYLE,
            location = escape(&self.location),
            job_name = escape(&self.job_name),
            po_number = escape(&self.po_number),
            items = items,
            subtotal = fmt_number(self.totals.subtotal()),
            discount = fmt_number(self.totals.discounts),
            tax = fmt_number(self.totals.tax),
            grand = fmt_number(self.totals.grand_total),
        )
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Locale-style number: rounded to cents, thousands separators, fraction
/// kept only when present, minus sign ahead of the separators.
fn fmt_number(value: f64) -> String {
    // Round first so a fraction of .995 and up carries into the whole part
    let total_cents = (value.abs() * 100.0).round() as u64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if value < 0.0 && total_cents > 0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if cents > 0 {
        if cents % 10 == 0 {
            out.push_str(&format!(".{}", cents / 10));
        } else {
            out.push_str(&format!(".{:02}", cents));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{seed_users, AiAnalysis, FileRef, NewProject};
    use crate::errors::AppError;
    use crate::generators::{CannedErp, Generator, GeneratorContext};

    fn sample_project() -> Project {
        let architect = seed_users().into_iter().find(|u| u.id == "arch-1").unwrap();
        let input = NewProject {
            name: "West Side Residence".to_string(),
            description: "Full renovation".to_string(),
            location: "42 West St".to_string(),
            budget: Some(300_000.0),
            files: vec![FileRef {
                name: "plans.pdf".to_string(),
                size: 2048,
                kind: "application/pdf".to_string(),
            }],
        };
        let analysis = AiAnalysis {
            phase: String::new(),
            summary: String::new(),
            overall_confidence: 0.88,
            project: String::new(),
            rooms: Vec::new(),
            total_items: 0,
            message: String::new(),
        };
        Project::create(input, analysis, &architect)
    }

    async fn approved_project() -> Project {
        let mut project = sample_project();
        let erp = CannedErp
            .produce(GeneratorContext::for_project(&project.name))
            .await
            .unwrap();
        project.attach_erp(erp);
        project
    }

    #[test]
    fn rejects_project_without_erp_data() {
        let project = sample_project();
        let err = SalesOrder::new(&project).unwrap_err();
        assert!(matches!(err, AppError::AbsentData(_)));
    }

    #[tokio::test]
    async fn file_name_dashes_spaces_and_carries_po_number() {
        let project = approved_project().await;
        let order = SalesOrder::new(&project).unwrap();
        assert_eq!(
            order.file_name(),
            format!("Sales-Order-West-Side-Residence-{}.html", order.po_number())
        );
    }

    #[tokio::test]
    async fn document_shows_derived_totals() {
        let project = approved_project().await;
        let order = SalesOrder::new(&project).unwrap();
        let html = order.to_html();

        assert!(html.contains("<title>Sales Order - West Side Residence</title>"));
        assert!(html.contains("PO Number:</strong> WSR-2025-PO-3371"));
        // materials + labor + install
        assert!(html.contains("Subtotal: <span>$271,000</span>"));
        assert!(html.contains("Total: <span>$287,500</span>"));
        assert!(html.contains("Balance Due: <span>$287,500</span>"));
        // one item-group per approved line
        assert_eq!(html.matches("item-group").count(), order.items.len() + 1);
    }

    #[test]
    fn number_formatting_matches_locale_style() {
        assert_eq!(fmt_number(287_500.0), "287,500");
        assert_eq!(fmt_number(-10_500.0), "-10,500");
        assert_eq!(fmt_number(950.0), "950");
        assert_eq!(fmt_number(12.5), "12.5");
        assert_eq!(fmt_number(12.75), "12.75");
        assert_eq!(fmt_number(0.05), "0.05");
        assert_eq!(fmt_number(1_234_567.0), "1,234,567");
    }

    #[test]
    fn number_formatting_carries_rounded_fractions_into_the_whole_part() {
        // Store data can be edited directly, so amounts are not guaranteed
        // to be whole cents
        assert_eq!(fmt_number(2.999), "3");
        assert_eq!(fmt_number(1_234.999), "1,235");
        assert_eq!(fmt_number(999.999), "1,000");
        assert_eq!(fmt_number(0.004), "0");
        assert_eq!(fmt_number(-0.004), "0");
    }
}

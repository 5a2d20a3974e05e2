//! Earnings receipt
//!
//! Renders an [`EarningsSummary`] into a standalone printable HTML page.
//! Output depends only on the input. Missing amounts print as zero, missing
//! header text as `N/A`, missing row text as an empty cell.

use rust_decimal::Decimal;
use shared::format_gbp;
use shared::models::{EarningsBreakdown, EarningsSummary, MenuItemEarning, OrderEarning};

const PLACEHOLDER: &str = "N/A";

pub struct ReceiptRenderer<'a> {
    summary: &'a EarningsSummary,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(summary: &'a EarningsSummary) -> Self {
        Self { summary }
    }

    pub fn render(&self) -> String {
        let s = self.summary;
        let restaurant = header_text(s.restaurant_name.as_deref());
        let mut body = String::new();

        // ── Header ──
        body.push_str(&format!(
            "<header>\n<h1>{}</h1>\n<p class=\"subtitle\">Earnings summary</p>\n",
            esc(restaurant)
        ));
        body.push_str(&format!(
            "<p class=\"meta\"><span>Period: {}</span><span>Generated: {}</span></p>\n</header>\n",
            esc(header_text(s.period_label.as_deref())),
            esc(header_text(s.generated_at.as_deref())),
        ));

        // ── Totals ──
        let t = &s.totals;
        let gross = amount(t.gross);
        let commission = amount(t.commission);
        body.push_str("<section class=\"totals\">\n");
        body.push_str(&total_line("Orders", &t.order_count.unwrap_or(0).to_string()));
        body.push_str(&total_line("Gross sales", &format_gbp(gross)));
        body.push_str(&total_line("Commission", &format_gbp(commission)));
        body.push_str(&total_line(
            "Net earnings",
            &format_gbp(net(t.net, gross, commission)),
        ));
        body.push_str("</section>\n");

        // ── Breakdown ──
        match &s.breakdown {
            EarningsBreakdown::MenuItem(rows) => {
                body.push_str(&table(
                    "By menu item",
                    &["Item", "Qty", "Unit price", "Gross", "Commission", "Net"],
                    rows.iter().map(menu_item_row),
                ));
            }
            EarningsBreakdown::ByOrder(rows) => {
                body.push_str(&table(
                    "By order",
                    &["Order", "Date", "Items", "Gross", "Commission", "Net"],
                    rows.iter().map(order_row),
                ));
            }
        }

        html_shell(&format!("Earnings - {restaurant}"), &body)
    }
}

/// Render a summary to HTML
pub fn render_receipt(summary: &EarningsSummary) -> String {
    ReceiptRenderer::new(summary).render()
}

fn menu_item_row(row: &MenuItemEarning) -> [String; 6] {
    let gross = amount(row.gross);
    let commission = amount(row.commission);
    [
        esc(row.item_name.as_deref().unwrap_or("")),
        row.quantity.unwrap_or(0).to_string(),
        format_gbp(amount(row.unit_price)),
        format_gbp(gross),
        format_gbp(commission),
        format_gbp(net(row.net, gross, commission)),
    ]
}

fn order_row(row: &OrderEarning) -> [String; 6] {
    let gross = amount(row.gross);
    let commission = amount(row.commission);
    [
        esc(row.order_number.as_deref().unwrap_or("")),
        esc(row.order_date.as_deref().unwrap_or("")),
        row.item_count.unwrap_or(0).to_string(),
        format_gbp(gross),
        format_gbp(commission),
        format_gbp(net(row.net, gross, commission)),
    ]
}

fn amount(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

/// Reported net, else gross minus commission
fn net(value: Option<Decimal>, gross: Decimal, commission: Decimal) -> Decimal {
    value.unwrap_or(gross - commission)
}

fn header_text(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => PLACEHOLDER,
    }
}

fn total_line(label: &str, value: &str) -> String {
    format!("<div class=\"line\"><span>{label}</span><strong>{value}</strong></div>\n")
}

/// Cells must already be escaped
fn table<I>(title: &str, headers: &[&str], rows: I) -> String
where
    I: Iterator<Item = [String; 6]>,
{
    let mut out = format!("<section class=\"breakdown\">\n<h2>{title}</h2>\n<table>\n<thead><tr>");
    for h in headers {
        out.push_str(&format!("<th>{h}</th>"));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    let mut empty = true;
    for cells in rows {
        empty = false;
        out.push_str("<tr>");
        for (i, cell) in cells.iter().enumerate() {
            if i == 0 {
                out.push_str(&format!("<td>{cell}</td>"));
            } else {
                out.push_str(&format!("<td class=\"num\">{cell}</td>"));
            }
        }
        out.push_str("</tr>\n");
    }
    if empty {
        out.push_str(&format!(
            "<tr><td colspan=\"{}\" class=\"empty\">No earnings in this period</td></tr>\n",
            headers.len()
        ));
    }
    out.push_str("</tbody>\n</table>\n</section>\n");
    out
}

fn esc(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn html_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8"/>
<title>{}</title>
<style>
body {{ font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; margin: 24px; color: #111; }}
h1 {{ margin: 0; font-size: 20px; }}
.subtitle {{ margin: 2px 0 0 0; color: #555; }}
.meta {{ display: flex; justify-content: space-between; font-size: 12px; color: #555; }}
.totals {{ margin-top: 16px; border-top: 1px solid #111; padding-top: 8px; }}
.line {{ display: flex; justify-content: space-between; font-size: 13px; }}
table {{ width: 100%; border-collapse: collapse; font-size: 12px; margin-top: 8px; }}
th, td {{ border-bottom: 1px solid #ddd; padding: 4px 6px; text-align: left; }}
td.num {{ text-align: right; }}
.empty {{ text-align: center; color: #777; }}
@media print {{ body {{ margin: 0; }} }}
</style>
</head>
<body>
{}</body>
</html>"#,
        esc(title),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::EarningsTotals;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn summary(breakdown: EarningsBreakdown) -> EarningsSummary {
        EarningsSummary {
            restaurant_name: Some("Bella's Kitchen".into()),
            period_label: Some("March 2025".into()),
            generated_at: None,
            totals: EarningsTotals::default(),
            breakdown,
        }
    }

    fn row_containing<'h>(html: &'h str, needle: &str) -> &'h str {
        html.lines()
            .find(|l| l.starts_with("<tr><td") && l.contains(needle))
            .unwrap()
    }

    #[test]
    fn test_menu_item_row_computes_missing_net() {
        let burger = MenuItemEarning {
            item_name: Some("Burger".into()),
            quantity: Some(4),
            unit_price: Some(d("5.00")),
            gross: Some(d("20.00")),
            commission: Some(d("2.00")),
            net: None,
        };
        let html = render_receipt(&summary(EarningsBreakdown::MenuItem(vec![burger])));

        let row = row_containing(&html, "Burger");
        for needle in ["Burger", ">4<", "£5.00", "£20.00", "£2.00", "£18.00"] {
            assert!(row.contains(needle), "missing {needle} in {row}");
        }
        assert!(html.contains("By menu item"));
        assert!(!html.contains("By order"));
    }

    #[test]
    fn test_by_order_table() {
        let order = OrderEarning {
            order_number: Some("CO-1001".into()),
            order_date: Some("2025-03-04".into()),
            item_count: Some(3),
            gross: Some(d("31.50")),
            commission: Some(d("3.15")),
            net: Some(d("28.35")),
        };
        let html = render_receipt(&summary(EarningsBreakdown::ByOrder(vec![order])));

        let row = row_containing(&html, "CO-1001");
        assert!(row.contains("2025-03-04"));
        assert!(row.contains("£28.35"));
        assert!(html.contains("By order"));
        assert!(!html.contains("By menu item"));
    }

    #[test]
    fn test_missing_values_render_defaults() {
        let html = render_receipt(&summary(EarningsBreakdown::MenuItem(vec![
            MenuItemEarning::default(),
        ])));

        assert!(html.contains("Generated: N/A"));
        let row = row_containing(&html, "£0.00");
        assert!(row.starts_with("<tr><td></td><td class=\"num\">0</td>"));
        assert!(html.contains("<strong>£0.00</strong>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut s = summary(EarningsBreakdown::MenuItem(vec![MenuItemEarning {
            item_name: Some("<script>alert(1)</script> & co".into()),
            ..MenuItemEarning::default()
        }]));
        s.restaurant_name = Some("Fish & \"Chips\"".into());
        let html = render_receipt(&s);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; co"));
        assert!(html.contains("<h1>Fish &amp; &quot;Chips&quot;</h1>"));
    }

    #[test]
    fn test_totals_and_empty_table() {
        let mut s = summary(EarningsBreakdown::ByOrder(vec![]));
        s.totals = EarningsTotals {
            order_count: Some(12),
            gross: Some(d("240")),
            commission: Some(d("24")),
            net: None,
        };
        let html = render_receipt(&s);
        assert!(html.contains("<span>Orders</span><strong>12</strong>"));
        assert!(html.contains("<span>Net earnings</span><strong>£216.00</strong>"));
        assert!(html.contains("No earnings in this period"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let s = summary(EarningsBreakdown::MenuItem(vec![]));
        assert_eq!(render_receipt(&s), render_receipt(&s));
    }
}

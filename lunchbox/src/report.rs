//! Monthly report CSV export
//!
//! One file, four sections (`SUMMARY`, `RESTAURANTS`, `EMPLOYEES`, `DAILY`)
//! separated by a blank line. Each section is its title line, a header row,
//! then data rows.

use std::path::{Path, PathBuf};

use shared::format_gbp;
use shared::models::MonthlyReport;

use crate::core::AppResult;

/// `monthly-report-2025-03.csv`
pub fn report_filename(year: i32, month: u32) -> String {
    format!("monthly-report-{year}-{month:02}.csv")
}

/// Render the report as CSV text
pub fn monthly_report_csv(report: &MonthlyReport) -> String {
    let mut sections = Vec::with_capacity(4);

    let s = &report.summary;
    sections.push(section(
        "SUMMARY",
        &["Metric", "Value"],
        vec![
            vec!["Period".into(), format!("{}-{:02}", report.year, report.month)],
            vec!["Total orders".into(), s.total_orders.to_string()],
            vec!["Total spend".into(), format_gbp(s.total_spend)],
            vec!["Average order value".into(), format_gbp(s.average_order_value)],
            vec!["Active employees".into(), s.active_employees.to_string()],
        ],
    ));

    sections.push(section(
        "RESTAURANTS",
        &["Restaurant", "Orders", "Spend"],
        report
            .restaurants
            .iter()
            .map(|r| vec![r.name.clone(), r.orders.to_string(), format_gbp(r.spend)])
            .collect(),
    ));

    sections.push(section(
        "EMPLOYEES",
        &["Employee", "Job title", "Orders", "Spend"],
        report
            .employees
            .iter()
            .map(|e| {
                vec![
                    e.name.clone(),
                    e.job_title.clone().unwrap_or_default(),
                    e.orders.to_string(),
                    format_gbp(e.spend),
                ]
            })
            .collect(),
    ));

    sections.push(section(
        "DAILY",
        &["Date", "Orders", "Spend"],
        report
            .daily
            .iter()
            .map(|d| vec![d.date.to_string(), d.orders.to_string(), format_gbp(d.spend)])
            .collect(),
    ));

    sections.join("\n")
}

/// Write the report into `dir` under its conventional filename
pub fn write_monthly_report(dir: &Path, report: &MonthlyReport) -> AppResult<PathBuf> {
    let path = dir.join(report_filename(report.year, report.month));
    std::fs::write(&path, monthly_report_csv(report))?;
    tracing::info!(path = %path.display(), "monthly report written");
    Ok(path)
}

fn section(title: &str, headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&csv_line(headers.iter().copied()));
    for row in &rows {
        out.push_str(&csv_line(row.iter().map(String::as_str)));
    }
    out
}

fn csv_line<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    let mut line = fields.map(csv_escape).collect::<Vec<_>>().join(",");
    line.push('\n');
    line
}

fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

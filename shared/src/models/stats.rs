//! Reporting Models
//!
//! Dashboard figures, the monthly report exported to CSV and the earnings
//! summary rendered as a printable receipt.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline figures for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_orders: u32,
    pub total_spend: Decimal,
    #[serde(default)]
    pub pending_approvals: u32,
    #[serde(default)]
    pub active_employees: u32,
    #[serde(default)]
    pub average_order_value: Decimal,
    #[serde(default)]
    pub spend_by_day: Vec<DailySpend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySpend {
    pub date: NaiveDate,
    pub orders: u32,
    pub spend: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSpend {
    pub name: String,
    pub orders: u32,
    pub spend: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSpend {
    pub name: String,
    #[serde(default)]
    pub job_title: Option<String>,
    pub orders: u32,
    pub spend: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_orders: u32,
    pub total_spend: Decimal,
    #[serde(default)]
    pub average_order_value: Decimal,
    #[serde(default)]
    pub active_employees: u32,
}

/// Monthly report exported as CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub year: i32,
    /// 1-12
    pub month: u32,
    #[serde(default)]
    pub summary: ReportSummary,
    #[serde(default)]
    pub restaurants: Vec<RestaurantSpend>,
    #[serde(default)]
    pub employees: Vec<EmployeeSpend>,
    #[serde(default)]
    pub daily: Vec<DailySpend>,
}

/// Monthly report query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

// ==================== Earnings receipt ====================

/// Which breakdown an earnings summary carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EarningsStyle {
    MenuItem,
    ByOrder,
}

/// Earnings summary query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsQuery {
    pub style: EarningsStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

/// Commission / earnings breakdown for one restaurant and period.
///
/// Every numeric field may be absent; renderers treat absence as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    #[serde(default)]
    pub restaurant_name: Option<String>,
    #[serde(default)]
    pub period_label: Option<String>,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub totals: EarningsTotals,
    pub breakdown: EarningsBreakdown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsTotals {
    #[serde(default)]
    pub order_count: Option<u32>,
    #[serde(default)]
    pub gross: Option<Decimal>,
    #[serde(default)]
    pub commission: Option<Decimal>,
    #[serde(default)]
    pub net: Option<Decimal>,
}

/// Exactly one breakdown table per summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", content = "rows", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EarningsBreakdown {
    MenuItem(Vec<MenuItemEarning>),
    ByOrder(Vec<OrderEarning>),
}

impl EarningsBreakdown {
    pub fn style(&self) -> EarningsStyle {
        match self {
            Self::MenuItem(_) => EarningsStyle::MenuItem,
            Self::ByOrder(_) => EarningsStyle::ByOrder,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemEarning {
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    #[serde(default)]
    pub gross: Option<Decimal>,
    #[serde(default)]
    pub commission: Option<Decimal>,
    #[serde(default)]
    pub net: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEarning {
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub item_count: Option<u32>,
    #[serde(default)]
    pub gross: Option<Decimal>,
    #[serde(default)]
    pub commission: Option<Decimal>,
    #[serde(default)]
    pub net: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_earnings_summary_style_tag() {
        let summary: EarningsSummary = serde_json::from_value(json!({
            "restaurantName": "Burger Barn",
            "breakdown": {
                "style": "MENU_ITEM",
                "rows": [{"itemName": "Burger", "quantity": 4, "unitPrice": "5.00"}]
            }
        }))
        .unwrap();
        assert_eq!(summary.breakdown.style(), EarningsStyle::MenuItem);
        assert_eq!(summary.totals, EarningsTotals::default());

        let summary: EarningsSummary =
            serde_json::from_value(json!({"breakdown": {"style": "BY_ORDER", "rows": []}})).unwrap();
        assert_eq!(summary.breakdown, EarningsBreakdown::ByOrder(vec![]));
    }
}

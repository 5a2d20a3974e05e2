use shared::models::{DashboardStats, EarningsQuery, EarningsSummary, MonthQuery, MonthlyReport};

use super::Api;
use crate::{ClientResult, HttpClient};

impl<C: HttpClient> Api<C> {
    // ========== Stats API ==========

    pub async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        self.http.get("stats/dashboard").await
    }

    pub async fn monthly_report(&self, year: i32, month: u32) -> ClientResult<MonthlyReport> {
        self.http
            .get_with_query("stats/monthly-report", &MonthQuery { year, month })
            .await
    }

    pub async fn earnings_summary(&self, query: &EarningsQuery) -> ClientResult<EarningsSummary> {
        self.http.get_with_query("stats/earnings", query).await
    }
}

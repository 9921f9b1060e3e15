use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, DashboardStats},
};

impl ApiClient {
    /// Aggregate counters for the current role; the backend decides whether
    /// the numbers are personal or organization-wide.
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let response = self
            .send_authorized(Method::GET, "/dashboard/stats", None)
            .await?;
        Self::parse_json(response).await
    }
}

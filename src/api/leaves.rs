use reqwest::Method;
use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, CreateLeaveRequest, LeaveRequest},
};

impl ApiClient {
    /// The backend scopes the listing by caller role: admins see every
    /// request, employees only their own.
    pub async fn get_leaves(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let response = self.send_authorized(Method::GET, "/leaves", None).await?;
        Self::parse_json(response).await
    }

    pub async fn create_leave(&self, request: &CreateLeaveRequest) -> Result<LeaveRequest, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self
            .send_authorized(Method::POST, "/leaves", Some(&body))
            .await?;
        Self::parse_json(response).await
    }

    pub async fn update_leave_status(
        &self,
        leave_id: i64,
        status: &str,
    ) -> Result<LeaveRequest, ApiError> {
        let response = self
            .send_authorized(
                Method::PUT,
                &format!("/leaves/{}/status", leave_id),
                Some(&json!({ "status": status })),
            )
            .await?;
        Self::parse_json(response).await
    }
}

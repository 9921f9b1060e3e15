use reqwest::Method;
use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, TodayAttendance},
};

impl ApiClient {
    pub async fn get_today_attendance(&self) -> Result<TodayAttendance, ApiError> {
        let response = self
            .send_authorized(Method::GET, "/attendance/today", None)
            .await?;
        Self::parse_json(response).await
    }

    /// Recent records (the backend returns the trailing week).
    pub async fn get_my_history(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        let response = self
            .send_authorized(Method::GET, "/attendance/my-history", None)
            .await?;
        Self::parse_json(response).await
    }

    pub async fn check_in(&self) -> Result<AttendanceRecord, ApiError> {
        let response = self
            .send_authorized(Method::POST, "/attendance/check-in", Some(&json!({})))
            .await?;
        Self::parse_json(response).await
    }

    /// Records the check-out time; the returned record carries the work
    /// hours the backend computed.
    pub async fn check_out(&self) -> Result<AttendanceRecord, ApiError> {
        let response = self
            .send_authorized(Method::POST, "/attendance/check-out", Some(&json!({})))
            .await?;
        Self::parse_json(response).await
    }
}

use crate::api::{ApiClient, ApiError, AttendanceRecord, TodayAttendance};

pub async fn fetch_today(api: &ApiClient) -> Result<TodayAttendance, ApiError> {
    api.get_today_attendance().await
}

pub async fn fetch_history(api: &ApiClient) -> Result<Vec<AttendanceRecord>, ApiError> {
    api.get_my_history().await
}

pub async fn clock_in(api: &ApiClient) -> Result<AttendanceRecord, ApiError> {
    api.check_in().await
}

pub async fn clock_out(api: &ApiClient) -> Result<AttendanceRecord, ApiError> {
    api.check_out().await
}

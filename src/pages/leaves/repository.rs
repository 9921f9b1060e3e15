use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveRequest};

pub async fn fetch_leaves(api: &ApiClient) -> Result<Vec<LeaveRequest>, ApiError> {
    api.get_leaves().await
}

pub async fn submit_leave(
    api: &ApiClient,
    request: &CreateLeaveRequest,
) -> Result<LeaveRequest, ApiError> {
    api.create_leave(request).await
}

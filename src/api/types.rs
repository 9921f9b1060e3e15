use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Privilege level assigned by the backend. The set is closed: a persisted
/// profile carrying anything else fails to deserialize and the session is
/// treated as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }
}

/// Raw login form input. Sent form-encoded, not as JSON; the backend's
/// token endpoint follows the OAuth2 password-grant field names.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response of `POST /token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub role: Role,
    pub user_id: i64,
    pub name: String,
    pub email: String,
}

/// The authenticated actor. Either fully populated or not held at all;
/// partial sessions are never constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub employee_code: String,
}

impl SessionUser {
    pub fn from_token(response: &TokenResponse) -> Self {
        Self {
            id: response.user_id,
            email: response.email.clone(),
            name: response.name.clone(),
            role: response.role,
            employee_code: employee_code_for(response.user_id),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Display code shown across the UI, e.g. user id 7 becomes `EMP007`.
pub fn employee_code_for(user_id: i64) -> String {
    format!("EMP{:03}", user_id)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub attendance_percentage: f64,
    pub pending_leaves: i64,
    pub next_holiday: Option<String>,
    pub total_employees: i64,
    pub present_today: i64,
    pub on_leave_today: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub status: String,
    pub in_time: Option<NaiveTime>,
    pub out_time: Option<NaiveTime>,
    pub work_hours: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayAttendance {
    pub checked_in: bool,
    pub checked_out: bool,
    pub attendance: Option<AttendanceRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub leave_type: String,
    pub status: String,
    pub applied_at: NaiveDateTime,
    pub user_id: i64,
    pub user_name: Option<String>,
}

impl LeaveRequest {
    pub fn is_pending(&self) -> bool {
        self.status == leave_status::PENDING
    }
}

pub mod leave_status {
    pub const PENDING: &str = "Pending";
    pub const APPROVED: &str = "Approved";
    pub const REJECTED: &str = "Rejected";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveStatusUpdate {
    pub status: String,
}

/// Previous-month payslip computed server-side; the client only renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payslip {
    pub user_id: i64,
    pub name: String,
    pub month: String,
    pub base_salary: f64,
    pub tax: f64,
    pub deductions: f64,
    pub net_salary: f64,
    pub absent_days: i64,
    pub working_days: i64,
}

/// Every failure the data layer can hand a page. Nothing below this type
/// escapes as a panic; pages decide how to present each variant.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ApiError {
    #[error("Session expired. Please login again.")]
    SessionExpired,
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("{0}")]
    Storage(String),
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

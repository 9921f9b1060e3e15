use crate::api::CreateLeaveRequest;
use chrono::NaiveDate;

pub const LEAVE_TYPES: &[&str] = &["Annual", "Sick", "Casual", "Unpaid"];

/// Static allowances shown next to the form. The actual balance
/// arithmetic lives on the backend.
pub const LEAVE_BALANCES: &[(&str, u32)] = &[("Annual", 12), ("Sick", 8), ("Casual", 5)];

pub fn validate_leave_form(
    leave_type: &str,
    start_date: &str,
    end_date: &str,
    reason: &str,
) -> Result<CreateLeaveRequest, String> {
    if leave_type.trim().is_empty() {
        return Err("Please select a leave type".into());
    }
    let start = parse_date(start_date, "start date")?;
    let end = parse_date(end_date, "end date")?;
    if end < start {
        return Err("End date must not be before the start date".into());
    }
    let reason = reason.trim();
    if reason.is_empty() {
        return Err("Please provide a reason".into());
    }
    Ok(CreateLeaveRequest {
        leave_type: leave_type.trim().to_string(),
        start_date: start,
        end_date: end,
        reason: reason.to_string(),
    })
}

fn parse_date(raw: &str, label: &str) -> Result<NaiveDate, String> {
    if raw.trim().is_empty() {
        return Err(format!("Please pick a {label}"));
    }
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid {label}, expected YYYY-MM-DD"))
}

use crate::api::{ApiClient, ApiError, DashboardStats};

pub async fn fetch_stats(api: &ApiClient) -> Result<DashboardStats, ApiError> {
    api.get_dashboard_stats().await
}

pub struct StatEntry {
    pub title: &'static str,
    pub value: String,
    pub subtitle: Option<String>,
}

/// Cards for the current viewer. The backend already scopes the numbers
/// by role; admins additionally get the organization-wide counters.
pub fn stat_entries(stats: &DashboardStats, is_admin: bool) -> Vec<StatEntry> {
    let mut entries = vec![
        StatEntry {
            title: "Attendance",
            value: format!("{:.1}%", stats.attendance_percentage),
            subtitle: Some("This month".into()),
        },
        StatEntry {
            title: "Pending Leaves",
            value: stats.pending_leaves.to_string(),
            subtitle: None,
        },
        StatEntry {
            title: "Next Holiday",
            value: stats.next_holiday.clone().unwrap_or_else(|| "None scheduled".into()),
            subtitle: None,
        },
    ];

    if is_admin {
        entries.push(StatEntry {
            title: "Total Employees",
            value: stats.total_employees.to_string(),
            subtitle: None,
        });
        entries.push(StatEntry {
            title: "Present Today",
            value: stats.present_today.to_string(),
            subtitle: None,
        });
        entries.push(StatEntry {
            title: "On Leave Today",
            value: stats.on_leave_today.to_string(),
            subtitle: None,
        });
    }

    entries
}

use crate::api::{ApiClient, ApiError, AttendanceRecord, TodayAttendance};
use crate::pages::attendance::repository;
use crate::utils::session;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub days_present: usize,
    pub days_absent: usize,
    pub days_on_leave: usize,
}

pub fn summarize_history(records: &[AttendanceRecord]) -> HistorySummary {
    let mut summary = HistorySummary::default();
    for record in records {
        match record.status.as_str() {
            "Present" => summary.days_present += 1,
            "Absent" => summary.days_absent += 1,
            "Leave" => summary.days_on_leave += 1,
            _ => {}
        }
    }
    summary
}

/// Which punch action is currently available, straight from the today
/// snapshot. After checking out, neither action is offered again.
pub fn available_action(today: &TodayAttendance) -> Option<ClockDirection> {
    if !today.checked_in {
        Some(ClockDirection::In)
    } else if !today.checked_out {
        Some(ClockDirection::Out)
    } else {
        None
    }
}

#[derive(Clone)]
pub struct AttendanceViewModel {
    pub today_resource: Resource<u32, Result<TodayAttendance, ApiError>>,
    pub history_resource: Resource<u32, Result<Vec<AttendanceRecord>, ApiError>>,
    pub clock_action: Action<ClockDirection, Result<(), ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let refresh = create_rw_signal(0u32);
        let error = create_rw_signal(None::<ApiError>);

        let api_for_today = api.clone();
        let today_resource = create_resource(
            move || refresh.get(),
            move |_| {
                let api = api_for_today.clone();
                async move { repository::fetch_today(&api).await }
            },
        );

        let api_for_history = api.clone();
        let history_resource = create_resource(
            move || refresh.get(),
            move |_| {
                let api = api_for_history.clone();
                async move { repository::fetch_history(&api).await }
            },
        );

        let clock_action = create_action(move |direction: &ClockDirection| {
            let api = api.clone();
            let direction = *direction;
            async move {
                let result = match direction {
                    ClockDirection::In => repository::clock_in(&api).await,
                    ClockDirection::Out => repository::clock_out(&api).await,
                };
                match result {
                    Ok(_) => {
                        error.set(None);
                        // A teardown may have raced this punch; a stale
                        // success must not trigger further fetches.
                        if session::is_active() {
                            refresh.update(|token| *token = token.wrapping_add(1));
                        }
                        Ok(())
                    }
                    Err(err) => {
                        error.set(Some(err.clone()));
                        Err(err)
                    }
                }
            }
        });

        Self {
            today_resource,
            history_resource,
            clock_action,
            error,
        }
    }
}

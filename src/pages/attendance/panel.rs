use crate::components::cards::StatCard;
use crate::components::common::{Button, ButtonVariant};
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::LoadingSpinner;
use crate::pages::attendance::view_model::{
    available_action, summarize_history, AttendanceViewModel, ClockDirection,
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = AttendanceViewModel::new();
    let today_resource = vm.today_resource;
    let history_resource = vm.history_resource;
    let clock_action = vm.clock_action;
    let pending = clock_action.pending();
    let error = vm.error;

    let punch_controls = move || {
        today_resource
            .get()
            .and_then(|result| result.ok())
            .map(|today| match available_action(&today) {
                Some(ClockDirection::In) => view! {
                    <Button
                        loading={pending}
                        on:click=move |_| clock_action.dispatch(ClockDirection::In)
                    >
                        "Check In"
                    </Button>
                }
                .into_view(),
                Some(ClockDirection::Out) => view! {
                    <Button
                        variant={ButtonVariant::Danger}
                        loading={pending}
                        on:click=move |_| clock_action.dispatch(ClockDirection::Out)
                    >
                        "Check Out"
                    </Button>
                }
                .into_view(),
                None => view! {
                    <span class="text-sm text-fg-muted">"Done for today"</span>
                }
                .into_view(),
            })
            .unwrap_or_else(|| view! { <LoadingSpinner /> }.into_view())
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold text-fg">"Attendance"</h2>
                {punch_controls}
            </div>
            <InlineErrorMessage error={error.read_only().into()} />
            {move || {
                history_resource
                    .get()
                    .and_then(|result| result.ok())
                    .map(|records| {
                        let summary = summarize_history(&records);
                        view! {
                            <div class="grid grid-cols-1 sm:grid-cols-3 gap-6">
                                <StatCard title="Present" value=summary.days_present.to_string() />
                                <StatCard title="Absent" value=summary.days_absent.to_string() />
                                <StatCard title="On Leave" value=summary.days_on_leave.to_string() />
                            </div>
                            <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
                                <table class="min-w-full divide-y divide-border">
                                    <thead class="bg-surface-muted">
                                        <tr>
                                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Date"</th>
                                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"In"</th>
                                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Out"</th>
                                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Hours"</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-border">
                                        {records
                                            .iter()
                                            .map(|record| {
                                                view! {
                                                    <tr>
                                                        <td class="px-4 py-3 text-sm text-fg">{record.date.format("%Y-%m-%d").to_string()}</td>
                                                        <td class="px-4 py-3 text-sm text-fg">{record.status.clone()}</td>
                                                        <td class="px-4 py-3 text-sm text-fg-muted">{record.in_time.map(|t| t.format("%H:%M").to_string()).unwrap_or_else(|| "-".into())}</td>
                                                        <td class="px-4 py-3 text-sm text-fg-muted">{record.out_time.map(|t| t.format("%H:%M").to_string()).unwrap_or_else(|| "-".into())}</td>
                                                        <td class="px-4 py-3 text-sm text-fg-muted">{record.work_hours.clone().unwrap_or_else(|| "-".into())}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                                <Show when=move || records.is_empty()>
                                    <EmptyState
                                        title="No attendance yet"
                                        description="Records appear after your first check-in."
                                    />
                                </Show>
                            </div>
                        }
                        .into_view()
                    })
                    .unwrap_or_else(|| view! { <LoadingSpinner /> }.into_view())
            }}
        </div>
    }
}

use crate::api::ApiError;
use crate::components::cards::{StatCard, StatusBadge};
use crate::components::common::Button;
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::LoadingSpinner;
use crate::pages::leaves::utils::{validate_leave_form, LEAVE_BALANCES, LEAVE_TYPES};
use crate::pages::leaves::view_model::LeavesViewModel;
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn LeavesPage() -> impl IntoView {
    let vm = LeavesViewModel::new();
    let leaves_resource = vm.leaves_resource;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();
    let request_error = vm.error;

    let (leave_type, set_leave_type) = create_signal(String::from("Annual"));
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());
    let (reason, set_reason) = create_signal(String::new());
    let (form_error, set_form_error) = create_signal(None::<ApiError>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match validate_leave_form(
            &leave_type.get_untracked(),
            &start_date.get_untracked(),
            &end_date.get_untracked(),
            &reason.get_untracked(),
        ) {
            Ok(request) => {
                set_form_error.set(None);
                submit_action.dispatch(request);
            }
            Err(message) => set_form_error.set(Some(ApiError::validation(message))),
        }
    };

    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold text-fg">"Leaves"</h2>

            <div class="grid grid-cols-1 sm:grid-cols-3 gap-6">
                {LEAVE_BALANCES
                    .iter()
                    .map(|(kind, days)| {
                        view! {
                            <StatCard
                                title=format!("{kind} Leave")
                                value=format!("{days} days")
                                subtitle="Yearly allowance"
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h3 class="text-lg font-semibold text-fg">"Apply for leave"</h3>
                <InlineErrorMessage error={form_error.into()} />
                <InlineErrorMessage error={request_error.read_only().into()} />
                <form class="grid grid-cols-1 sm:grid-cols-2 gap-4" on:submit=handle_submit>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1">"Type"</label>
                        <select
                            class="w-full rounded-md border border-border px-3 py-2 text-sm"
                            on:change=move |ev| set_leave_type.set(event_target_value(&ev))
                        >
                            {LEAVE_TYPES
                                .iter()
                                .map(|kind| view! { <option value=*kind>{*kind}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1">"Reason"</label>
                        <input
                            type="text"
                            class="w-full rounded-md border border-border px-3 py-2 text-sm"
                            prop:value=reason
                            on:input=move |ev| set_reason.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1">"Start date"</label>
                        <input
                            type="date"
                            class="w-full rounded-md border border-border px-3 py-2 text-sm"
                            prop:value=start_date
                            on:input=move |ev| set_start_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1">"End date"</label>
                        <input
                            type="date"
                            class="w-full rounded-md border border-border px-3 py-2 text-sm"
                            prop:value=end_date
                            on:input=move |ev| set_end_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="sm:col-span-2">
                        <Button loading={pending} button_type="submit">"Submit request"</Button>
                    </div>
                </form>
            </div>

            {move || {
                leaves_resource
                    .get()
                    .and_then(|result| result.ok())
                    .map(|leaves| {
                        view! {
                            <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
                                <table class="min-w-full divide-y divide-border">
                                    <thead class="bg-surface-muted">
                                        <tr>
                                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Type"</th>
                                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"From"</th>
                                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"To"</th>
                                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Reason"</th>
                                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-border">
                                        {leaves
                                            .iter()
                                            .map(|leave| {
                                                view! {
                                                    <tr>
                                                        <td class="px-4 py-3 text-sm text-fg">{leave.leave_type.clone()}</td>
                                                        <td class="px-4 py-3 text-sm text-fg-muted">{leave.start_date.format("%Y-%m-%d").to_string()}</td>
                                                        <td class="px-4 py-3 text-sm text-fg-muted">{leave.end_date.format("%Y-%m-%d").to_string()}</td>
                                                        <td class="px-4 py-3 text-sm text-fg-muted">{leave.reason.clone()}</td>
                                                        <td class="px-4 py-3 text-sm"><StatusBadge status=leave.status.clone() /></td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                                <Show when=move || leaves.is_empty()>
                                    <EmptyState
                                        title="No leave requests"
                                        description="Requests you submit show up here."
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

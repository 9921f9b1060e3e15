use crate::api::types::leave_status;
use crate::components::cards::StatusBadge;
use crate::components::common::{Button, ButtonVariant};
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::pages::approvals::view_model::{ApprovalsViewModel, Decision};
use crate::state::leaves::pending_count;
use leptos::*;

#[component]
pub fn ApprovalsPage() -> impl IntoView {
    let vm = ApprovalsViewModel::new();
    let leaves = vm.leaves;
    let decision_action = vm.decision_action;
    let pending = decision_action.pending();
    let error = vm.error;

    let pending_label = move || {
        let count = pending_count(&leaves.get());
        format!("{count} pending")
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold text-fg">"Approval Center"</h2>
                <span class="text-sm text-fg-muted">{pending_label}</span>
            </div>
            <InlineErrorMessage error={error.read_only().into()} />
            <Show
                when=move || !leaves.get().is_empty()
                fallback=|| view! {
                    <EmptyState
                        title="Nothing to review"
                        description="Leave requests land here as employees submit them."
                    />
                }
            >
                <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Employee"</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Type"</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Dates"</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Reason"</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || leaves.get()
                                key=|leave| (leave.id, leave.status.clone())
                                children=move |leave| {
                                    let leave_id = leave.id;
                                    let is_pending = leave.is_pending();
                                    view! {
                                        <tr>
                                            <td class="px-4 py-3 text-sm text-fg">
                                                {leave.user_name.clone().unwrap_or_else(|| format!("User #{}", leave.user_id))}
                                            </td>
                                            <td class="px-4 py-3 text-sm text-fg-muted">{leave.leave_type.clone()}</td>
                                            <td class="px-4 py-3 text-sm text-fg-muted">
                                                {format!(
                                                    "{} to {}",
                                                    leave.start_date.format("%Y-%m-%d"),
                                                    leave.end_date.format("%Y-%m-%d")
                                                )}
                                            </td>
                                            <td class="px-4 py-3 text-sm text-fg-muted">{leave.reason.clone()}</td>
                                            <td class="px-4 py-3 text-sm"><StatusBadge status=leave.status.clone() /></td>
                                            <td class="px-4 py-3 text-sm">
                                                <Show when=move || is_pending>
                                                    <div class="flex gap-2">
                                                        <Button
                                                            disabled={pending}
                                                            on:click=move |_| decision_action.dispatch(Decision {
                                                                leave_id,
                                                                status: leave_status::APPROVED,
                                                            })
                                                        >
                                                            "Approve"
                                                        </Button>
                                                        <Button
                                                            variant={ButtonVariant::Danger}
                                                            disabled={pending}
                                                            on:click=move |_| decision_action.dispatch(Decision {
                                                                leave_id,
                                                                status: leave_status::REJECTED,
                                                            })
                                                        >
                                                            "Reject"
                                                        </Button>
                                                    </div>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

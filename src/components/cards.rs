use crate::api::types::leave_status;
use leptos::*;

pub fn status_badge_classes(status: &str) -> &'static str {
    match status {
        leave_status::APPROVED => "bg-status-success-bg text-status-success-text border-status-success-border",
        leave_status::REJECTED => "bg-status-error-bg text-status-error-text border-status-error-border",
        _ => "bg-status-warning-bg text-status-warning-text border-status-warning-border",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let classes = status_badge_classes(&status);
    view! {
        <span class=format!("inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium {}", classes)>
            {status}
        </span>
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <p class="text-sm font-medium text-fg-muted">{title}</p>
                <h3 class="text-3xl font-bold text-fg mt-2">{value}</h3>
                {subtitle
                    .filter(|text| !text.is_empty())
                    .map(|text| view! { <p class="text-xs text-fg-muted mt-1">{text}</p> })}
            </div>
        </div>
    }
}

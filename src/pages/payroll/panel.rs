use crate::api::ApiClient;
use crate::components::cards::StatCard;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::LoadingSpinner;
use crate::pages::payroll::repository::{self, format_amount};
use leptos::*;

#[component]
pub fn PayrollPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    let payslip_resource = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { repository::fetch_payslip(&api).await }
        },
    );

    let error = Signal::derive(move || payslip_resource.get().and_then(|result| result.err()));

    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold text-fg">"Payroll"</h2>
            <InlineErrorMessage error={error} />
            {move || {
                payslip_resource
                    .get()
                    .and_then(|result| result.ok())
                    .map(|payslip| {
                        view! {
                            <div class="bg-surface-elevated shadow rounded-lg p-6">
                                <div class="flex items-center justify-between mb-6">
                                    <div>
                                        <h3 class="text-lg font-semibold text-fg">{payslip.name.clone()}</h3>
                                        <p class="text-sm text-fg-muted">{format!("Payslip for {}", payslip.month)}</p>
                                    </div>
                                    <p class="text-sm text-fg-muted">
                                        {format!("{} of {} days worked", payslip.working_days - payslip.absent_days, payslip.working_days)}
                                    </p>
                                </div>
                                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                                    <StatCard title="Base Salary" value=format_amount(payslip.base_salary) />
                                    <StatCard title="Tax" value=format_amount(payslip.tax) />
                                    <StatCard
                                        title="Deductions"
                                        value=format_amount(payslip.deductions)
                                        subtitle=format!("{} absent days", payslip.absent_days)
                                    />
                                    <StatCard title="Net Salary" value=format_amount(payslip.net_salary) />
                                </div>
                            </div>
                        }
                        .into_view()
                    })
                    .unwrap_or_else(|| view! { <LoadingSpinner /> }.into_view())
            }}
        </div>
    }
}

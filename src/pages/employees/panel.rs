use crate::pages::employees::directory::{departments, filter_directory};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let (department, set_department) = create_signal(None::<String>);

    let filtered = move || {
        let query = query.get();
        let department = department.get();
        filter_directory(&query, department.as_deref())
    };

    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold text-fg">"Employees"</h2>

            <div class="flex flex-col sm:flex-row gap-4">
                <input
                    type="search"
                    class="flex-1 rounded-md border border-border px-3 py-2 text-sm"
                    placeholder="Search by name, email, or code"
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <select
                    class="rounded-md border border-border px-3 py-2 text-sm"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_department.set(if value.is_empty() { None } else { Some(value) });
                    }
                >
                    <option value="">"All departments"</option>
                    {departments()
                        .into_iter()
                        .map(|dept| view! { <option value=dept>{dept}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Code"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Name"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Department"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Position"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Joined"</th>
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {move || {
                            filtered()
                                .into_iter()
                                .map(|emp| {
                                    view! {
                                        <tr>
                                            <td class="px-4 py-3 text-sm text-fg-muted">{emp.code}</td>
                                            <td class="px-4 py-3 text-sm text-fg">
                                                <div>{emp.name}</div>
                                                <div class="text-xs text-fg-muted">{emp.email}</div>
                                            </td>
                                            <td class="px-4 py-3 text-sm text-fg-muted">{emp.department}</td>
                                            <td class="px-4 py-3 text-sm text-fg-muted">{emp.position}</td>
                                            <td class="px-4 py-3 text-sm text-fg-muted">{emp.join_date}</td>
                                            <td class="px-4 py-3 text-sm text-fg-muted">{emp.status}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || filtered().is_empty()>
                    <div class="py-8 text-center text-sm text-fg-muted">
                        "No employees match the current filter."
                    </div>
                </Show>
            </div>
        </div>
    }
}

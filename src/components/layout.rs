use crate::api::types::Role;
use crate::state::auth::{self, use_auth};
use crate::utils::browser;
use leptos::*;

pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub roles: &'static [Role],
}

const BOTH: &[Role] = &[Role::Employee, Role::Admin];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/dashboard", roles: BOTH },
    NavItem { label: "Attendance", path: "/attendance", roles: BOTH },
    NavItem { label: "Leaves", path: "/leaves", roles: BOTH },
    NavItem { label: "Payroll", path: "/payroll", roles: BOTH },
    NavItem { label: "Employees", path: "/employees", roles: ADMIN_ONLY },
    NavItem { label: "Approvals", path: "/approvals", roles: ADMIN_ONLY },
];

/// Menu entries whose declared roles include the current one; the admin
/// set is a strict superset of the employee set.
pub fn visible_items(role: Role) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| item.roles.contains(&role))
        .collect()
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-16">
            <span class="h-8 w-8 animate-spin rounded-full border-4 border-action-primary-bg border-t-transparent"></span>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let current_role = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.role)
            .unwrap_or(Role::Employee)
    };
    let display_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| format!("{} ({})", user.name, user.employee_code))
            .unwrap_or_default()
    };
    let role_badge = move || {
        if auth.get().is_admin() {
            "Admin Access"
        } else {
            "Employee Portal"
        }
    };
    let on_logout = move |_| {
        auth::logout(set_auth);
        browser::navigate_to("/login");
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <h1 class="text-xl font-semibold text-fg">"NexusHR"</h1>
                        <span class="text-xs rounded-full px-2 py-1 bg-surface-muted text-fg-muted">
                            {role_badge}
                        </span>
                    </div>
                    <nav class="flex items-center space-x-2">
                        <For
                            each=move || visible_items(current_role())
                            key=|item| item.path
                            children=|item| {
                                view! {
                                    <a
                                        href=item.path
                                        class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                    >
                                        {item.label}
                                    </a>
                                }
                            }
                        />
                        <span class="hidden md:inline text-sm text-fg-muted px-2">
                            {display_name}
                        </span>
                        <button
                            on:click=on_logout
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            "Logout"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Navigation shell wrapped around every protected page.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {children()}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_menu_hides_admin_entries() {
        let items = visible_items(Role::Employee);
        let labels: Vec<_> = items.iter().map(|item| item.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Attendance", "Leaves", "Payroll"]);
    }

    #[test]
    fn admin_menu_is_a_superset_of_the_employee_menu() {
        let employee: Vec<_> = visible_items(Role::Employee)
            .iter()
            .map(|item| item.path)
            .collect();
        let admin: Vec<_> = visible_items(Role::Admin)
            .iter()
            .map(|item| item.path)
            .collect();
        assert!(employee.iter().all(|path| admin.contains(path)));
        assert!(admin.contains(&"/employees"));
        assert!(admin.contains(&"/approvals"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::Header;
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{admin_user, regular_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn header_shows_admin_entries_for_admins() {
        let html = render_to_string(move || {
            let (auth, set_auth) = create_signal(AuthState {
                user: Some(admin_user()),
                is_authenticated: true,
                loading: false,
            });
            provide_context((auth, set_auth));
            view! { <Header /> }
        });
        assert!(html.contains("Approvals"));
        assert!(html.contains("Admin Access"));
    }

    #[test]
    fn header_hides_admin_entries_for_employees() {
        let html = render_to_string(move || {
            let (auth, set_auth) = create_signal(AuthState {
                user: Some(regular_user()),
                is_authenticated: true,
                loading: false,
            });
            provide_context((auth, set_auth));
            view! { <Header /> }
        });
        assert!(!html.contains("Approvals"));
        assert!(html.contains("Employee Portal"));
    }
}

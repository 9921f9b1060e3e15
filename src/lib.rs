use leptos::*;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

use api::ApiClient;
use components::guard::{RequireAdmin, RequireAuth};
use components::layout::PageShell;
use pages::{
    approvals::ApprovalsPage, attendance::AttendancePage, dashboard::DashboardPage,
    employees::EmployeesPage, leaves::LeavesPage, login::LoginPage, payroll::PayrollPage,
};
use state::auth::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiClient::new());

    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/attendance" view=ProtectedAttendance/>
                    <Route path="/leaves" view=ProtectedLeaves/>
                    <Route path="/payroll" view=ProtectedPayroll/>
                    <Route path="/employees" view=ProtectedEmployees/>
                    <Route path="/approvals" view=ProtectedApprovals/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><PageShell><DashboardPage/></PageShell></RequireAuth> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <RequireAuth><PageShell><AttendancePage/></PageShell></RequireAuth> }
}

#[component]
fn ProtectedLeaves() -> impl IntoView {
    view! { <RequireAuth><PageShell><LeavesPage/></PageShell></RequireAuth> }
}

#[component]
fn ProtectedPayroll() -> impl IntoView {
    view! { <RequireAuth><PageShell><PayrollPage/></PageShell></RequireAuth> }
}

#[component]
fn ProtectedEmployees() -> impl IntoView {
    view! { <RequireAdmin><PageShell><EmployeesPage/></PageShell></RequireAdmin> }
}

#[component]
fn ProtectedApprovals() -> impl IntoView {
    view! { <RequireAdmin><PageShell><ApprovalsPage/></PageShell></RequireAdmin> }
}

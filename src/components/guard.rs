use crate::components::layout::LoadingSpinner;
use crate::state::auth::use_auth;
use leptos::*;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Builds the login redirect, carrying the originally requested location so
/// a post-login return trip stays possible.
pub(crate) fn login_redirect_target(pathname: &str) -> String {
    if pathname.is_empty() || pathname == "/" || pathname == "/login" {
        return "/login".to_string();
    }
    format!(
        "/login?next={}",
        utf8_percent_encode(pathname, NON_ALPHANUMERIC)
    )
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let pathname = location.pathname().unwrap_or_default();
        let _ = location.set_href(&login_redirect_target(&pathname));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to_login() {}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

fn should_render_admin_children(is_authenticated: bool, is_loading: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin && !is_loading
}

/// Gates a protected subtree on session presence. While the session
/// manager is still hydrating, no navigation decision is made.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        redirect_to_login();
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Admin-only subtree: anonymous visitors go to the login view,
/// authenticated non-admins back to their dashboard.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin = create_memo(move |_| auth.get().is_admin());
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        if !state.is_authenticated {
            redirect_to_login();
        } else if !state.is_admin() {
            crate::utils::browser::navigate_to("/dashboard");
        }
    });
    view! {
        <Show
            when=move || {
                should_render_admin_children(is_authenticated.get(), is_loading.get(), is_admin.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

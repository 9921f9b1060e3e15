use crate::api::{ApiError, Credentials};
use crate::components::common::Button;
use crate::components::error::InlineErrorMessage;
use crate::pages::login::utils;
use crate::state::auth;
use crate::utils::browser;
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<ApiError>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    set_error.set(None);
                    browser::navigate_to("/dashboard");
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();

        if let Err(message) = utils::validate_credentials(&email, &password) {
            set_error.set(Some(ApiError::validation(message)));
            return;
        }

        set_error.set(None);
        login_action.dispatch(Credentials { email, password });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="max-w-md w-full bg-surface-elevated rounded-lg shadow p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-fg">"NexusHR"</h1>
                    <p class="text-sm text-fg-muted mt-1">"Sign in to your account"</p>
                </div>
                <InlineErrorMessage error={error.into()} />
                <form class="space-y-4" on:submit=handle_submit>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1" for="email">
                            "Email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class="w-full rounded-md border border-border px-3 py-2 text-sm"
                            placeholder="you@company.com"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1" for="password">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="w-full rounded-md border border-border px-3 py-2 text-sm"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <Button class="w-full" loading={pending} button_type="submit">
                        "Sign in"
                    </Button>
                </form>
            </div>
        </div>
    }
}

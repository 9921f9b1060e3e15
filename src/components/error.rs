use crate::api::ApiError;
use leptos::*;

/// Inline failure notice. Session expiry gets its own callout so users can
/// tell a forced logout from an ordinary failed fetch.
#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">
                    {move || error.get().map(|e| e.message()).unwrap_or_default()}
                </div>
                {move || {
                    error
                        .get()
                        .filter(|e| e.is_session_expired())
                        .map(|_| {
                            view! {
                                <div class="text-xs opacity-75">
                                    <a href="/login" class="underline">"Back to login"</a>
                                </div>
                            }
                            .into_view()
                        })
                        .unwrap_or_else(|| ().into_view())
                }}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_backend_message() {
        let html = render_to_string(move || {
            let error = ApiError::Backend {
                status: 400,
                message: "End date must be after start date".into(),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("End date must be after start date"));
        assert!(!html.contains("Back to login"));
    }

    #[test]
    fn session_expiry_gets_a_login_link() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::SessionExpired));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Session expired"));
        assert!(html.contains("Back to login"));
    }
}

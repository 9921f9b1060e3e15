use crate::api::ApiClient;
use crate::components::cards::StatCard;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::LoadingSpinner;
use crate::pages::dashboard::repository::{self, stat_entries};
use crate::state::auth::use_auth;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    let stats_resource = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { repository::fetch_stats(&api).await }
        },
    );

    let error = Signal::derive(move || {
        stats_resource
            .get()
            .and_then(|result| result.err())
    });
    let greeting = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| format!("Welcome back, {}", user.name))
            .unwrap_or_else(|| "Welcome back".into())
    };
    let is_admin = move || auth.get().is_admin();

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-fg">{greeting}</h2>
                <p class="text-sm text-fg-muted">"Here is what is happening today."</p>
            </div>
            <InlineErrorMessage error={error} />
            <Show
                when=move || stats_resource.get().is_some()
                fallback=|| view! { <LoadingSpinner /> }
            >
                {move || {
                    stats_resource
                        .get()
                        .and_then(|result| result.ok())
                        .map(|stats| {
                            let entries = stat_entries(&stats, is_admin());
                            view! {
                                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                                    {entries
                                        .into_iter()
                                        .map(|entry| {
                                            view! {
                                                <StatCard
                                                    title=entry.title
                                                    value=entry.value
                                                    subtitle=entry.subtitle.unwrap_or_default()
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                            .into_view()
                        })
                        .unwrap_or_else(|| ().into_view())
                }}
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_greets_the_signed_in_user() {
        let html = render_to_string(|| {
            provide_auth(Some(crate::test_support::helpers::regular_user()));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Welcome back, Morgan Member"));
    }
}

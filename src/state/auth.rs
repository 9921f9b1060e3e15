//! Session manager: the single source of truth for "who is logged in".
//!
//! Three states: hydrating (initial, `loading == true`), anonymous, and
//! authenticated. Hydration reads the persisted store exactly once per
//! process and never contacts the backend; after it completes, `loading`
//! stays false for the rest of the process lifetime.

use crate::api::{ApiClient, ApiError, Credentials, SessionUser};
use crate::utils::session;
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(SessionUser::is_admin).unwrap_or(false)
    }
}

/// Restores the session from the persisted record. Missing keys or a
/// profile that fails to deserialize read as anonymous, never as an error.
pub fn hydrate_session() -> Option<SessionUser> {
    session::load()
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        user: None,
        is_authenticated: false,
        loading: true,
    });

    // The storage read is synchronous, so hydration completes before the
    // first guarded render; the loading flag flips exactly once.
    let restored = hydrate_session();
    set_auth_state.update(|state| {
        state.is_authenticated = restored.is_some();
        state.user = restored;
        state.loading = false;
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    credentials: Credentials,
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    // On failure the signal and the persisted record are left untouched;
    // the caller gets a tagged result, never a throw.
    let user = api.login(&credentials.email, &credentials.password).await?;
    set_auth_state.update(|state| {
        state.user = Some(user);
        state.is_authenticated = true;
    });
    Ok(())
}

/// Clears the in-memory session and the persisted record. Safe to call
/// when no session exists.
pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    session::clear();
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
    });
}

pub fn use_login_action() -> Action<Credentials, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |credentials: &Credentials| {
        let payload = credentials.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
            assert!(!snapshot.is_admin());
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::types::Role;
    use crate::utils::session::testing;
    use httpmock::prelude::*;
    use serde_json::json;

    fn admin_profile_json() -> &'static str {
        r#"{"id":7,"email":"admin@company.com","name":"Admin User","role":"admin","employee_code":"EMP007"}"#
    }

    #[test]
    fn hydration_restores_a_complete_persisted_session() {
        testing::reset();
        testing::seed_raw("tok1", admin_profile_json());

        let user = hydrate_session().expect("session should restore");
        assert_eq!(user.id, 7);
        assert_eq!(user.employee_code, "EMP007");
        assert_eq!(user.role, Role::Admin);

        let state = AuthState {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        };
        assert!(state.is_admin());
    }

    #[test]
    fn hydration_of_partial_or_malformed_records_is_anonymous() {
        testing::reset();
        testing::seed_token_only("tok1");
        assert!(hydrate_session().is_none());

        testing::reset();
        testing::seed_raw("tok1", "{\"id\": 7");
        assert!(hydrate_session().is_none());

        testing::reset();
        assert!(hydrate_session().is_none());
    }

    #[test]
    fn auth_provider_hydrates_exactly_once() {
        testing::reset();
        testing::seed_raw("tok1", admin_profile_json());
        crate::test_support::ssr::with_runtime(|| {
            let (auth, _set_auth) = create_auth_context();
            let snapshot = auth.get();
            assert!(!snapshot.loading);
            assert!(snapshot.is_authenticated);
            assert!(snapshot.is_admin());
        });
    }

    #[tokio::test]
    async fn login_then_logout_then_hydrate_is_anonymous() {
        testing::reset();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/token");
            then.status(200).json_body(json!({
                "access_token": "tok1",
                "token_type": "bearer",
                "role": "employee",
                "user_id": 42,
                "name": "Sam Employee",
                "email": "sam@company.com"
            }));
        });

        let runtime = leptos::create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.base_url());

        login_request(
            Credentials {
                email: "sam@company.com".into(),
                password: "secret".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert!(!snapshot.is_admin());
        assert_eq!(
            snapshot.user.as_ref().map(|u| u.employee_code.as_str()),
            Some("EMP042")
        );

        logout(set_state);
        logout(set_state); // idempotent
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(hydrate_session().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_leaves_state_and_store_untouched() {
        testing::reset();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/token");
            then.status(401)
                .json_body(json!({ "detail": "Incorrect email or password" }));
        });

        let runtime = leptos::create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.base_url());

        let error = login_request(
            Credentials {
                email: "sam@company.com".into(),
                password: "nope".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(error.message(), "Incorrect email or password");
        assert!(!state.get().is_authenticated);
        assert!(hydrate_session().is_none());
        runtime.dispose();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::types::{employee_code_for, Role, SessionUser};
    #[cfg(not(target_arch = "wasm32"))]
    use crate::state::auth::AuthState;
    #[cfg(not(target_arch = "wasm32"))]
    use leptos::*;

    pub fn admin_user() -> SessionUser {
        SessionUser {
            id: 7,
            email: "admin@nexushr.test".into(),
            name: "Avery Admin".into(),
            role: Role::Admin,
            employee_code: employee_code_for(7),
        }
    }

    pub fn regular_user() -> SessionUser {
        SessionUser {
            id: 42,
            email: "member@nexushr.test".into(),
            name: "Morgan Member".into(),
            role: Role::Employee,
            employee_code: employee_code_for(42),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn provide_auth(
        user: Option<SessionUser>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}

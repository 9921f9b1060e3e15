use crate::api::{ApiClient, ApiError, LeaveRequest};
use crate::state::leaves::{apply_decision, reconcile};
use crate::utils::session;
use leptos::*;

#[derive(Debug, Clone)]
pub struct Decision {
    pub leave_id: i64,
    pub status: &'static str,
}

/// Approvals flow: decisions are applied to the local list immediately,
/// the PUT runs in the background, and every refetch reconciles
/// last-write-wins. A failed PUT triggers a refetch instead of a manual
/// rollback, so the list always converges on the server's view.
#[derive(Clone)]
pub struct ApprovalsViewModel {
    pub leaves: RwSignal<Vec<LeaveRequest>>,
    pub leaves_resource: Resource<u32, Result<Vec<LeaveRequest>, ApiError>>,
    pub decision_action: Action<Decision, Result<(), ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
}

impl ApprovalsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let leaves = create_rw_signal(Vec::<LeaveRequest>::new());
        let refresh = create_rw_signal(0u32);
        let error = create_rw_signal(None::<ApiError>);

        let api_for_list = api.clone();
        let leaves_resource = create_resource(
            move || refresh.get(),
            move |_| {
                let api = api_for_list.clone();
                async move { api.get_leaves().await }
            },
        );

        create_effect(move |_| {
            if let Some(Ok(fetched)) = leaves_resource.get() {
                // A fetch that outlived a forced logout must not repopulate
                // the view.
                if session::is_active() {
                    leaves.update(|local| reconcile(local, fetched));
                }
            }
        });

        let decision_action = create_action(move |decision: &Decision| {
            let api = api.clone();
            let decision = decision.clone();
            leaves.update(|local| {
                apply_decision(local, decision.leave_id, decision.status);
            });
            async move {
                match api.update_leave_status(decision.leave_id, decision.status).await {
                    Ok(_) => {
                        error.set(None);
                        if session::is_active() {
                            refresh.update(|token| *token = token.wrapping_add(1));
                        }
                        Ok(())
                    }
                    Err(err) => {
                        error.set(Some(err.clone()));
                        if !err.is_session_expired() {
                            refresh.update(|token| *token = token.wrapping_add(1));
                        }
                        Err(err)
                    }
                }
            }
        });

        Self {
            leaves,
            leaves_resource,
            decision_action,
            error,
        }
    }
}

use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveRequest};
use crate::pages::leaves::repository;
use crate::utils::session;
use leptos::*;

#[derive(Clone)]
pub struct LeavesViewModel {
    pub leaves_resource: Resource<u32, Result<Vec<LeaveRequest>, ApiError>>,
    pub submit_action: Action<CreateLeaveRequest, Result<(), ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
}

impl LeavesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let refresh = create_rw_signal(0u32);
        let error = create_rw_signal(None::<ApiError>);

        let api_for_list = api.clone();
        let leaves_resource = create_resource(
            move || refresh.get(),
            move |_| {
                let api = api_for_list.clone();
                async move { repository::fetch_leaves(&api).await }
            },
        );

        let submit_action = create_action(move |request: &CreateLeaveRequest| {
            let api = api.clone();
            let request = request.clone();
            async move {
                match repository::submit_leave(&api, &request).await {
                    Ok(_) => {
                        error.set(None);
                        if session::is_active() {
                            refresh.update(|token| *token = token.wrapping_add(1));
                        }
                        Ok(())
                    }
                    Err(err) => {
                        error.set(Some(err.clone()));
                        Err(err)
                    }
                }
            }
        });

        Self {
            leaves_resource,
            submit_action,
            error,
        }
    }
}

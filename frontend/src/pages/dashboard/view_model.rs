use super::repository::{DashboardOverview, DashboardRepository};
use crate::api::{ApiClient, ApiError};
use crate::state::auth::use_auth;
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub overview_resource: Resource<u32, Result<DashboardOverview, ApiError>>,
    pub is_admin: Signal<bool>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(DashboardRepository::new(api));
    let (auth, _) = use_auth();
    let reload = create_rw_signal(0u32);

    let overview_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.get_value();
            async move { repo.load_overview().await }
        },
    );
    let is_admin = Signal::derive(move || {
        auth.with(|state| state.user.as_ref().map(|u| u.is_admin()).unwrap_or(false))
    });

    DashboardViewModel {
        overview_resource,
        is_admin,
    }
}

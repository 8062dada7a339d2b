use crate::components::{
    filters::FilterBar,
    forms::enum_options,
    layout::{ErrorMessage, LoadingSpinner},
    table::Pagination,
};
use crate::models::leave::{LeaveStatus, LeaveType};
use crate::pages::leave::{
    components::{LeaveCreateDialog, LeaveStatsStrip, LeaveTable},
    layout::LeaveFrame,
    view_model::use_leave_list_view_model,
};
use leptos::*;

fn status_options() -> Vec<(&'static str, &'static str)> {
    LeaveStatus::FILTERABLE
        .iter()
        .map(|status| (status.as_str(), status.label()))
        .collect()
}

#[component]
pub fn LeavePage() -> impl IntoView {
    let vm = use_leave_list_view_model();

    let requests = vm.requests();
    let total = Signal::derive(move || {
        vm.requests_resource
            .get()
            .and_then(Result::ok)
            .map(|list| list.total_count())
            .unwrap_or(0)
    });
    let error = Signal::derive(move || {
        vm.requests_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.error)
    });

    view! {
        <LeaveFrame
            title="Leave requests"
            description="Submit leave, follow approvals and manage handovers and returns."
        >
            <LeaveStatsStrip stats=vm.stats_resource />
            <div class="flex flex-wrap items-center justify-between gap-3">
                <FilterBar
                    filter=vm.filter
                    search_placeholder="Search by employee or request number"
                    status_options=status_options()
                    kind_label="All leave types"
                    kind_options=enum_options(LeaveType::ALL, LeaveType::as_str, LeaveType::label)
                />
                <button
                    type="button"
                    class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text"
                    on:click=move |_| vm.open_create()
                >
                    "New leave request"
                </button>
            </div>
            {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <Show when=move || vm.requests_resource.loading().get()>
                <LoadingSpinner />
            </Show>
            <LeaveTable requests=requests />
            <Pagination page=vm.filter.page total=total per_page=vm.per_page />
            <LeaveCreateDialog
                form=vm.form
                mode=vm.create_dialog
                message=vm.create_message
                delegates=vm.delegates_resource
                pending=Signal::derive(move || vm.create_action.pending().get())
                on_submit=Callback::new(move |_| vm.submit_create())
                on_close=Callback::new(move |_| vm.close_create())
            />
        </LeaveFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ListResponse;
    use crate::pages::leave::view_model::LeaveListViewModel;
    use crate::test_support::helpers::{lawyer_user, provide_auth};
    use crate::test_support::ssr::with_runtime;
    use serde_json::json;

    #[test]
    fn status_filter_omits_unknown() {
        let options = status_options();
        assert_eq!(options.len(), LeaveStatus::FILTERABLE.len());
        assert!(options.contains(&("pending_approval", "Pending approval")));
        assert!(!options.iter().any(|(value, _)| *value == "unknown"));
    }

    #[test]
    fn page_lists_requests_with_filters() {
        let html = with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            provide_auth(Some(lawyer_user()));
            let vm = LeaveListViewModel::new();
            vm.requests_resource.set(Ok(ListResponse {
                data: vec![serde_json::from_value(json!({
                    "_id": "lr-9", "requestNumber": "LR-2025-009", "employeeName": "Maha Al-Harbi",
                    "leaveType": "sick", "status": "pending_approval",
                    "dates": { "startDate": "2025-04-10", "endDate": "2025-04-11", "totalDays": 2 }
                }))
                .unwrap()],
                total: Some(1),
                page: Some(1),
                pagination: None,
            }));
            provide_context(vm);
            let html = view! { <LeavePage /> }
                .into_view()
                .render_to_string()
                .to_string();
            leptos_reactive::suppress_resource_load(false);
            html
        });
        assert!(html.contains("Leave requests"));
        assert!(html.contains("Maha Al-Harbi"));
        assert!(html.contains("/leave/lr-9"));
        assert!(html.contains("All leave types"));
        assert!(html.contains("New leave request"));
    }
}

use crate::components::{
    bulk_action_bar::BulkActionBar,
    confirm_dialog::ConfirmDialog,
    filters::FilterBar,
    forms::enum_options,
    layout::{ErrorMessage, LoadingSpinner},
    table::Pagination,
    tabs::Tabs,
};
use crate::models::billing::{ApplicableTo, RateType};
use crate::pages::billing_rates::{
    components::{
        DuplicateGroupDialog, GroupDrawer, GroupFormDialog, GroupTable, RateFormDialog, RateStatsStrip,
        RateTable,
    },
    layout::BillingRatesFrame,
    utils::{BillingTab, DeleteTarget},
    view_model::use_billing_rates_view_model,
};
use leptos::*;

const ACTIVE_OPTIONS: [(&str, &str); 2] = [("active", "Active"), ("inactive", "Inactive")];

#[component]
pub fn BillingRatesPage() -> impl IntoView {
    let vm = use_billing_rates_view_model();

    let rates = vm.rates();
    let groups = vm.groups();
    let rates_total = Signal::derive(move || {
        vm.rates_resource
            .get()
            .and_then(Result::ok)
            .map(|list| list.total_count())
            .unwrap_or(0)
    });
    let groups_total = Signal::derive(move || {
        vm.groups_resource
            .get()
            .and_then(Result::ok)
            .map(|list| list.total_count())
            .unwrap_or(0)
    });
    let rates_error = Signal::derive(move || {
        vm.rates_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.error)
    });
    let groups_error = Signal::derive(move || {
        vm.groups_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.error)
    });
    let row_busy = Signal::derive(move || vm.toggle_active_action.pending().get());
    let selection_count = Signal::derive(move || vm.selection.with(|s| s.count()));
    let drawer_open = Signal::derive(move || vm.drawer_group.with(Option::is_some));
    let delete_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .with(|target| target.as_ref().map(DeleteTarget::message).unwrap_or_default())
    });
    let bulk_open = Signal::derive(move || vm.bulk_confirm_open.get());
    let bulk_message = Signal::derive(move || {
        format!(
            "Delete {} selected rates? This cannot be undone.",
            vm.selection.with(|s| s.count())
        )
    });

    view! {
        <BillingRatesFrame>
            <RateStatsStrip stats=vm.stats_resource />
            <Tabs
                tabs=vec![(BillingTab::Rates, "Rates"), (BillingTab::Groups, "Rate groups")]
                active=vm.active_tab
            />
            <Show
                when=move || vm.active_tab.get() == BillingTab::Rates
                fallback=move || {
                    view! {
                        <section class="space-y-4" aria-label="Rate groups">
                            <div class="flex flex-wrap items-center justify-between gap-3">
                                <FilterBar
                                    filter=vm.group_filter
                                    search_placeholder="Search groups"
                                    status_options=ACTIVE_OPTIONS.to_vec()
                                    kind_label="All targets"
                                    kind_options=enum_options(ApplicableTo::ALL, ApplicableTo::as_str, ApplicableTo::label)
                                />
                                <button
                                    type="button"
                                    class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text"
                                    on:click=move |_| vm.open_create_group()
                                >
                                    "New group"
                                </button>
                            </div>
                            {move || groups_error.get().map(|message| view! { <ErrorMessage message=message /> })}
                            <Show when=move || vm.groups_resource.loading().get()>
                                <LoadingSpinner />
                            </Show>
                            <GroupTable
                                groups=groups
                                on_open=Callback::new(move |group: crate::models::billing::RateGroup| {
                                    vm.drawer_group.set(Some(group.id))
                                })
                                on_edit=Callback::new(move |group| vm.open_edit_group(&group))
                                on_duplicate=Callback::new(move |group| vm.open_duplicate(&group))
                                on_delete=Callback::new(move |group: crate::models::billing::RateGroup| {
                                    vm.pending_delete.set(Some(DeleteTarget::Group {
                                        id: group.id,
                                        name: group.name,
                                    }))
                                })
                            />
                            <Pagination page=vm.group_filter.page total=groups_total per_page=vm.per_page />
                        </section>
                    }
                }
            >
                <section class="space-y-4" aria-label="Rates">
                    <div class="flex flex-wrap items-center justify-between gap-3">
                        <FilterBar
                            filter=vm.rate_filter
                            search_placeholder="Search rates"
                            status_options=ACTIVE_OPTIONS.to_vec()
                            kind_label="All rate types"
                            kind_options=enum_options(RateType::ALL, RateType::as_str, RateType::label)
                        />
                        <button
                            type="button"
                            class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text"
                            on:click=move |_| vm.open_create_rate()
                        >
                            "New rate"
                        </button>
                    </div>
                    <BulkActionBar
                        count=selection_count
                        on_delete=Callback::new(move |_| vm.bulk_confirm_open.set(true))
                        on_clear=Callback::new(move |_| vm.selection.update(|s| s.clear()))
                        pending=Signal::derive(move || vm.bulk_delete_action.pending().get())
                    />
                    {move || rates_error.get().map(|message| view! { <ErrorMessage message=message /> })}
                    <Show when=move || vm.rates_resource.loading().get()>
                        <LoadingSpinner />
                    </Show>
                    <RateTable
                        rates=rates
                        selection=vm.selection
                        on_edit=Callback::new(move |rate| vm.open_edit_rate(&rate))
                        on_toggle_active=Callback::new(move |rate| vm.toggle_active(&rate))
                        on_delete=Callback::new(move |rate: crate::models::billing::BillingRate| {
                            vm.pending_delete.set(Some(DeleteTarget::Rate {
                                id: rate.id,
                                name: rate.name,
                            }))
                        })
                        busy=row_busy
                    />
                    <Pagination page=vm.rate_filter.page total=rates_total per_page=vm.per_page />
                </section>
            </Show>

            <RateFormDialog
                form=vm.rate_form
                mode=vm.rate_dialog
                message=vm.rate_message
                groups=groups
                pending=Signal::derive(move || vm.save_rate_action.pending().get())
                on_submit=Callback::new(move |_| vm.submit_rate())
                on_close=Callback::new(move |_| vm.close_rate_dialog())
            />
            <GroupFormDialog
                form=vm.group_form
                mode=vm.group_dialog
                message=vm.group_message
                pending=Signal::derive(move || vm.save_group_action.pending().get())
                on_submit=Callback::new(move |_| vm.submit_group())
                on_close=Callback::new(move |_| vm.close_group_dialog())
            />
            <DuplicateGroupDialog
                form=vm.duplicate_form
                source=vm.duplicate_source
                message=vm.duplicate_message
                pending=Signal::derive(move || vm.duplicate_action.pending().get())
                on_submit=Callback::new(move |_| vm.submit_duplicate())
                on_close=Callback::new(move |_| vm.duplicate_source.set(None))
            />
            <GroupDrawer
                detail=vm.group_detail_resource
                is_open=drawer_open
                rates=rates
                pending=Signal::derive(move || vm.membership_action.pending().get())
                on_add=Callback::new(move |rate_id| vm.change_membership(rate_id, true))
                on_remove=Callback::new(move |rate_id| vm.change_membership(rate_id, false))
                on_close=Callback::new(move |_| vm.drawer_group.set(None))
            />
            <ConfirmDialog
                is_open=delete_open
                title="Confirm delete"
                message=delete_message
                confirm_label="Delete"
                destructive=true
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
            <ConfirmDialog
                is_open=bulk_open
                title="Delete selected rates"
                message=bulk_message
                confirm_label="Delete"
                destructive=true
                confirm_disabled=Signal::derive(move || vm.bulk_delete_action.pending().get())
                on_confirm=Callback::new(move |_| vm.confirm_bulk_delete())
                on_cancel=Callback::new(move |_| vm.bulk_confirm_open.set(false))
            />
        </BillingRatesFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ListResponse;
    use crate::pages::billing_rates::view_model::BillingRatesViewModel;
    use crate::test_support::helpers::{owner_user, provide_auth};
    use crate::test_support::ssr::with_runtime;
    use serde_json::json;

    fn render(tab: BillingTab) -> String {
        with_runtime(move || {
            leptos_reactive::suppress_resource_load(true);
            provide_auth(Some(owner_user()));
            let vm = BillingRatesViewModel::new();
            vm.rates_resource.set(Ok(ListResponse {
                data: vec![serde_json::from_value(json!({
                    "_id": "r1", "name": "Partner hour", "type": "hourly",
                    "category": "consultation", "amount": 1500, "currency": "SAR"
                }))
                .unwrap()],
                total: Some(1),
                page: Some(1),
                pagination: None,
            }));
            vm.groups_resource.set(Ok(ListResponse {
                data: vec![serde_json::from_value(json!({
                    "_id": "g1", "name": "Corporate clients", "applicableTo": ["clients"]
                }))
                .unwrap()],
                total: Some(1),
                page: Some(1),
                pagination: None,
            }));
            vm.active_tab.set(tab);
            provide_context(vm);
            let html = view! { <BillingRatesPage /> }
                .into_view()
                .render_to_string()
                .to_string();
            leptos_reactive::suppress_resource_load(false);
            html
        })
    }

    #[test]
    fn rates_tab_lists_rates_only() {
        let html = render(BillingTab::Rates);
        assert!(html.contains("Partner hour"));
        assert!(html.contains("New rate"));
        assert!(!html.contains("Corporate clients"));
    }

    #[test]
    fn groups_tab_lists_groups_only() {
        let html = render(BillingTab::Groups);
        assert!(html.contains("Corporate clients"));
        assert!(html.contains("New group"));
        assert!(!html.contains("Partner hour"));
    }
}

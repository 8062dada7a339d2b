use super::{
    repository::BillingRatesRepository,
    utils::{BillingTab, DeleteTarget, DuplicateFormState, GroupFormState, RateFormState},
};
use crate::api::{ApiClient, ApiError, BulkDeleteResponse, ListQuery, ListResponse};
use crate::components::{error::MessageState, filters::ListFilterState};
use crate::config;
use crate::models::billing::{
    BillingRate, DuplicateGroupPayload, RateGroup, RateGroupPayload, RatePayload, RateStats,
};
use crate::state::mutation::{
    apply_optional_bulk_delete_result, apply_optional_form_result, apply_optional_list_result,
    prune_selection,
};
use crate::state::toast::{use_toasts, ToastState};
use crate::utils::{form::FormMode, selection::RowSelection};
use leptos::*;

type ListResource<T> = Resource<(u32, ListQuery), Result<ListResponse<T>, ApiError>>;

#[derive(Clone)]
pub struct RateSave {
    pub id: Option<String>,
    pub payload: RatePayload,
}

#[derive(Clone)]
pub struct GroupSave {
    pub id: Option<String>,
    pub payload: RateGroupPayload,
}

#[derive(Clone)]
pub struct MembershipChange {
    pub group_id: String,
    pub rate_id: String,
    pub add: bool,
}

#[derive(Clone)]
pub struct DuplicateRequest {
    pub source_id: String,
    pub payload: DuplicateGroupPayload,
}

#[derive(Clone, Copy)]
pub struct BillingRatesViewModel {
    pub active_tab: RwSignal<BillingTab>,
    pub per_page: u32,
    pub rate_filter: ListFilterState,
    pub group_filter: ListFilterState,
    pub rates_resource: ListResource<BillingRate>,
    pub groups_resource: ListResource<RateGroup>,
    pub stats_resource: Resource<u32, Result<RateStats, ApiError>>,
    pub group_detail_resource: Resource<(Option<String>, u32), Result<Option<RateGroup>, ApiError>>,
    pub selection: RwSignal<RowSelection>,
    pub rate_form: RateFormState,
    pub rate_dialog: RwSignal<Option<FormMode>>,
    pub rate_message: RwSignal<MessageState>,
    pub group_form: GroupFormState,
    pub group_dialog: RwSignal<Option<FormMode>>,
    pub group_message: RwSignal<MessageState>,
    pub duplicate_form: DuplicateFormState,
    pub duplicate_source: RwSignal<Option<String>>,
    pub duplicate_message: RwSignal<MessageState>,
    pub drawer_group: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<DeleteTarget>>,
    pub bulk_confirm_open: RwSignal<bool>,
    pub save_rate_action: Action<RateSave, Result<(), ApiError>>,
    pub toggle_active_action: Action<(String, bool), Result<String, ApiError>>,
    pub delete_action: Action<DeleteTarget, Result<String, ApiError>>,
    pub bulk_delete_action: Action<Vec<String>, Result<BulkDeleteResponse, ApiError>>,
    pub save_group_action: Action<GroupSave, Result<(), ApiError>>,
    pub membership_action: Action<MembershipChange, Result<String, ApiError>>,
    pub duplicate_action: Action<DuplicateRequest, Result<(), ApiError>>,
    pub toasts: ToastState,
}

impl BillingRatesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(BillingRatesRepository::new(api));
        let toasts = use_toasts();
        let per_page = config::page_size();

        let reload = create_rw_signal(0u32);
        let active_tab = create_rw_signal(BillingTab::Rates);
        let rate_filter = ListFilterState::default();
        let group_filter = ListFilterState::default();
        let selection = create_rw_signal(RowSelection::default());
        let drawer_group = create_rw_signal(None::<String>);

        let rates_resource = create_resource(
            move || (reload.get(), rate_filter.to_query(per_page)),
            move |(_, query)| {
                let repo = repository.get_value();
                async move { repo.list_rates(query).await }
            },
        );
        let groups_resource = create_resource(
            move || (reload.get(), group_filter.to_query(per_page)),
            move |(_, query)| {
                let repo = repository.get_value();
                async move { repo.list_groups(query).await }
            },
        );
        let stats_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.stats().await }
            },
        );
        let group_detail_resource = create_resource(
            move || (drawer_group.get(), reload.get()),
            move |(group_id, _)| {
                let repo = repository.get_value();
                async move {
                    match group_id {
                        Some(id) => repo.get_group(&id).await.map(Some),
                        None => Ok(None),
                    }
                }
            },
        );

        let save_rate_action = create_action(move |input: &RateSave| {
            let repo = repository.get_value();
            let input = input.clone();
            async move { repo.save_rate(input.id, input.payload).await }
        });
        let toggle_active_action = create_action(move |(id, active): &(String, bool)| {
            let repo = repository.get_value();
            let (id, active) = (id.clone(), *active);
            async move {
                repo.set_rate_active(&id, active).await?;
                Ok(if active { "Rate activated" } else { "Rate deactivated" }.to_string())
            }
        });
        let delete_action = create_action(move |target: &DeleteTarget| {
            let repo = repository.get_value();
            let target = target.clone();
            async move {
                match target {
                    DeleteTarget::Rate { id, name } => {
                        repo.delete_rate(&id).await?;
                        Ok(format!("Deleted rate \"{}\"", name))
                    }
                    DeleteTarget::Group { id, name } => {
                        repo.delete_group(&id).await?;
                        Ok(format!("Deleted group \"{}\"", name))
                    }
                }
            }
        });
        let bulk_delete_action = create_action(move |ids: &Vec<String>| {
            let repo = repository.get_value();
            let ids = ids.clone();
            async move { repo.bulk_delete_rates(ids).await }
        });
        let save_group_action = create_action(move |input: &GroupSave| {
            let repo = repository.get_value();
            let input = input.clone();
            async move { repo.save_group(input.id, input.payload).await }
        });
        let membership_action = create_action(move |change: &MembershipChange| {
            let repo = repository.get_value();
            let change = change.clone();
            async move {
                if change.add {
                    repo.add_rate_to_group(&change.group_id, &change.rate_id).await?;
                    Ok("Rate added to group".to_string())
                } else {
                    repo.remove_rate_from_group(&change.group_id, &change.rate_id)
                        .await?;
                    Ok("Rate removed from group".to_string())
                }
            }
        });
        let duplicate_action = create_action(move |request: &DuplicateRequest| {
            let repo = repository.get_value();
            let request = request.clone();
            async move {
                repo.duplicate_group(&request.source_id, request.payload)
                    .await
                    .map(|_| ())
            }
        });

        let rate_form = RateFormState::default();
        let rate_dialog = create_rw_signal(None::<FormMode>);
        let rate_message = create_rw_signal(MessageState::default());
        let group_form = GroupFormState::default();
        let group_dialog = create_rw_signal(None::<FormMode>);
        let group_message = create_rw_signal(MessageState::default());
        let duplicate_form = DuplicateFormState::default();
        let duplicate_source = create_rw_signal(None::<String>);
        let duplicate_message = create_rw_signal(MessageState::default());
        let pending_delete = create_rw_signal(None::<DeleteTarget>);
        let bulk_confirm_open = create_rw_signal(false);

        {
            create_effect(move |_| {
                prune_selection(rates_resource.get().as_ref(), selection, |rate: &BillingRate| &rate.id);
            });
        }

        {
            create_effect(move |_| {
                if apply_optional_form_result(
                    save_rate_action.value().get(),
                    "Billing rate saved",
                    rate_dialog,
                    rate_message,
                    toasts,
                    reload,
                ) {
                    rate_form.reset();
                }
            });
        }

        {
            create_effect(move |_| {
                if apply_optional_form_result(
                    save_group_action.value().get(),
                    "Rate group saved",
                    group_dialog,
                    group_message,
                    toasts,
                    reload,
                ) {
                    group_form.reset();
                }
            });
        }

        {
            create_effect(move |_| {
                if apply_optional_form_result(
                    duplicate_action.value().get(),
                    "Rate group duplicated",
                    duplicate_source,
                    duplicate_message,
                    toasts,
                    reload,
                ) {
                    duplicate_form.reset();
                }
            });
        }

        {
            create_effect(move |_| {
                apply_optional_list_result(toggle_active_action.value().get(), toasts, reload);
            });
        }

        {
            create_effect(move |_| {
                apply_optional_list_result(membership_action.value().get(), toasts, reload);
            });
        }

        {
            create_effect(move |_| {
                let result = delete_action.value().get();
                if result.is_some() {
                    pending_delete.set(None);
                }
                apply_optional_list_result(result, toasts, reload);
            });
        }

        {
            create_effect(move |_| {
                let result = bulk_delete_action.value().get();
                if result.is_some() {
                    bulk_confirm_open.set(false);
                }
                apply_optional_bulk_delete_result(result, "rates", selection, toasts, reload);
            });
        }

        Self {
            active_tab,
            per_page,
            rate_filter,
            group_filter,
            rates_resource,
            groups_resource,
            stats_resource,
            group_detail_resource,
            selection,
            rate_form,
            rate_dialog,
            rate_message,
            group_form,
            group_dialog,
            group_message,
            duplicate_form,
            duplicate_source,
            duplicate_message,
            drawer_group,
            pending_delete,
            bulk_confirm_open,
            save_rate_action,
            toggle_active_action,
            delete_action,
            bulk_delete_action,
            save_group_action,
            membership_action,
            duplicate_action,
            toasts,
        }
    }

    pub fn rates(&self) -> Signal<Vec<BillingRate>> {
        let resource = self.rates_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(Result::ok)
                .map(|list| list.data)
                .unwrap_or_default()
        })
    }

    pub fn groups(&self) -> Signal<Vec<RateGroup>> {
        let resource = self.groups_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(Result::ok)
                .map(|list| list.data)
                .unwrap_or_default()
        })
    }

    pub fn open_create_rate(&self) {
        self.rate_form.reset();
        self.rate_message.update(|msg| msg.clear());
        self.rate_dialog.set(Some(FormMode::Create));
    }

    pub fn open_edit_rate(&self, rate: &BillingRate) {
        self.rate_form.load_from(rate);
        self.rate_message.update(|msg| msg.clear());
        self.rate_dialog.set(Some(FormMode::Edit(rate.id.clone())));
    }

    pub fn close_rate_dialog(&self) {
        self.rate_dialog.set(None);
        self.rate_form.reset();
    }

    pub fn submit_rate(&self) {
        if self.save_rate_action.pending().get_untracked() {
            return;
        }
        let Some(mode) = self.rate_dialog.get_untracked() else {
            return;
        };
        match self.rate_form.to_payload() {
            Ok(payload) => {
                self.rate_message.update(|msg| msg.clear());
                self.save_rate_action.dispatch(RateSave {
                    id: mode.id(),
                    payload,
                });
            }
            Err(err) => self.rate_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn toggle_active(&self, rate: &BillingRate) {
        self.toggle_active_action
            .dispatch((rate.id.clone(), !rate.is_active));
    }

    pub fn open_create_group(&self) {
        self.group_form.reset();
        self.group_message.update(|msg| msg.clear());
        self.group_dialog.set(Some(FormMode::Create));
    }

    pub fn open_edit_group(&self, group: &RateGroup) {
        self.group_form.load_from(group);
        self.group_message.update(|msg| msg.clear());
        self.group_dialog.set(Some(FormMode::Edit(group.id.clone())));
    }

    pub fn close_group_dialog(&self) {
        self.group_dialog.set(None);
        self.group_form.reset();
    }

    pub fn submit_group(&self) {
        if self.save_group_action.pending().get_untracked() {
            return;
        }
        let Some(mode) = self.group_dialog.get_untracked() else {
            return;
        };
        match self.group_form.to_payload() {
            Ok(payload) => {
                self.group_message.update(|msg| msg.clear());
                self.save_group_action.dispatch(GroupSave {
                    id: mode.id(),
                    payload,
                });
            }
            Err(err) => self.group_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn open_duplicate(&self, group: &RateGroup) {
        self.duplicate_form.load_from(group);
        self.duplicate_message.update(|msg| msg.clear());
        self.duplicate_source.set(Some(group.id.clone()));
    }

    pub fn submit_duplicate(&self) {
        if self.duplicate_action.pending().get_untracked() {
            return;
        }
        let Some(source_id) = self.duplicate_source.get_untracked() else {
            return;
        };
        match self.duplicate_form.to_payload() {
            Ok(payload) => self
                .duplicate_action
                .dispatch(DuplicateRequest { source_id, payload }),
            Err(err) => self.duplicate_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn change_membership(&self, rate_id: String, add: bool) {
        if let Some(group_id) = self.drawer_group.get_untracked() {
            self.membership_action.dispatch(MembershipChange {
                group_id,
                rate_id,
                add,
            });
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(target) = self.pending_delete.get_untracked() {
            if matches!(&target, DeleteTarget::Group { id, .. } if self.drawer_group.get_untracked().as_deref() == Some(id.as_str()))
            {
                self.drawer_group.set(None);
            }
            self.delete_action.dispatch(target);
        }
    }

    pub fn confirm_bulk_delete(&self) {
        let ids = self.selection.with_untracked(|s| s.ids());
        if !ids.is_empty() {
            self.bulk_delete_action.dispatch(ids);
        }
    }
}

pub fn use_billing_rates_view_model() -> BillingRatesViewModel {
    match use_context::<BillingRatesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = BillingRatesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::ssr::{wait_until, with_local_runtime_async, with_runtime};
    use serde_json::json;

    fn rate(id: &str) -> BillingRate {
        serde_json::from_value(json!({
            "_id": id, "name": format!("Rate {}", id), "nameAr": "سعر",
            "type": "hourly", "category": "consultation", "amount": 500, "currency": "SAR"
        }))
        .unwrap()
    }

    fn group(id: &str) -> RateGroup {
        serde_json::from_value(json!({ "_id": id, "name": "Corporate", "applicableTo": ["clients"] }))
            .unwrap()
    }

    #[test]
    fn switching_tabs_keeps_both_lists_loaded() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = BillingRatesViewModel::new();
            vm.rates_resource.set(Ok(ListResponse {
                data: vec![rate("r1")],
                total: Some(1),
                page: Some(1),
                pagination: None,
            }));
            vm.groups_resource.set(Ok(ListResponse {
                data: vec![group("g1")],
                total: Some(1),
                page: Some(1),
                pagination: None,
            }));

            vm.active_tab.set(BillingTab::Groups);
            assert_eq!(vm.groups().get()[0].id, "g1");
            vm.active_tab.set(BillingTab::Rates);
            assert_eq!(vm.rates().get()[0].id, "r1");
            assert_eq!(vm.groups().get().len(), 1);
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn prune_selection_drops_ids_missing_after_reload() {
        with_runtime(|| {
            let mut initial = RowSelection::default();
            initial.toggle("r1");
            initial.toggle("gone");
            let selection = create_rw_signal(initial);
            let list = Ok(ListResponse {
                data: vec![rate("r1"), rate("r2")],
                total: None,
                page: None,
                pagination: None,
            });
            prune_selection(Some(&list), selection, |rate: &BillingRate| &rate.id);
            assert_eq!(selection.get().ids(), vec!["r1".to_string()]);
        });
    }

    #[test]
    fn invalid_rate_form_is_blocked_locally() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = BillingRatesViewModel::new();
            vm.open_create_rate();
            vm.submit_rate();
            let message = vm.rate_message.get();
            assert!(message.error.map(|e| e.is_validation()).unwrap_or(false));
            assert!(vm.save_rate_action.input().get().is_none());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn open_edit_rate_loads_form_and_mode() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = BillingRatesViewModel::new();
            vm.open_edit_rate(&rate("r7"));
            assert_eq!(vm.rate_dialog.get(), Some(FormMode::Edit("r7".into())));
            assert_eq!(vm.rate_form.name_signal().get(), "Rate r7");
            vm.close_rate_dialog();
            assert!(vm.rate_dialog.get().is_none());
            assert!(vm.rate_form.name_signal().get().is_empty());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn save_and_bulk_delete_actions_call_api() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/api/billing/rates");
                then.status(200).json_body(json!({ "data": [], "total": 0 }));
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/billing/groups");
                then.status(200).json_body(json!({ "data": [] }));
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/billing/rates/stats");
                then.status(200).json_body(json!({ "totalRates": 0 }));
            });
            server.mock(|when, then| {
                when.method(POST).path("/api/billing/rates");
                then.status(201).json_body(json!({
                    "_id": "r9", "name": "Court day", "type": "flat",
                    "category": "court_appearance", "amount": 8000, "currency": "SAR"
                }));
            });
            server.mock(|when, then| {
                when.method(POST).path("/api/billing/rates/bulk-delete");
                then.status(200).json_body(json!({ "deleted": 2 }));
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));

            let vm = BillingRatesViewModel::new();
            vm.open_create_rate();
            vm.rate_form.name_signal().set("Court day".into());
            vm.rate_form.name_ar_signal().set("يوم محكمة".into());
            vm.rate_form.rate_type_signal().set("flat".into());
            vm.rate_form.category_signal().set("court_appearance".into());
            vm.rate_form.amount_signal().set("8000".into());
            vm.submit_rate();
            assert!(wait_until(|| vm.save_rate_action.value().get().is_some()).await);
            assert!(matches!(vm.save_rate_action.value().get(), Some(Ok(()))));

            vm.selection.update(|s| {
                s.toggle("r1");
                s.toggle("r2");
            });
            vm.confirm_bulk_delete();
            assert!(wait_until(|| vm.bulk_delete_action.value().get().is_some()).await);
            let sent = server.received_for(POST, "/api/billing/rates/bulk-delete");
            assert_eq!(sent[0].body, Some(json!({ "ids": ["r1", "r2"] })));

            runtime.dispose();
        });
    }
}

use super::{repository::LeadsRepository, utils::LeadFormState};
use crate::api::{ApiClient, ApiError, BulkDeleteResponse, ListQuery, ListResponse};
use crate::components::{error::MessageState, filters::ListFilterState};
use crate::config;
use crate::models::lead::{Lead, LeadPayload};
use crate::state::mutation::{
    apply_optional_bulk_delete_result, apply_optional_form_result, apply_optional_list_result,
    prune_selection,
};
use crate::state::toast::use_toasts;
use crate::utils::{form::FormMode, selection::RowSelection};
use leptos::*;

#[derive(Clone)]
pub struct LeadSave {
    pub id: Option<String>,
    pub payload: LeadPayload,
}

#[derive(Clone, Copy)]
pub struct LeadsViewModel {
    pub filter: ListFilterState,
    pub per_page: u32,
    pub leads_resource: Resource<(u32, ListQuery), Result<ListResponse<Lead>, ApiError>>,
    pub selection: RwSignal<RowSelection>,
    pub form: LeadFormState,
    pub dialog: RwSignal<Option<FormMode>>,
    pub message: RwSignal<MessageState>,
    pub pending_delete: RwSignal<Option<Lead>>,
    pub bulk_confirm_open: RwSignal<bool>,
    pub save_action: Action<LeadSave, Result<(), ApiError>>,
    pub delete_action: Action<Lead, Result<String, ApiError>>,
    pub bulk_delete_action: Action<Vec<String>, Result<BulkDeleteResponse, ApiError>>,
}

impl LeadsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(LeadsRepository::new(api));
        let toasts = use_toasts();
        let per_page = config::page_size();
        let reload = create_rw_signal(0u32);
        let filter = ListFilterState::default();
        let selection = create_rw_signal(RowSelection::default());

        let leads_resource = create_resource(
            move || (reload.get(), filter.to_query(per_page)),
            move |(_, query)| {
                let repo = repository.get_value();
                async move { repo.list(query).await }
            },
        );

        let save_action = create_action(move |input: &LeadSave| {
            let repo = repository.get_value();
            let input = input.clone();
            async move { repo.save(input.id, input.payload).await }
        });
        let delete_action = create_action(move |lead: &Lead| {
            let repo = repository.get_value();
            let lead = lead.clone();
            async move {
                repo.delete(&lead.id).await?;
                Ok(format!("Deleted lead {}", lead.full_name()))
            }
        });
        let bulk_delete_action = create_action(move |ids: &Vec<String>| {
            let repo = repository.get_value();
            let ids = ids.clone();
            async move { repo.bulk_delete(ids).await }
        });

        let form = LeadFormState::default();
        let dialog = create_rw_signal(None::<FormMode>);
        let message = create_rw_signal(MessageState::default());
        let pending_delete = create_rw_signal(None::<Lead>);
        let bulk_confirm_open = create_rw_signal(false);

        {
            create_effect(move |_| {
                prune_selection(leads_resource.get().as_ref(), selection, |lead: &Lead| &lead.id);
            });
        }

        {
            create_effect(move |_| {
                if apply_optional_form_result(
                    save_action.value().get(),
                    "Lead saved",
                    dialog,
                    message,
                    toasts,
                    reload,
                ) {
                    form.reset();
                }
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
                apply_optional_bulk_delete_result(result, "leads", selection, toasts, reload);
            });
        }

        Self {
            filter,
            per_page,
            leads_resource,
            selection,
            form,
            dialog,
            message,
            pending_delete,
            bulk_confirm_open,
            save_action,
            delete_action,
            bulk_delete_action,
        }
    }

    pub fn leads(&self) -> Signal<Vec<Lead>> {
        let resource = self.leads_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(Result::ok)
                .map(|list| list.data)
                .unwrap_or_default()
        })
    }

    pub fn open_create(&self) {
        self.form.reset();
        self.message.update(|msg| msg.clear());
        self.dialog.set(Some(FormMode::Create));
    }

    pub fn open_edit(&self, lead: &Lead) {
        self.form.load_from(lead);
        self.message.update(|msg| msg.clear());
        self.dialog.set(Some(FormMode::Edit(lead.id.clone())));
    }

    pub fn close_dialog(&self) {
        self.dialog.set(None);
        self.form.reset();
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let Some(mode) = self.dialog.get_untracked() else {
            return;
        };
        match self.form.to_payload() {
            Ok(payload) => {
                self.message.update(|msg| msg.clear());
                self.save_action.dispatch(LeadSave {
                    id: mode.id(),
                    payload,
                });
            }
            Err(err) => self.message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(lead) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(lead);
        }
    }

    pub fn confirm_bulk_delete(&self) {
        let ids = self.selection.with_untracked(|s| s.ids());
        if !ids.is_empty() {
            self.bulk_delete_action.dispatch(ids);
        }
    }
}

pub fn use_leads_view_model() -> LeadsViewModel {
    match use_context::<LeadsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeadsViewModel::new();
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

    fn lead(id: &str) -> Lead {
        serde_json::from_value(json!({
            "_id": id, "firstName": "Huda", "lastName": "Saleh",
            "source": "referral", "status": "qualified"
        }))
        .unwrap()
    }

    #[test]
    fn edit_then_close_restores_blank_form() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = LeadsViewModel::new();
            vm.open_edit(&lead("l3"));
            assert_eq!(vm.dialog.get(), Some(FormMode::Edit("l3".into())));
            assert_eq!(vm.form.status_signal().get(), "qualified");
            vm.close_dialog();
            assert!(vm.dialog.get().is_none());
            assert_eq!(vm.form.status_signal().get(), "new");
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn missing_names_block_submission() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = LeadsViewModel::new();
            vm.open_create();
            vm.submit();
            assert!(vm.message.get().error.map(|e| e.is_validation()).unwrap_or(false));
            assert!(vm.save_action.input().get().is_none());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn edit_puts_lead_and_delete_clears_confirmation() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/api/leads");
                then.status(200).json_body(json!({ "data": [], "total": 0 }));
            });
            server.mock(|when, then| {
                when.method(PUT).path("/api/leads/l3");
                then.status(200).json_body(json!({
                    "_id": "l3", "firstName": "Huda", "source": "referral", "status": "won"
                }));
            });
            server.mock(|when, then| {
                when.method(DELETE).path("/api/leads/l3");
                then.status(204);
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));

            let vm = LeadsViewModel::new();
            vm.open_edit(&lead("l3"));
            vm.form.status_signal().set("won".into());
            vm.submit();
            assert!(wait_until(|| vm.save_action.value().get().is_some()).await);
            let sent = server.received_for(PUT, "/api/leads/l3");
            assert_eq!(sent[0].body.as_ref().unwrap()["status"], "won");

            vm.pending_delete.set(Some(lead("l3")));
            vm.confirm_delete();
            assert!(wait_until(|| vm.delete_action.value().get().is_some()).await);
            assert_eq!(server.hits(DELETE, "/api/leads/l3"), 1);
            runtime.dispose();
        });
    }
}

use super::{repository::LeaveRepository, utils::LeaveFormState};
use crate::api::{ApiClient, ApiError, ListQuery, ListResponse};
use crate::components::{error::MessageState, filters::ListFilterState};
use crate::config;
use crate::models::leave::{CreateLeavePayload, LeaveRequest, LeaveStats};
use crate::models::staff::StaffMember;
use crate::state::mutation::apply_optional_form_result;
use crate::state::toast::use_toasts;
use crate::utils::form::FormMode;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LeaveListViewModel {
    pub filter: ListFilterState,
    pub per_page: u32,
    pub requests_resource: Resource<(u32, ListQuery), Result<ListResponse<LeaveRequest>, ApiError>>,
    pub stats_resource: Resource<u32, Result<LeaveStats, ApiError>>,
    pub delegates_resource: Resource<bool, Vec<StaffMember>>,
    pub form: LeaveFormState,
    pub create_dialog: RwSignal<Option<FormMode>>,
    pub create_message: RwSignal<MessageState>,
    pub create_action: Action<CreateLeavePayload, Result<(), ApiError>>,
}

impl LeaveListViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(LeaveRepository::new(api));
        let toasts = use_toasts();
        let per_page = config::page_size();
        let reload = create_rw_signal(0u32);
        let filter = ListFilterState::default();
        let create_dialog = create_rw_signal(None::<FormMode>);

        let requests_resource = create_resource(
            move || (reload.get(), filter.to_query(per_page)),
            move |(_, query)| {
                let repo = repository.get_value();
                async move { repo.list(query).await }
            },
        );
        let stats_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.stats().await }
            },
        );
        // Fetched the first time the create dialog opens.
        let delegates_resource = create_resource(
            move || create_dialog.with(Option::is_some),
            move |open| {
                let repo = repository.get_value();
                async move {
                    if open {
                        repo.delegates().await
                    } else {
                        Vec::new()
                    }
                }
            },
        );

        let create_action = create_action(move |payload: &CreateLeavePayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.create(payload).await }
        });

        let form = LeaveFormState::default();
        let create_message = create_rw_signal(MessageState::default());

        {
            create_effect(move |_| {
                if apply_optional_form_result(
                    create_action.value().get(),
                    "Leave request submitted",
                    create_dialog,
                    create_message,
                    toasts,
                    reload,
                ) {
                    form.reset();
                }
            });
        }

        Self {
            filter,
            per_page,
            requests_resource,
            stats_resource,
            delegates_resource,
            form,
            create_dialog,
            create_message,
            create_action,
        }
    }

    pub fn requests(&self) -> Signal<Vec<LeaveRequest>> {
        let resource = self.requests_resource;
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
        self.create_message.update(|msg| msg.clear());
        self.create_dialog.set(Some(FormMode::Create));
    }

    pub fn close_create(&self) {
        self.create_dialog.set(None);
    }

    pub fn submit_create(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        match self.form.to_payload() {
            Ok(payload) => {
                self.create_message.update(|msg| msg.clear());
                self.create_action.dispatch(payload);
            }
            Err(err) => self.create_message.update(|msg| msg.set_error(err)),
        }
    }
}

pub fn use_leave_list_view_model() -> LeaveListViewModel {
    match use_context::<LeaveListViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeaveListViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

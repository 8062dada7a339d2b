use super::{
    repository::StaffRepository,
    utils::{DepartureFormState, InviteFormState, StaffFormState},
};
use crate::api::{ApiClient, ApiError, BulkDeleteResponse, ListQuery, ListResponse};
use crate::components::{error::MessageState, filters::ListFilterState};
use crate::config;
use crate::models::staff::{
    DeparturePayload, InviteStaffPayload, ReinstatePayload, StaffMember, StaffPayload, StaffRole,
};
use crate::state::mutation::{
    apply_optional_bulk_delete_result, apply_optional_form_result, apply_optional_list_result,
    prune_selection,
};
use crate::state::toast::use_toasts;
use crate::utils::{
    form::{parse_choice, FormMode},
    selection::RowSelection,
};
use leptos::*;

#[derive(Clone)]
pub struct StaffSave {
    pub id: Option<String>,
    pub payload: StaffPayload,
}

#[derive(Clone)]
pub struct DepartureInput {
    pub id: String,
    pub payload: DeparturePayload,
}

#[derive(Clone)]
pub struct ReinstateInput {
    pub id: String,
    pub payload: ReinstatePayload,
}

#[derive(Clone, Copy)]
pub struct StaffViewModel {
    pub filter: ListFilterState,
    pub per_page: u32,
    pub staff_resource: Resource<(u32, ListQuery), Result<ListResponse<StaffMember>, ApiError>>,
    pub selection: RwSignal<RowSelection>,
    pub form: StaffFormState,
    pub dialog: RwSignal<Option<FormMode>>,
    pub message: RwSignal<MessageState>,
    pub invite_form: InviteFormState,
    pub invite_dialog: RwSignal<Option<()>>,
    pub invite_message: RwSignal<MessageState>,
    pub departure_form: DepartureFormState,
    pub departure_target: RwSignal<Option<StaffMember>>,
    pub departure_message: RwSignal<MessageState>,
    pub reinstate_target: RwSignal<Option<StaffMember>>,
    pub reinstate_role: RwSignal<String>,
    pub reinstate_message: RwSignal<MessageState>,
    pub pending_delete: RwSignal<Option<StaffMember>>,
    pub bulk_confirm_open: RwSignal<bool>,
    pub save_action: Action<StaffSave, Result<(), ApiError>>,
    pub invite_action: Action<InviteStaffPayload, Result<(), ApiError>>,
    pub departure_action: Action<DepartureInput, Result<(), ApiError>>,
    pub reinstate_action: Action<ReinstateInput, Result<(), ApiError>>,
    pub delete_action: Action<StaffMember, Result<String, ApiError>>,
    pub bulk_delete_action: Action<Vec<String>, Result<BulkDeleteResponse, ApiError>>,
}

impl StaffViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(StaffRepository::new(api));
        let toasts = use_toasts();
        let per_page = config::page_size();
        let reload = create_rw_signal(0u32);
        let filter = ListFilterState::default();
        let selection = create_rw_signal(RowSelection::default());

        let staff_resource = create_resource(
            move || (reload.get(), filter.to_query(per_page)),
            move |(_, query)| {
                let repo = repository.get_value();
                async move { repo.list(query).await }
            },
        );

        let save_action = create_action(move |input: &StaffSave| {
            let repo = repository.get_value();
            let input = input.clone();
            async move { repo.save(input.id, input.payload).await }
        });
        let invite_action = create_action(move |payload: &InviteStaffPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.invite(payload).await }
        });
        let departure_action = create_action(move |input: &DepartureInput| {
            let repo = repository.get_value();
            let input = input.clone();
            async move { repo.record_departure(&input.id, input.payload).await }
        });
        let reinstate_action = create_action(move |input: &ReinstateInput| {
            let repo = repository.get_value();
            let input = input.clone();
            async move { repo.reinstate(&input.id, input.payload).await }
        });
        let delete_action = create_action(move |member: &StaffMember| {
            let repo = repository.get_value();
            let member = member.clone();
            async move {
                repo.delete(&member.id).await?;
                Ok(format!("Removed {}", member.full_name()))
            }
        });
        let bulk_delete_action = create_action(move |ids: &Vec<String>| {
            let repo = repository.get_value();
            let ids = ids.clone();
            async move { repo.bulk_delete(ids).await }
        });

        let form = StaffFormState::default();
        let dialog = create_rw_signal(None::<FormMode>);
        let message = create_rw_signal(MessageState::default());
        let invite_form = InviteFormState::default();
        let invite_dialog = create_rw_signal(None::<()>);
        let invite_message = create_rw_signal(MessageState::default());
        let departure_form = DepartureFormState::default();
        let departure_target = create_rw_signal(None::<StaffMember>);
        let departure_message = create_rw_signal(MessageState::default());
        let reinstate_target = create_rw_signal(None::<StaffMember>);
        let reinstate_role = create_rw_signal(String::new());
        let reinstate_message = create_rw_signal(MessageState::default());
        let pending_delete = create_rw_signal(None::<StaffMember>);
        let bulk_confirm_open = create_rw_signal(false);

        {
            create_effect(move |_| {
                prune_selection(staff_resource.get().as_ref(), selection, |member: &StaffMember| {
                    &member.id
                });
            });
        }

        {
            create_effect(move |_| {
                if apply_optional_form_result(
                    save_action.value().get(),
                    "Staff member saved",
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
                if apply_optional_form_result(
                    invite_action.value().get(),
                    "Invitation sent",
                    invite_dialog,
                    invite_message,
                    toasts,
                    reload,
                ) {
                    invite_form.reset();
                }
            });
        }

        {
            create_effect(move |_| {
                apply_optional_form_result(
                    departure_action.value().get(),
                    "Departure recorded",
                    departure_target,
                    departure_message,
                    toasts,
                    reload,
                );
            });
        }

        {
            create_effect(move |_| {
                apply_optional_form_result(
                    reinstate_action.value().get(),
                    "Staff member reinstated",
                    reinstate_target,
                    reinstate_message,
                    toasts,
                    reload,
                );
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
                apply_optional_bulk_delete_result(result, "staff members", selection, toasts, reload);
            });
        }

        Self {
            filter,
            per_page,
            staff_resource,
            selection,
            form,
            dialog,
            message,
            invite_form,
            invite_dialog,
            invite_message,
            departure_form,
            departure_target,
            departure_message,
            reinstate_target,
            reinstate_role,
            reinstate_message,
            pending_delete,
            bulk_confirm_open,
            save_action,
            invite_action,
            departure_action,
            reinstate_action,
            delete_action,
            bulk_delete_action,
        }
    }

    pub fn staff(&self) -> Signal<Vec<StaffMember>> {
        let resource = self.staff_resource;
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

    pub fn open_edit(&self, member: &StaffMember) {
        self.form.load_from(member);
        self.message.update(|msg| msg.clear());
        self.dialog.set(Some(FormMode::Edit(member.id.clone())));
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
                self.save_action.dispatch(StaffSave {
                    id: mode.id(),
                    payload,
                });
            }
            Err(err) => self.message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn open_invite(&self) {
        self.invite_form.reset();
        self.invite_message.update(|msg| msg.clear());
        self.invite_dialog.set(Some(()));
    }

    pub fn submit_invite(&self) {
        if self.invite_action.pending().get_untracked() {
            return;
        }
        match self.invite_form.to_payload() {
            Ok(payload) => {
                self.invite_message.update(|msg| msg.clear());
                self.invite_action.dispatch(payload);
            }
            Err(err) => self.invite_message.update(|msg| msg.set_error(err)),
        }
    }

    /// Departed members cannot depart again.
    pub fn open_departure(&self, member: &StaffMember) {
        if member.is_departed() {
            return;
        }
        let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
        self.departure_form.reset(&today);
        self.departure_message.update(|msg| msg.clear());
        self.departure_target.set(Some(member.clone()));
    }

    pub fn submit_departure(&self) {
        if self.departure_action.pending().get_untracked() {
            return;
        }
        let Some(member) = self.departure_target.get_untracked() else {
            return;
        };
        match self.departure_form.to_payload() {
            Ok(payload) => {
                self.departure_message.update(|msg| msg.clear());
                self.departure_action.dispatch(DepartureInput {
                    id: member.id,
                    payload,
                });
            }
            Err(err) => self.departure_message.update(|msg| msg.set_error(err)),
        }
    }

    /// Only departed members can be reinstated; the role defaults to the one
    /// held before departure.
    pub fn open_reinstate(&self, member: &StaffMember) {
        if !member.is_departed() {
            return;
        }
        self.reinstate_role
            .set(member.reinstate_role().as_str().to_string());
        self.reinstate_message.update(|msg| msg.clear());
        self.reinstate_target.set(Some(member.clone()));
    }

    pub fn submit_reinstate(&self) {
        if self.reinstate_action.pending().get_untracked() {
            return;
        }
        let Some(member) = self.reinstate_target.get_untracked() else {
            return;
        };
        match parse_choice(&self.reinstate_role.get_untracked(), StaffRole::parse, "role") {
            Ok(role) => self.reinstate_action.dispatch(ReinstateInput {
                id: member.id,
                payload: ReinstatePayload { role },
            }),
            Err(err) => self.reinstate_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(member) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(member);
        }
    }

    pub fn confirm_bulk_delete(&self) {
        let ids = self.selection.with_untracked(|s| s.ids());
        if !ids.is_empty() {
            self.bulk_delete_action.dispatch(ids);
        }
    }
}

pub fn use_staff_view_model() -> StaffViewModel {
    match use_context::<StaffViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = StaffViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

use super::{repository::LeaveRepository, utils::LeaveDialog};
use crate::api::{ApiClient, ApiError};
use crate::components::error::MessageState;
use crate::models::leave::{available_actions, enabled_actions, LeaveAction, LeaveActionFlags, LeaveRequest};
use crate::state::mutation::bump;
use crate::state::toast::{use_toasts, ToastState};
use leptos::*;

#[derive(Clone)]
pub struct LeaveActionInput {
    pub id: String,
    pub action: LeaveAction,
}

#[derive(Clone, Copy)]
pub struct LeaveDetailViewModel {
    pub request_resource: Resource<(String, u32), Result<LeaveRequest, ApiError>>,
    pub dialog: RwSignal<Option<LeaveDialog>>,
    pub dialog_value: RwSignal<String>,
    pub dialog_message: RwSignal<MessageState>,
    pub action: Action<LeaveActionInput, Result<&'static str, ApiError>>,
    id: Signal<String>,
}

/// Closes and clears the dialog on success; on failure the dialog stays open
/// with the error shown.
fn apply_optional_action_result(
    result: Option<Result<&'static str, ApiError>>,
    dialog: RwSignal<Option<LeaveDialog>>,
    dialog_value: RwSignal<String>,
    dialog_message: RwSignal<MessageState>,
    toasts: ToastState,
    reload: RwSignal<u32>,
) {
    match result {
        Some(Ok(success)) => {
            dialog.set(None);
            dialog_value.set(String::new());
            dialog_message.update(|msg| msg.clear());
            toasts.success(success);
            bump(reload);
        }
        Some(Err(err)) => {
            toasts.error(&err);
            dialog_message.update(|msg| msg.set_error(err));
        }
        None => {}
    }
}

impl LeaveDetailViewModel {
    pub fn new(id: Signal<String>) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(LeaveRepository::new(api));
        let toasts = use_toasts();
        let reload = create_rw_signal(0u32);

        let request_resource = create_resource(
            move || (id.get(), reload.get()),
            move |(id, _)| {
                let repo = repository.get_value();
                async move { repo.get(&id).await }
            },
        );
        let action = create_action(move |input: &LeaveActionInput| {
            let repo = repository.get_value();
            let input = input.clone();
            async move {
                repo.perform(&input.id, &input.action).await?;
                Ok(input.action.success_message())
            }
        });

        let dialog = create_rw_signal(None::<LeaveDialog>);
        let dialog_value = create_rw_signal(String::new());
        let dialog_message = create_rw_signal(MessageState::default());

        {
            create_effect(move |_| {
                apply_optional_action_result(
                    action.value().get(),
                    dialog,
                    dialog_value,
                    dialog_message,
                    toasts,
                    reload,
                );
            });
        }

        Self {
            request_resource,
            dialog,
            dialog_value,
            dialog_message,
            action,
            id,
        }
    }

    pub fn request(&self) -> Signal<Option<LeaveRequest>> {
        let resource = self.request_resource;
        Signal::derive(move || resource.get().and_then(Result::ok))
    }

    /// Actions the request's status offers.
    pub fn visible_actions(&self) -> Signal<LeaveActionFlags> {
        let request = self.request();
        Signal::derive(move || {
            request
                .with(|request| request.as_ref().map(available_actions))
                .unwrap_or_default()
        })
    }

    /// Same as `visible_actions`, but nothing while an action is in flight.
    pub fn enabled_actions(&self) -> Signal<LeaveActionFlags> {
        let request = self.request();
        let pending = self.action.pending();
        Signal::derive(move || {
            request
                .with(|request| {
                    request
                        .as_ref()
                        .map(|request| enabled_actions(request, pending.get()))
                })
                .unwrap_or_default()
        })
    }

    pub fn open_dialog(&self, dialog: LeaveDialog) {
        let initial = match dialog {
            LeaveDialog::ConfirmReturn => chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            _ => String::new(),
        };
        self.dialog_value.set(initial);
        self.dialog_message.update(|msg| msg.clear());
        self.dialog.set(Some(dialog));
    }

    pub fn close_dialog(&self) {
        self.dialog.set(None);
        self.dialog_value.set(String::new());
    }

    pub fn submit_dialog(&self, value: String) {
        let Some(dialog) = self.dialog.get_untracked() else {
            return;
        };
        match dialog.build_action(&value) {
            Ok(action) => self.dispatch(action),
            Err(err) => self.dialog_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn complete_handover(&self) {
        self.dispatch(LeaveAction::CompleteHandover);
    }

    fn dispatch(&self, action: LeaveAction) {
        if self.action.pending().get_untracked() {
            return;
        }
        self.action.dispatch(LeaveActionInput {
            id: self.id.get_untracked(),
            action,
        });
    }
}

pub fn use_leave_detail_view_model(id: Signal<String>) -> LeaveDetailViewModel {
    match use_context::<LeaveDetailViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeaveDetailViewModel::new(id);
            provide_context(vm);
            vm
        }
    }
}

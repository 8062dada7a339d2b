use crate::components::{
    error::{MessageBanner, MessageState},
    forms::{enum_options, SelectField, TextField},
    modal::Modal,
};
use crate::models::staff::{StaffRole, StaffStatus};
use crate::pages::staff::utils::StaffFormState;
use crate::utils::form::FormMode;
use leptos::ev::SubmitEvent;
use leptos::*;

pub fn dialog_title(mode: Option<&FormMode>) -> &'static str {
    match mode {
        Some(FormMode::Edit(_)) => "Edit staff member",
        _ => "Add staff member",
    }
}

pub fn role_options() -> Vec<(&'static str, &'static str)> {
    enum_options(StaffRole::ASSIGNABLE, StaffRole::as_str, StaffRole::label)
}

#[component]
pub fn StaffFormDialog(
    form: StaffFormState,
    mode: RwSignal<Option<FormMode>>,
    message: RwSignal<MessageState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || mode.with(Option::is_some));
    let title = Signal::derive(move || mode.with(|m| dialog_title(m.as_ref())).to_string());

    view! {
        <Modal is_open=is_open title=title on_close=on_close>
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <MessageBanner state=message />
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <TextField label="First name" value=form.first_name_signal() required=true />
                    <TextField label="Last name" value=form.last_name_signal() required=true />
                    <TextField label="Email" value=form.email_signal() input_type="email" required=true />
                    <TextField label="Phone" value=form.phone_signal() input_type="tel" />
                    <SelectField label="Role" value=form.role_signal() options=role_options() required=true />
                    <SelectField
                        label="Status"
                        value=form.status_signal()
                        options=enum_options(StaffStatus::ALL, StaffStatus::as_str, StaffStatus::label)
                        required=true
                    />
                </div>
                <TextField label="Specialization" value=form.specialization_signal() placeholder="Commercial litigation" />
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class="rounded-md border border-border px-4 py-2 text-sm"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_options_exclude_owner_and_departed() {
        let options = role_options();
        assert!(!options.iter().any(|(value, _)| *value == "owner" || *value == "departed"));
        assert_eq!(options[0], ("admin", "Administrator"));
    }
}

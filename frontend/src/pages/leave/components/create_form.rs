use crate::components::{
    error::{MessageBanner, MessageState},
    forms::{enum_options, SelectField, TextAreaField, TextField},
    modal::Modal,
};
use crate::models::leave::LeaveType;
use crate::models::staff::StaffMember;
use crate::pages::leave::utils::LeaveFormState;
use crate::utils::form::FormMode;
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn LeaveCreateDialog(
    form: LeaveFormState,
    mode: RwSignal<Option<FormMode>>,
    message: RwSignal<MessageState>,
    delegates: Resource<bool, Vec<StaffMember>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || mode.with(Option::is_some));
    let delegate_id = form.delegate_id_signal();

    view! {
        <Modal is_open=is_open title="New leave request" on_close=on_close>
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <MessageBanner state=message />
                <SelectField
                    label="Leave type"
                    value=form.leave_type_signal()
                    options=enum_options(LeaveType::ALL, LeaveType::as_str, LeaveType::label)
                    required=true
                />
                <div class="grid grid-cols-2 gap-4">
                    <TextField label="Start date" value=form.start_date_signal() input_type="date" required=true />
                    <TextField label="End date" value=form.end_date_signal() input_type="date" required=true />
                </div>
                <TextAreaField label="Reason" value=form.reason_signal() rows=3 />
                <label class="block text-sm font-medium text-fg-muted">
                    "Handover delegate"
                    <select
                        class="mt-1 w-full rounded-md border border-form-control-border bg-form-control-bg p-2 text-sm"
                        prop:value=move || delegate_id.get()
                        on:change=move |ev| delegate_id.set(event_target_value(&ev))
                    >
                        <option value="">"No delegate"</option>
                        {move || {
                            delegates
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|member| {
                                    let name = member.full_name();
                                    view! { <option value=member.id>{name}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
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
                        {move || if pending.get() { "Submitting..." } else { "Submit request" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

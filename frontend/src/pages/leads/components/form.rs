use crate::components::{
    error::{MessageBanner, MessageState},
    forms::{enum_options, SelectField, TextAreaField, TextField},
    modal::Modal,
};
use crate::models::lead::{LeadSource, LeadStatus};
use crate::pages::leads::utils::LeadFormState;
use crate::utils::form::FormMode;
use leptos::ev::SubmitEvent;
use leptos::*;

pub fn dialog_title(mode: Option<&FormMode>) -> &'static str {
    match mode {
        Some(FormMode::Edit(_)) => "Edit lead",
        _ => "New lead",
    }
}

#[component]
pub fn LeadFormDialog(
    form: LeadFormState,
    mode: RwSignal<Option<FormMode>>,
    message: RwSignal<MessageState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || mode.with(Option::is_some));
    let title = Signal::derive(move || mode.with(|m| dialog_title(m.as_ref())).to_string());
    let show_advanced = form.show_advanced_signal();

    view! {
        <Modal is_open=is_open title=title on_close=on_close wide=true>
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
                    <TextField label="Email" value=form.email_signal() input_type="email" />
                    <TextField label="Phone" value=form.phone_signal() input_type="tel" />
                    <TextField label="Company" value=form.company_signal() />
                    <TextField label="Case type" value=form.case_type_signal() placeholder="commercial, family, labour" />
                    <SelectField
                        label="Source"
                        value=form.source_signal()
                        options=enum_options(LeadSource::ALL, LeadSource::as_str, LeadSource::label)
                        required=true
                    />
                    <SelectField
                        label="Status"
                        value=form.status_signal()
                        options=enum_options(LeadStatus::ALL, LeadStatus::as_str, LeadStatus::label)
                        required=true
                    />
                    <TextField label="Estimated value" value=form.estimated_value_signal() input_type="number" />
                    <TextField label="Expected close date" value=form.expected_close_date_signal() input_type="date" />
                    <TextField label="Assigned to" value=form.assigned_to_signal() placeholder="Staff member id" />
                </div>
                <TextAreaField label="Description" value=form.description_signal() rows=2 />
                <TextAreaField label="Notes" value=form.notes_signal() rows=2 />
                <button
                    type="button"
                    class="text-sm font-medium text-action-primary-bg hover:underline"
                    aria-expanded=move || show_advanced.get().to_string()
                    on:click=move |_| show_advanced.update(|open| *open = !*open)
                >
                    {move || if show_advanced.get() { "Hide advanced fields" } else { "Show advanced fields" }}
                </button>
                <Show when=move || show_advanced.get()>
                    <fieldset class="grid grid-cols-1 gap-4 rounded-md border border-border p-4 md:grid-cols-2">
                        <legend class="px-1 text-sm font-medium text-fg-muted">"Tracking and CRM"</legend>
                        <TextField label="UTM source" value=form.utm_source_signal() />
                        <TextField label="UTM medium" value=form.utm_medium_signal() />
                        <TextField label="UTM campaign" value=form.utm_campaign_signal() />
                        <TextField label="Territory" value=form.territory_signal() />
                        <TextField label="Sales team" value=form.sales_team_signal() />
                        <TextField label="External CRM id" value=form.external_crm_id_signal() />
                        <TextField label="Tags" value=form.tags_signal() placeholder="Comma separated" />
                    </fieldset>
                </Show>
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
                        {move || if pending.get() { "Saving..." } else { "Save lead" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

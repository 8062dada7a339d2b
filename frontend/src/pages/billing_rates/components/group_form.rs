use crate::components::{
    error::{MessageBanner, MessageState},
    forms::{CheckboxField, TextAreaField, TextField},
    modal::Modal,
};
use crate::models::billing::ApplicableTo;
use crate::pages::billing_rates::utils::GroupFormState;
use crate::utils::form::FormMode;
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn GroupFormDialog(
    form: GroupFormState,
    mode: RwSignal<Option<FormMode>>,
    message: RwSignal<MessageState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || mode.with(Option::is_some));
    let title = Signal::derive(move || {
        if mode.with(|m| m.as_ref().map(FormMode::is_edit).unwrap_or(false)) {
            "Edit rate group".to_string()
        } else {
            "New rate group".to_string()
        }
    });
    let color = form.color_signal();
    let targets = form.applicable_to_signal();

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
                    <TextField label="Name" value=form.name_signal() required=true />
                    <TextField label="Arabic name" value=form.name_ar_signal() required=true />
                    <label class="block text-sm font-medium text-fg-muted">
                        "Color"
                        <div class="mt-1 flex items-center gap-2">
                            <input
                                type="color"
                                class="h-9 w-12 rounded border border-form-control-border"
                                prop:value=move || color.get()
                                on:input=move |ev| color.set(event_target_value(&ev))
                            />
                            <input
                                type="text"
                                class="flex-1 rounded-md border border-form-control-border bg-form-control-bg p-2 text-sm"
                                prop:value=move || color.get()
                                on:input=move |ev| color.set(event_target_value(&ev))
                            />
                        </div>
                    </label>
                    <TextField label="Discount (%)" value=form.discount_signal() input_type="number" placeholder="0 - 100" />
                </div>
                <fieldset class="space-y-2">
                    <legend class="text-sm font-medium text-fg-muted">
                        "Applies to"
                        <span class="text-status-error-text">{" *"}</span>
                    </legend>
                    <div class="flex gap-4">
                        {ApplicableTo::ALL
                            .iter()
                            .copied()
                            .map(|target| {
                                view! {
                                    <label class="inline-flex items-center gap-2 text-sm text-fg">
                                        <input
                                            type="checkbox"
                                            class="rounded border-form-control-border"
                                            prop:checked=move || targets.with(|t| t.contains(&target))
                                            on:change=move |_| form.toggle_target(target)
                                        />
                                        {target.label()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </fieldset>
                <TextAreaField label="Description" value=form.description_signal() rows=2 />
                <TextAreaField label="Arabic description" value=form.description_ar_signal() rows=2 />
                <div class="flex gap-6">
                    <CheckboxField label="Default group" checked=form.is_default_signal() />
                    <CheckboxField label="Active" checked=form.is_active_signal() />
                </div>
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
                        {move || if pending.get() { "Saving..." } else { "Save group" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

use crate::components::{
    error::{MessageBanner, MessageState},
    forms::{enum_options, CheckboxField, SelectField, TextAreaField, TextField},
    modal::Modal,
};
use crate::models::billing::{Currency, RateCategory, RateGroup, RateType};
use crate::pages::billing_rates::utils::RateFormState;
use crate::utils::form::FormMode;
use leptos::ev::SubmitEvent;
use leptos::*;

pub fn dialog_title(mode: Option<&FormMode>) -> &'static str {
    match mode {
        Some(FormMode::Edit(_)) => "Edit billing rate",
        _ => "New billing rate",
    }
}

#[component]
pub fn RateFormDialog(
    form: RateFormState,
    mode: RwSignal<Option<FormMode>>,
    message: RwSignal<MessageState>,
    groups: Signal<Vec<RateGroup>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || mode.with(Option::is_some));
    let title = Signal::derive(move || mode.with(|m| dialog_title(m.as_ref())).to_string());
    let group_id = form.group_id_signal();

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
                    <SelectField
                        label="Rate type"
                        value=form.rate_type_signal()
                        options=enum_options(RateType::ALL, RateType::as_str, RateType::label)
                        required=true
                    />
                    <SelectField
                        label="Category"
                        value=form.category_signal()
                        options=enum_options(RateCategory::ALL, RateCategory::as_str, RateCategory::label)
                        required=true
                    />
                    <TextField label="Amount" value=form.amount_signal() input_type="number" required=true />
                    <SelectField
                        label="Currency"
                        value=form.currency_signal()
                        options=enum_options(Currency::ALL, Currency::as_str, Currency::label)
                        required=true
                    />
                    <TextField label="Unit" value=form.unit_signal() placeholder="hour, page, session" />
                    <TextField label="Minimum charge" value=form.minimum_charge_signal() input_type="number" />
                    <TextField
                        label="Rounding increment"
                        value=form.rounding_increment_signal()
                        input_type="number"
                        placeholder="0.25"
                    />
                    <label class="block text-sm font-medium text-fg-muted">
                        "Group"
                        <select
                            class="mt-1 w-full rounded-md border border-form-control-border bg-form-control-bg p-2 text-sm"
                            prop:value=move || group_id.get()
                            on:change=move |ev| group_id.set(event_target_value(&ev))
                        >
                            <option value="">"No group"</option>
                            {move || {
                                groups
                                    .get()
                                    .into_iter()
                                    .map(|group| {
                                        let id = group.id.clone();
                                        let selected = group_id.get() == id;
                                        view! { <option value=id selected=selected>{group.name}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                </div>
                <TextAreaField label="Description" value=form.description_signal() rows=2 />
                <TextAreaField label="Arabic description" value=form.description_ar_signal() rows=2 />
                <CheckboxField label="Active" checked=form.is_active_signal() />
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
                        {move || if pending.get() { "Saving..." } else { "Save rate" }}
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
    fn title_follows_mode() {
        assert_eq!(dialog_title(None), "New billing rate");
        assert_eq!(dialog_title(Some(&FormMode::Create)), "New billing rate");
        assert_eq!(
            dialog_title(Some(&FormMode::Edit("r1".into()))),
            "Edit billing rate"
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn edit_dialog_lists_groups_and_currencies() {
        let html = render_to_string(|| {
            let form = RateFormState::default();
            let group: RateGroup =
                serde_json::from_value(json!({ "_id": "g1", "name": "Litigation" })).unwrap();
            view! {
                <RateFormDialog
                    form=form
                    mode=create_rw_signal(Some(FormMode::Edit("r1".into())))
                    message=create_rw_signal(MessageState::default())
                    groups=Signal::derive(move || vec![group.clone()])
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Edit billing rate"));
        assert!(html.contains("Litigation"));
        assert!(html.contains("Saudi riyal"));
        assert!(html.contains("Save rate"));
    }
}

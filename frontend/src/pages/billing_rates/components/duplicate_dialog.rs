use crate::components::{
    error::{MessageBanner, MessageState},
    forms::TextField,
    modal::Modal,
};
use crate::pages::billing_rates::utils::DuplicateFormState;
use leptos::ev::SubmitEvent;
use leptos::*;

/// Copies a group with its rates under a new name.
#[component]
pub fn DuplicateGroupDialog(
    form: DuplicateFormState,
    source: RwSignal<Option<String>>,
    message: RwSignal<MessageState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || source.with(Option::is_some));

    view! {
        <Modal is_open=is_open title="Duplicate rate group" on_close=on_close>
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <MessageBanner state=message />
                <TextField label="New name" value=form.name_signal() required=true />
                <TextField label="New Arabic name" value=form.name_ar_signal() required=true />
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
                        "Duplicate"
                    </button>
                </div>
            </form>
        </Modal>
    }
}

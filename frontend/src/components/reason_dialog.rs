//! Modal that collects a free-text reason (or date) before a workflow action.

use super::confirm_dialog::confirm_class;
use crate::api::ApiError;
use crate::components::error::InlineErrorMessage;
use leptos::ev::KeyboardEvent;
use leptos::*;

/// Submit is allowed only for a non-blank value when `required` is set.
pub fn can_submit(value: &str, required: bool, pending: bool) -> bool {
    !pending && (!required || !value.trim().is_empty())
}

#[component]
pub fn ReasonDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    on_submit: Callback<String>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] submit_label: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] destructive: bool,
    /// `"textarea"` (default) or an `<input>` type such as `"date"`.
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
    #[prop(optional, into)] error: Option<Signal<Option<ApiError>>>,
) -> impl IntoView {
    let submit_label = submit_label.unwrap_or_else(|| "Submit".to_string());
    let input_type = input_type.unwrap_or_else(|| "textarea".to_string());
    let error = error.unwrap_or_else(|| Signal::derive(|| None));
    let submit_enabled = move || can_submit(&value.get(), required, pending.get());
    let submit_class = confirm_class(destructive);

    view! {
        <Show when=move || is_open.get()>
            {
                let title = title.clone();
                let label = label.clone();
                let submit_label = submit_label.clone();
                let input_type = input_type.clone();
                view! {
                    <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                        <div class="absolute inset-0 bg-overlay-backdrop"></div>
                        <div
                            class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                            role="dialog"
                            aria-modal="true"
                            on:keydown=move |ev: KeyboardEvent| {
                                if ev.key() == "Escape" {
                                    on_cancel.call(());
                                }
                            }
                        >
                            <h2 class="text-lg font-semibold text-fg">{title}</h2>
                            <label class="block text-sm font-medium text-fg-muted">
                                {label}
                                {required.then(|| view! { <span class="text-status-error-text">{" *"}</span> })}
                            </label>
                            {if input_type == "textarea" {
                                view! {
                                    <textarea
                                        class="w-full rounded-md border border-form-control-border bg-form-control-bg p-2 text-sm"
                                        rows="4"
                                        prop:value=move || value.get()
                                        on:input=move |ev| value.set(event_target_value(&ev))
                                    ></textarea>
                                }
                                .into_view()
                            } else {
                                view! {
                                    <input
                                        type=input_type
                                        class="w-full rounded-md border border-form-control-border bg-form-control-bg p-2 text-sm"
                                        prop:value=move || value.get()
                                        on:input=move |ev| value.set(event_target_value(&ev))
                                    />
                                }
                                .into_view()
                            }}
                            <InlineErrorMessage error=error />
                            <div class="flex justify-end gap-2">
                                <button
                                    type="button"
                                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                                    disabled=move || pending.get()
                                    on:click=move |_| on_cancel.call(())
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="button"
                                    class=submit_class
                                    disabled=move || !submit_enabled()
                                    on:click=move |_| {
                                        if submit_enabled() {
                                            on_submit.call(value.get_untracked());
                                        }
                                    }
                                >
                                    {submit_label}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            }
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{has_bool_attr, render_to_string};

    fn render_with(reason: &'static str) -> String {
        render_to_string(move || {
            let value = create_rw_signal(reason.to_string());
            view! {
                <ReasonDialog
                    is_open=Signal::derive(|| true)
                    title="Reject leave request"
                    label="Reason"
                    value=value
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    submit_label="Reject"
                    required=true
                    destructive=true
                />
            }
        })
    }

    fn submit_button(html: &str) -> &str {
        let end = html.find(">Reject<").expect("submit button");
        let start = html[..end].rfind("<button").expect("button start");
        &html[start..end]
    }

    #[test]
    fn submit_disabled_while_reason_empty() {
        let html = render_with("");
        assert!(has_bool_attr(submit_button(&html), "disabled"));
    }

    #[test]
    fn submit_enabled_once_reason_entered() {
        let html = render_with("Overlaps with trial date");
        assert!(!has_bool_attr(submit_button(&html), "disabled"));
    }
}

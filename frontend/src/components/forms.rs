//! Labelled form controls bound to `RwSignal<String>` form state.

use leptos::*;

const CONTROL_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus disabled:opacity-50";

#[component]
fn FieldLabel(label: &'static str, required: bool) -> impl IntoView {
    view! {
        <span class="text-sm font-medium text-fg-muted">
            {label}
            {required.then(|| view! { <span class="text-status-error-text">{" *"}</span> })}
        </span>
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="block">
            <FieldLabel label=label required=required />
            <input
                type=input_type.unwrap_or("text")
                class=CONTROL_CLASS
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="block">
            <FieldLabel label=label required=required />
            <textarea
                class=CONTROL_CLASS
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// `<select>` over `(value, label)` pairs; an empty `placeholder` option is
/// prepended when given.
#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    options: Vec<(&'static str, &'static str)>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="block">
            <FieldLabel label=label required=required />
            <select
                class=CONTROL_CLASS
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {options
                    .into_iter()
                    .map(|(option, text)| {
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn CheckboxField(label: &'static str, checked: RwSignal<bool>) -> impl IntoView {
    view! {
        <label class="inline-flex items-center gap-2 text-sm text-fg">
            <input
                type="checkbox"
                class="rounded border-form-control-border"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

/// Options helper for `wire_enum!` types.
pub fn enum_options<T: Copy>(
    all: &'static [T],
    as_str: fn(&T) -> &'static str,
    label: fn(&T) -> &'static str,
) -> Vec<(&'static str, &'static str)> {
    all.iter().map(|item| (as_str(item), label(item))).collect()
}

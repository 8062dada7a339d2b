use crate::components::{
    common::Button,
    error::{MessageBanner, MessageState},
    forms::{enum_options, CheckboxField, SelectField, TextAreaField, TextField},
};
use crate::models::settings::ExportFormat;
use crate::pages::settings::utils::{BrandingFormState, PrivacyFormState, SecurityFormState};
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
fn SectionCard(
    title: &'static str,
    description: &'static str,
    message: RwSignal<MessageState>,
    pending: Signal<bool>,
    on_save: Callback<()>,
    children: Children,
) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_save.call(());
    };
    view! {
        <form class="space-y-4 rounded-lg bg-surface-elevated p-6 shadow" on:submit=on_submit>
            <div>
                <h2 class="text-lg font-semibold text-fg">{title}</h2>
                <p class="text-sm text-fg-muted">{description}</p>
            </div>
            <MessageBanner state=message />
            {children()}
            <div class="flex justify-end">
                <Button button_type="submit" loading=pending>
                    {move || if pending.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </form>
    }
}

#[component]
pub fn SecuritySection(
    form: SecurityFormState,
    message: RwSignal<MessageState>,
    pending: Signal<bool>,
    on_save: Callback<()>,
) -> impl IntoView {
    view! {
        <SectionCard
            title="Security"
            description="Sign-in requirements for everyone in the firm."
            message=message
            pending=pending
            on_save=on_save
        >
            <CheckboxField label="Require multi-factor authentication" checked=form.mfa_required_signal() />
            <div class="grid gap-4 sm:grid-cols-2">
                <TextField
                    label="Session timeout (minutes)"
                    value=form.session_timeout_signal()
                    input_type="number"
                    required=true
                />
                <TextField
                    label="Minimum password length"
                    value=form.password_min_length_signal()
                    input_type="number"
                    required=true
                />
            </div>
            <TextAreaField label="IP whitelist (one address per line)" value=form.ip_whitelist_signal() rows=4 />
        </SectionCard>
    }
}

#[component]
pub fn BrandingSection(
    form: BrandingFormState,
    message: RwSignal<MessageState>,
    pending: Signal<bool>,
    on_save: Callback<()>,
) -> impl IntoView {
    let primary = form.primary_color_signal();
    let secondary = form.secondary_color_signal();
    view! {
        <SectionCard
            title="Branding"
            description="Names, colours and logo shown on invoices and the client portal."
            message=message
            pending=pending
            on_save=on_save
        >
            <div class="grid gap-4 sm:grid-cols-2">
                <TextField label="Company name" value=form.company_name_signal() required=true />
                <TextField label="Company name (Arabic)" value=form.company_name_ar_signal() />
                <TextField label="Primary colour" value=primary placeholder="#1e40af" />
                <TextField label="Secondary colour" value=secondary placeholder="#64748b" />
            </div>
            <div class="flex items-center gap-3 text-sm text-fg-muted" aria-label="Colour preview">
                <span class="h-6 w-6 rounded border border-border" style:background-color=move || primary.get()></span>
                <span class="h-6 w-6 rounded border border-border" style:background-color=move || secondary.get()></span>
            </div>
            <TextField label="Logo URL" value=form.custom_logo_signal() input_type="url" placeholder="https://" />
        </SectionCard>
    }
}

#[component]
pub fn PrivacySection(
    form: PrivacyFormState,
    message: RwSignal<MessageState>,
    pending: Signal<bool>,
    on_save: Callback<()>,
) -> impl IntoView {
    view! {
        <SectionCard
            title="Privacy"
            description="How long records are kept and how exports are produced."
            message=message
            pending=pending
            on_save=on_save
        >
            <div class="grid gap-4 sm:grid-cols-2">
                <TextField
                    label="Data retention (days)"
                    value=form.data_retention_days_signal()
                    input_type="number"
                    required=true
                />
                <SelectField
                    label="Export format"
                    value=form.data_export_format_signal()
                    options=enum_options(ExportFormat::ALL, ExportFormat::as_str, ExportFormat::label)
                    required=true
                />
            </div>
            <CheckboxField
                label="Anonymize personal data of departed staff"
                checked=form.anonymize_departed_signal()
            />
        </SectionCard>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{element_containing, has_bool_attr, render_to_string, with_runtime};

    #[test]
    fn pending_section_disables_its_save_button() {
        let html = render_to_string(|| {
            let form = SecurityFormState::default();
            let message = create_rw_signal(MessageState::default());
            view! {
                <SecuritySection
                    form=form
                    message=message
                    pending=Signal::derive(|| true)
                    on_save=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Saving..."));
        let button = element_containing(&html, "button", "Saving...").unwrap();
        assert!(has_bool_attr(button, "disabled"));
        assert!(html.contains("Require multi-factor authentication"));
    }

    #[test]
    fn privacy_section_lists_export_formats() {
        with_runtime(|| {
            let form = PrivacyFormState::default();
            let message = create_rw_signal(MessageState::default());
            let html = view! {
                <PrivacySection
                    form=form
                    message=message
                    pending=Signal::derive(|| false)
                    on_save=Callback::new(|_| {})
                />
            }
            .into_view()
            .render_to_string()
            .to_string();
            assert!(html.contains("Excel (XLSX)"));
            assert!(html.contains("Data retention (days)"));
        });
    }
}

use crate::components::{
    confirm_dialog::ConfirmDialog,
    layout::{ErrorMessage, LoadingSpinner},
    tabs::Tabs,
};
use crate::models::settings::SettingsSection;
use crate::pages::settings::{
    components::{
        ApiKeyDialog, ApiKeyList, BrandingSection, PrivacySection, RevealedKeyNotice,
        SecuritySection,
    },
    layout::SettingsFrame,
    view_model::{use_settings_view_model, SettingsTab},
};
use leptos::*;

fn tabs() -> Vec<(SettingsTab, &'static str)> {
    vec![
        (SettingsTab::Security, "Security"),
        (SettingsTab::Branding, "Branding"),
        (SettingsTab::Privacy, "Privacy"),
        (SettingsTab::ApiKeys, "API keys"),
    ]
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let vm = use_settings_view_model();

    let loading = Signal::derive(move || vm.settings_resource.loading().get());
    let error = Signal::derive(move || {
        vm.settings_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.error)
    });
    let save = move |section: SettingsSection| Callback::new(move |_| vm.submit_section(section));
    let revoke_open = Signal::derive(move || vm.pending_revoke.with(Option::is_some));
    let revoke_message = Signal::derive(move || {
        vm.pending_revoke
            .with(|key| {
                key.as_ref().map(|key| {
                    format!(
                        "Revoke \"{}\"? Integrations using it stop working immediately.",
                        key.name
                    )
                })
            })
            .unwrap_or_default()
    });

    view! {
        <SettingsFrame>
            <Tabs tabs=tabs() active=vm.active_tab />
            {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <RevealedKeyNotice
                revealed=vm.revealed_key
                on_dismiss=Callback::new(move |_| vm.dismiss_revealed_key())
            />
            {move || match vm.active_tab.get() {
                SettingsTab::Security => view! {
                    <SecuritySection
                        form=vm.security_form
                        message=vm.messages.security
                        pending=vm.section_pending(SettingsSection::Security)
                        on_save=save(SettingsSection::Security)
                    />
                }
                .into_view(),
                SettingsTab::Branding => view! {
                    <BrandingSection
                        form=vm.branding_form
                        message=vm.messages.branding
                        pending=vm.section_pending(SettingsSection::Branding)
                        on_save=save(SettingsSection::Branding)
                    />
                }
                .into_view(),
                SettingsTab::Privacy => view! {
                    <PrivacySection
                        form=vm.privacy_form
                        message=vm.messages.privacy
                        pending=vm.section_pending(SettingsSection::Privacy)
                        on_save=save(SettingsSection::Privacy)
                    />
                }
                .into_view(),
                SettingsTab::ApiKeys => view! {
                    <ApiKeyList
                        keys=vm.api_keys()
                        on_create=Callback::new(move |_| vm.open_create_key())
                        on_revoke=Callback::new(move |key| vm.pending_revoke.set(Some(key)))
                    />
                }
                .into_view(),
            }}
            <ApiKeyDialog
                form=vm.key_form
                open=vm.key_dialog
                message=vm.key_message
                pending=vm.create_key_action.pending()
                on_submit=Callback::new(move |_| vm.submit_key())
                on_close=Callback::new(move |_| vm.key_dialog.set(None))
            />
            <ConfirmDialog
                is_open=revoke_open
                title="Revoke API key"
                message=revoke_message
                on_confirm=Callback::new(move |_| vm.confirm_revoke())
                on_cancel=Callback::new(move |_| vm.pending_revoke.set(None))
                confirm_label="Revoke"
                destructive=true
            />
        </SettingsFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::models::settings::EnterpriseSettings;
    use crate::pages::settings::view_model::SettingsViewModel;
    use crate::test_support::{helpers::{owner_user, provide_auth}, ssr::with_runtime};
    use serde_json::json;

    fn render_with(setup: impl FnOnce(SettingsViewModel)) -> String {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            provide_auth(Some(owner_user()));
            let vm = SettingsViewModel::new();
            provide_context(vm);
            setup(vm);
            let html = view! { <SettingsPage /> }
                .into_view()
                .render_to_string()
                .to_string();
            leptos_reactive::suppress_resource_load(false);
            html
        })
    }

    #[test]
    fn security_tab_is_shown_first() {
        let html = render_with(|_| {});
        assert!(html.contains("Enterprise settings"));
        assert!(html.contains("Session timeout (minutes)"));
        assert!(!html.contains("Export format"));
    }

    #[test]
    fn api_keys_tab_lists_loaded_keys() {
        let html = render_with(|vm| {
            let settings: EnterpriseSettings = serde_json::from_value(json!({
                "apiKeys": [{ "id": "k1", "name": "Zapier", "maskedKey": "lx_****abcd" }]
            }))
            .unwrap();
            vm.settings_resource.set(Ok(settings));
            vm.active_tab.set(SettingsTab::ApiKeys);
        });
        assert!(html.contains("lx_****abcd"));
        assert!(html.contains("Create API key"));
    }
}

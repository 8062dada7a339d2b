use super::{
    repository::{SectionUpdate, SettingsRepository},
    utils::{ApiKeyFormState, BrandingFormState, PrivacyFormState, SecurityFormState},
};
use crate::api::{ApiClient, ApiError};
use crate::components::error::MessageState;
use crate::models::settings::{
    ApiKey, ApiKeyPayload, CreatedApiKey, EnterpriseSettings, SettingsSection,
};
use crate::state::mutation::{apply_optional_list_result, bump};
use crate::state::toast::{use_toasts, ToastState};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsTab {
    Security,
    Branding,
    Privacy,
    ApiKeys,
}

/// Save banners, one per section so a failure in one never hides another.
#[derive(Clone, Copy)]
pub struct SectionMessages {
    pub security: RwSignal<MessageState>,
    pub branding: RwSignal<MessageState>,
    pub privacy: RwSignal<MessageState>,
}

impl SectionMessages {
    fn new() -> Self {
        Self {
            security: create_rw_signal(MessageState::default()),
            branding: create_rw_signal(MessageState::default()),
            privacy: create_rw_signal(MessageState::default()),
        }
    }

    pub fn for_section(&self, section: SettingsSection) -> RwSignal<MessageState> {
        match section {
            SettingsSection::Security => self.security,
            SettingsSection::Branding => self.branding,
            SettingsSection::Privacy => self.privacy,
        }
    }
}

pub type SectionSaveResult = (SettingsSection, Result<(), ApiError>);

pub fn section_saved_message(section: SettingsSection) -> &'static str {
    match section {
        SettingsSection::Security => "Security settings saved",
        SettingsSection::Branding => "Branding saved",
        SettingsSection::Privacy => "Privacy settings saved",
    }
}

/// Routes a finished section save to that section's banner.
pub fn apply_section_result(
    result: Option<SectionSaveResult>,
    messages: SectionMessages,
    toasts: ToastState,
    reload: RwSignal<u32>,
) -> bool {
    let Some((section, result)) = result else {
        return false;
    };
    let message = messages.for_section(section);
    match result {
        Ok(()) => {
            message.update(|msg| msg.set_success(section_saved_message(section)));
            toasts.success(section_saved_message(section));
            bump(reload);
            true
        }
        Err(err) => {
            toasts.error(&err);
            message.update(|msg| msg.set_error(err));
            false
        }
    }
}

/// A created key's secret is held until the admin dismisses it; it is
/// never fetched again.
pub fn apply_created_key(
    result: Option<Result<CreatedApiKey, ApiError>>,
    revealed: RwSignal<Option<CreatedApiKey>>,
    dialog: RwSignal<Option<()>>,
    message: RwSignal<MessageState>,
    toasts: ToastState,
    reload: RwSignal<u32>,
) -> bool {
    match result {
        Some(Ok(created)) => {
            dialog.set(None);
            message.update(|msg| msg.clear());
            toasts.success(format!("API key \"{}\" created", created.api_key.name));
            revealed.set(Some(created));
            bump(reload);
            true
        }
        Some(Err(err)) => {
            toasts.error(&err);
            message.update(|msg| msg.set_error(err));
            false
        }
        None => false,
    }
}

#[derive(Clone, Copy)]
pub struct SettingsViewModel {
    pub settings_resource: Resource<u32, Result<EnterpriseSettings, ApiError>>,
    pub active_tab: RwSignal<SettingsTab>,
    pub security_form: SecurityFormState,
    pub branding_form: BrandingFormState,
    pub privacy_form: PrivacyFormState,
    pub messages: SectionMessages,
    pub save_action: Action<SectionUpdate, SectionSaveResult>,
    pub key_form: ApiKeyFormState,
    pub key_dialog: RwSignal<Option<()>>,
    pub key_message: RwSignal<MessageState>,
    pub revealed_key: RwSignal<Option<CreatedApiKey>>,
    pub create_key_action: Action<ApiKeyPayload, Result<CreatedApiKey, ApiError>>,
    pub pending_revoke: RwSignal<Option<ApiKey>>,
    pub revoke_action: Action<ApiKey, Result<String, ApiError>>,
}

impl SettingsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(SettingsRepository::new(api));
        let toasts = use_toasts();
        let reload = create_rw_signal(0u32);

        let settings_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.load().await }
            },
        );

        let save_action = create_action(move |update: &SectionUpdate| {
            let repo = repository.get_value();
            let update = update.clone();
            async move {
                let result = repo.save_section(&update).await;
                (update.section(), result)
            }
        });
        let create_key_action = create_action(move |payload: &ApiKeyPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.create_api_key(payload).await }
        });
        let revoke_action = create_action(move |key: &ApiKey| {
            let repo = repository.get_value();
            let key = key.clone();
            async move {
                repo.revoke_api_key(&key.id).await?;
                Ok(format!("Revoked API key \"{}\"", key.name))
            }
        });

        let vm = Self {
            settings_resource,
            active_tab: create_rw_signal(SettingsTab::Security),
            security_form: SecurityFormState::default(),
            branding_form: BrandingFormState::default(),
            privacy_form: PrivacyFormState::default(),
            messages: SectionMessages::new(),
            save_action,
            key_form: ApiKeyFormState::default(),
            key_dialog: create_rw_signal(None),
            key_message: create_rw_signal(MessageState::default()),
            revealed_key: create_rw_signal(None),
            create_key_action,
            pending_revoke: create_rw_signal(None),
            revoke_action,
        };

        {
            create_effect(move |_| {
                if let Some(Ok(settings)) = settings_resource.get() {
                    vm.load_forms(&settings);
                }
            });
        }

        {
            let messages = vm.messages;
            create_effect(move |_| {
                apply_section_result(save_action.value().get(), messages, toasts, reload);
            });
        }

        {
            create_effect(move |_| {
                if apply_created_key(
                    create_key_action.value().get(),
                    vm.revealed_key,
                    vm.key_dialog,
                    vm.key_message,
                    toasts,
                    reload,
                ) {
                    vm.key_form.reset();
                }
            });
        }

        {
            create_effect(move |_| {
                let result = revoke_action.value().get();
                if result.is_some() {
                    vm.pending_revoke.set(None);
                }
                apply_optional_list_result(result, toasts, reload);
            });
        }

        vm
    }

    /// Refills every section from the server copy.
    pub fn load_forms(&self, settings: &EnterpriseSettings) {
        self.security_form.load_from(&settings.security);
        self.branding_form.load_from(&settings.branding);
        self.privacy_form.load_from(&settings.privacy);
    }

    pub fn api_keys(&self) -> Signal<Vec<ApiKey>> {
        let resource = self.settings_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(Result::ok)
                .map(|settings| settings.api_keys)
                .unwrap_or_default()
        })
    }

    /// Only the section being saved shows as busy.
    pub fn section_pending(&self, section: SettingsSection) -> Signal<bool> {
        let action = self.save_action;
        Signal::derive(move || {
            action.pending().get()
                && action
                    .input()
                    .with(|input| input.as_ref().map(SectionUpdate::section) == Some(section))
        })
    }

    pub fn submit_section(&self, section: SettingsSection) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let update = match section {
            SettingsSection::Security => self.security_form.to_payload().map(SectionUpdate::Security),
            SettingsSection::Branding => self.branding_form.to_payload().map(SectionUpdate::Branding),
            SettingsSection::Privacy => self.privacy_form.to_payload().map(SectionUpdate::Privacy),
        };
        let message = self.messages.for_section(section);
        match update {
            Ok(update) => {
                message.update(|msg| msg.clear());
                self.save_action.dispatch(update);
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn open_create_key(&self) {
        self.key_form.reset();
        self.key_message.update(|msg| msg.clear());
        self.key_dialog.set(Some(()));
    }

    pub fn submit_key(&self) {
        if self.create_key_action.pending().get_untracked() {
            return;
        }
        match self.key_form.to_payload() {
            Ok(payload) => {
                self.key_message.update(|msg| msg.clear());
                self.create_key_action.dispatch(payload);
            }
            Err(err) => self.key_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn dismiss_revealed_key(&self) {
        self.revealed_key.set(None);
    }

    pub fn confirm_revoke(&self) {
        if let Some(key) = self.pending_revoke.get_untracked() {
            self.revoke_action.dispatch(key);
        }
    }
}

pub fn use_settings_view_model() -> SettingsViewModel {
    match use_context::<SettingsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = SettingsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
